//! Arithmetic Calculator.
//!
//! Recursive-descent evaluator for the fast-track calculator tool. Accepts
//! numeric literals, `+ - * /`, unary signs and parentheses; every other
//! character is rejected before anything is evaluated.
//!
//! Grammar:
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! ```

use thiserror::Error;
use tracing::{debug, warn};

/// Deepest parenthesis / unary-sign nesting accepted
const MAX_DEPTH: usize = 64;

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Empty expression")]
    Empty,

    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Expression nested too deeply")]
    TooDeep,

    #[error("Result is not a finite number")]
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn symbol(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// Split input into tokens, tagging each with its character position
fn tokenize(expr: &str) -> Result<Vec<(usize, Token)>, CalcError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
                tokens.push((start, Token::Number(value)));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(CalcError::UnexpectedCharacter {
                    ch: other,
                    position: i,
                })
            }
        };
        tokens.push((i, token));
        i += 1;
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(_, t)| *t)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    fn descend(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                value / rhs
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(sign @ (Token::Plus | Token::Minus)) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(if sign == Token::Minus { -value } else { value })
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some((_, Token::Number(value))) => Ok(value),
            Some((_, Token::LParen)) => {
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some((_, Token::RParen)) => Ok(value),
                    Some((position, token)) => Err(CalcError::UnexpectedToken {
                        found: token.symbol(),
                        position,
                    }),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some((position, token)) => Err(CalcError::UnexpectedToken {
                found: token.symbol(),
                position,
            }),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some((position, token)) = parser.next() {
        return Err(CalcError::UnexpectedToken {
            found: token.symbol(),
            position,
        });
    }

    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    Ok(value)
}

/// Evaluate an expression and render the tool reply shown to the student
pub fn simple_calculator(expression: &str) -> String {
    match evaluate(expression) {
        Ok(value) => {
            debug!("Calculated {} = {}", expression, value);
            format!("{} = {}", expression, value)
        }
        Err(CalcError::UnexpectedCharacter { ch, position }) => {
            warn!("Rejected calculator input: '{}' at {}", ch, position);
            "Invalid expression - only basic math operations allowed".to_string()
        }
        Err(e) => {
            debug!("Cannot calculate '{}': {}", expression, e);
            format!("Cannot calculate: {}", expression)
        }
    }
}
