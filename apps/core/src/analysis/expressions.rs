//! Mathematical Expression Extraction.
//!
//! Finds equations, algebraic terms, arithmetic chains, function calls,
//! fractions and powers in a question using six independent regex families.
//! Overlapping matches are resolved leftmost-first, longest-first, so an
//! equation swallows the arithmetic found inside it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Kind of mathematical expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionKind {
    /// Contains `=`
    Equation,
    /// Letters mixed with digits and operators
    Algebraic,
    /// Pure digit/operator chain
    Arithmetic,
    /// `sin(..)`, `log(..)`, `sqrt(..)` ...
    Function,
    /// `digit/digit`
    Fraction,
    /// `base^exponent`
    Power,
}

impl ExpressionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExpressionKind::Equation => "equation",
            ExpressionKind::Algebraic => "algebraic",
            ExpressionKind::Arithmetic => "arithmetic",
            ExpressionKind::Function => "function",
            ExpressionKind::Fraction => "fraction",
            ExpressionKind::Power => "power",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A mathematical expression found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionMatch {
    /// Expression family that produced the match
    #[serde(rename = "type")]
    pub kind: ExpressionKind,
    /// Matched text with surrounding whitespace removed
    pub expression: String,
    /// Byte offset where the raw match starts
    pub start_pos: usize,
    /// Byte offset just past the raw match
    pub end_pos: usize,
}

impl ExpressionMatch {
    fn overlaps(&self, other: &ExpressionMatch) -> bool {
        self.start_pos < other.end_pos && self.end_pos > other.start_pos
    }
}

/// Pattern families, in the order their matches are pooled
static EXPRESSION_PATTERNS: LazyLock<Vec<(ExpressionKind, Regex)>> = LazyLock::new(|| {
    vec![
        (
            ExpressionKind::Equation,
            Regex::new(r"(?i)[0-9a-zA-Z\+\-\*/\(\)\s]*=\s*[0-9a-zA-Z\+\-\*/\(\)\s]+")
                .expect("Invalid regex: equation pattern"),
        ),
        (
            ExpressionKind::Algebraic,
            Regex::new(r"(?i)[0-9]*[a-zA-Z][0-9]*[\+\-\*/\^]*[0-9a-zA-Z\+\-\*/\(\)\s]*")
                .expect("Invalid regex: algebraic pattern"),
        ),
        (
            ExpressionKind::Arithmetic,
            Regex::new(r"(?i)[0-9]+[\+\-\*/][0-9\+\-\*/\(\)\s]+")
                .expect("Invalid regex: arithmetic pattern"),
        ),
        (
            ExpressionKind::Function,
            Regex::new(r"(?i)\b(?:sin|cos|tan|log|ln|sqrt|exp)\s*\([^)]+\)")
                .expect("Invalid regex: function pattern"),
        ),
        (
            ExpressionKind::Fraction,
            Regex::new(r"(?i)[0-9]+/[0-9]+").expect("Invalid regex: fraction pattern"),
        ),
        (
            ExpressionKind::Power,
            Regex::new(r"(?i)[0-9a-zA-Z]+\^[0-9]+").expect("Invalid regex: power pattern"),
        ),
    ]
});

/// Extract non-overlapping mathematical expressions, ordered by start position.
pub fn extract_mathematical_expressions(text: &str) -> Vec<ExpressionMatch> {
    let mut candidates: Vec<ExpressionMatch> = EXPRESSION_PATTERNS
        .iter()
        .flat_map(|(kind, pattern)| {
            pattern.find_iter(text).map(move |m| ExpressionMatch {
                kind: *kind,
                expression: m.as_str().trim().to_string(),
                start_pos: m.start(),
                end_pos: m.end(),
            })
        })
        .collect();

    // Leftmost first, then longest first; the sort is stable so pattern
    // order breaks the remaining ties.
    candidates.sort_by(|a, b| {
        a.start_pos.cmp(&b.start_pos).then_with(|| {
            b.expression
                .chars()
                .count()
                .cmp(&a.expression.chars().count())
        })
    });

    let mut kept: Vec<ExpressionMatch> = Vec::new();
    for candidate in candidates {
        if !kept.iter().any(|existing| candidate.overlaps(existing)) {
            kept.push(candidate);
        }
    }

    kept
}

static NUMERIC_EXPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^(\d+)").expect("Invalid regex: numeric exponent"));

static LETTER_EXPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^([a-zA-Z])").expect("Invalid regex: letter exponent"));

static DIGIT_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").expect("Invalid regex: digit fraction"));

static SQUARE_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sqrt\(([^)]+)\)").expect("Invalid regex: square root"));

static NAMED_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(sin|cos|tan|log|ln)\b").expect("Invalid regex: named function")
});

/// Rewrite an expression with LaTeX-style markup for display.
///
/// Purely textual: nested or malformed input can come out malformed.
pub fn format_mathematical_expression(expr: &str) -> String {
    let formatted = NUMERIC_EXPONENT.replace_all(expr, "^{${1}}");
    let formatted = LETTER_EXPONENT.replace_all(&formatted, "^{${1}}");
    let formatted = DIGIT_FRACTION.replace_all(&formatted, r"\frac{${1}}{${2}}");
    let formatted = SQUARE_ROOT.replace_all(&formatted, r"\sqrt{${1}}");
    let formatted = NAMED_FUNCTION.replace_all(&formatted, r"\${1}");

    formatted.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_swallows_submatches() {
        let found = extract_mathematical_expressions("2x + 5 = 13");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ExpressionKind::Equation);
        assert_eq!(found[0].expression, "2x + 5 = 13");
        assert_eq!(found[0].start_pos, 0);
        assert_eq!(found[0].end_pos, 11);
    }

    #[test]
    fn test_arithmetic_inside_sentence() {
        let found = extract_mathematical_expressions("Calculate: 12+7");

        let arithmetic: Vec<_> = found
            .iter()
            .filter(|m| m.kind == ExpressionKind::Arithmetic)
            .collect();
        assert_eq!(arithmetic.len(), 1);
        assert_eq!(arithmetic[0].expression, "12+7");
    }

    #[test]
    fn test_function_call() {
        let text = "৩ sin(30)";
        let found = extract_mathematical_expressions(text);

        assert_eq!(found.len(), 1);
        let first = &found[0];
        assert_eq!(first.expression, "sin(30)");
        // offsets are byte offsets, past the three-byte Bengali digit
        assert_eq!(first.start_pos, 4);
        assert_eq!(text[first.start_pos..first.end_pos].trim(), first.expression);
    }

    #[test]
    fn test_no_expressions() {
        assert!(extract_mathematical_expressions("").is_empty());
        assert!(extract_mathematical_expressions("১২৩ ?!").is_empty());
    }

    #[test]
    fn test_results_are_ordered_and_disjoint() {
        let found =
            extract_mathematical_expressions("x^2 + 3 = 7, then 1/2 and 4*5 and log(10)");

        for pair in found.windows(2) {
            assert!(pair[0].start_pos <= pair[1].start_pos);
            assert!(pair[0].end_pos <= pair[1].start_pos);
        }
    }

    #[test]
    fn test_format_exponents() {
        assert_eq!(format_mathematical_expression("x^2 + y^n"), "x^{2} + y^{n}");
    }

    #[test]
    fn test_format_fraction_and_root() {
        assert_eq!(format_mathematical_expression("3/4"), r"\frac{3}{4}");
        assert_eq!(format_mathematical_expression("sqrt(16)"), r"\sqrt{16}");
    }

    #[test]
    fn test_format_functions() {
        assert_eq!(
            format_mathematical_expression("sin(x) + cos(x) + ln(2)"),
            r"\sin(x) + \cos(x) + \ln(2)"
        );
        // names inside longer words stay untouched
        assert_eq!(format_mathematical_expression("single"), "single");
    }
}
