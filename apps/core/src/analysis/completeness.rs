//! Question Completeness Validation.
//!
//! Checks whether a question carries enough information to be answered.
//! Each failed check costs a fixed 25% of confidence, floored at 0.1.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::expressions::extract_mathematical_expressions;

/// Confidence lost per detected issue
const ISSUE_PENALTY: f32 = 0.25;

/// Lowest confidence ever reported
const MIN_CONFIDENCE: f32 = 0.1;

/// Questions shorter than this (in characters) are too short
const MIN_QUESTION_CHARS: usize = 5;

/// Questions leaning on context need at least this many words
const MIN_CONTEXT_WORDS: usize = 8;

/// Words that point at context the student did not provide
const CONTEXT_REFERENCES: &[&str] = &["this", "that", "it", "above", "previous", "following"];

/// Problem found in a question, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessIssue {
    TooVague,
    MissingEquation,
    MissingContext,
    TooShort,
}

impl CompletenessIssue {
    pub fn label(&self) -> &'static str {
        match self {
            CompletenessIssue::TooVague => "too_vague",
            CompletenessIssue::MissingEquation => "missing_equation",
            CompletenessIssue::MissingContext => "missing_context",
            CompletenessIssue::TooShort => "too_short",
        }
    }

    /// Advice shown to the student
    pub fn suggestion(&self) -> &'static str {
        match self {
            CompletenessIssue::TooVague => {
                "Please be more specific about the topic or problem you need help with."
            }
            CompletenessIssue::MissingEquation => {
                "Please provide the complete equation or mathematical expression to solve."
            }
            CompletenessIssue::MissingContext => {
                "Please provide the complete context or reference material you are referring to."
            }
            CompletenessIssue::TooShort => {
                "Please provide more details about what you need help with."
            }
        }
    }
}

impl fmt::Display for CompletenessIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of completeness validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub is_complete: bool,
    pub confidence: f32,
    pub issues: Vec<CompletenessIssue>,
    /// One suggestion per issue, same order
    pub suggestions: Vec<String>,
}

impl CompletenessReport {
    pub fn has_issue(&self, issue: CompletenessIssue) -> bool {
        self.issues.contains(&issue)
    }
}

// Bare requests with nothing to work on
static VAGUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^(help|explain|what|how|tell)(\s+me)?(\s+about)?\s*$")
            .expect("Invalid regex: bare request"),
        Regex::new(r"^(math|physics|chemistry|biology|science)\s*$")
            .expect("Invalid regex: bare subject"),
        Regex::new(r"^(homework|assignment|problem)\s*$").expect("Invalid regex: bare homework"),
    ]
});

/// Validate whether a question is complete enough to answer
pub fn validate_question_completeness(text: &str) -> CompletenessReport {
    let text_clean = text.trim().to_lowercase();
    let mut issues = Vec::new();

    if VAGUE_PATTERNS.iter().any(|p| p.is_match(&text_clean)) {
        issues.push(CompletenessIssue::TooVague);
    }

    if text_clean.contains("solve") && extract_mathematical_expressions(text).is_empty() {
        issues.push(CompletenessIssue::MissingEquation);
    }

    if CONTEXT_REFERENCES.iter().any(|r| text_clean.contains(r))
        && text.split_whitespace().count() < MIN_CONTEXT_WORDS
    {
        issues.push(CompletenessIssue::MissingContext);
    }

    // A bare request is already reported as vague
    if text.trim().chars().count() < MIN_QUESTION_CHARS
        && !issues.contains(&CompletenessIssue::TooVague)
    {
        issues.push(CompletenessIssue::TooShort);
    }

    let confidence = (1.0 - issues.len() as f32 * ISSUE_PENALTY).max(MIN_CONFIDENCE);
    let suggestions = issues.iter().map(|i| i.suggestion().to_string()).collect();

    CompletenessReport {
        is_complete: issues.is_empty(),
        confidence,
        issues,
        suggestions,
    }
}
