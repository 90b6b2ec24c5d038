//! Educational Context Extraction.
//!
//! Multi-label tagging of what kind of answer a question asks for and how
//! deep it should go.

use serde::{Deserialize, Serialize};

/// Kind of answer a question asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ProblemSolving,
    ConceptualUnderstanding,
    Analytical,
    ProofBased,
}

/// Hint about the expected depth of the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyIndicator {
    Basic,
    Advanced,
    RequiresDetailedExplanation,
}

const QUESTION_TYPE_TRIGGERS: &[(QuestionType, &[&str])] = &[
    (
        QuestionType::ProblemSolving,
        &["solve", "calculate", "find", "compute"],
    ),
    (
        QuestionType::ConceptualUnderstanding,
        &["explain", "describe", "what is", "define"],
    ),
    (QuestionType::Analytical, &["how", "why", "when", "where"]),
    (QuestionType::ProofBased, &["prove", "derive", "show that"]),
];

const DIFFICULTY_TRIGGERS: &[(DifficultyIndicator, &[&str])] = &[
    (
        DifficultyIndicator::Basic,
        &["basic", "simple", "elementary", "fundamental"],
    ),
    (
        DifficultyIndicator::Advanced,
        &["advanced", "complex", "difficult", "challenging"],
    ),
    (
        DifficultyIndicator::RequiresDetailedExplanation,
        &["step by step", "detailed", "thorough"],
    ),
];

/// Educational context of a question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationalContext {
    pub question_types: Vec<QuestionType>,
    /// Part of the output contract; no rule fills it yet
    pub learning_objectives: Vec<String>,
    /// Part of the output contract; no rule fills it yet
    pub prerequisites: Vec<String>,
    pub difficulty_indicators: Vec<DifficultyIndicator>,
}

fn tags<T: Copy>(text_lower: &str, triggers: &[(T, &[&str])]) -> Vec<T> {
    triggers
        .iter()
        .filter(|(_, words)| words.iter().any(|w| text_lower.contains(w)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Tag question types and difficulty indicators of a question
pub fn extract_educational_context(text: &str) -> EducationalContext {
    let text_lower = text.to_lowercase();

    EducationalContext {
        question_types: tags(&text_lower, QUESTION_TYPE_TRIGGERS),
        difficulty_indicators: tags(&text_lower, DIFFICULTY_TRIGGERS),
        ..Default::default()
    }
}
