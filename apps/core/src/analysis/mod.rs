//! # Analysis Module
//!
//! Fast, rule-based analysis of student questions in Bengali and English.
//! Runs BEFORE any tutoring agent sees the question to enrich its context.
//!
//! ## Components
//! - `language`: Bengali / English / mixed detection
//! - `normalize`: whitespace, digit and operator normalization
//! - `expressions`: mathematical expression extraction and LaTeX formatting
//! - `subject`: keyword-based subject classification
//! - `grade`: grade-band assessment
//! - `completeness`: checks for vague or under-specified questions
//! - `clarification`: follow-up questions for incomplete questions
//! - `context`: question type and difficulty tagging
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod clarification;
pub mod completeness;
pub mod context;
pub mod expressions;
pub mod grade;
pub mod language;
pub mod normalize;
pub mod report;
pub mod subject;

pub use analyzer::QuestionAnalyzer;
pub use clarification::{generate_clarifying_questions, ClarificationRequest};
pub use completeness::{validate_question_completeness, CompletenessIssue, CompletenessReport};
pub use context::{extract_educational_context, DifficultyIndicator, EducationalContext, QuestionType};
pub use expressions::{
    extract_mathematical_expressions, format_mathematical_expression, ExpressionKind,
    ExpressionMatch,
};
pub use grade::{assess_grade_level, GradeAssessment, GradeLevel};
pub use language::{detect_language, Language};
pub use normalize::normalize_text;
pub use report::QuestionAnalysis;
pub use subject::{classify_subject, Subject, SubjectClassification};
