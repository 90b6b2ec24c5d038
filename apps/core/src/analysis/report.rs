//! Question Analysis - Output structure of the pre-processing pipeline.
//!
//! Bundles every sub-result produced for one student question.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clarification::ClarificationRequest;
use super::completeness::CompletenessReport;
use super::context::EducationalContext;
use super::expressions::ExpressionMatch;
use super::grade::GradeAssessment;
use super::language::Language;
use super::subject::SubjectClassification;

/// Complete analysis of a student question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnalysis {
    /// Question as the student wrote it
    pub query: String,

    /// Question after whitespace, digit and operator normalization
    pub normalized_text: String,

    /// Detected on the question as written
    pub language: Language,

    /// Expressions found in the normalized text
    pub mathematical_expressions: Vec<ExpressionMatch>,

    /// LaTeX-style rendering of each expression, same order
    pub formatted_expressions: Vec<String>,

    pub subject_analysis: SubjectClassification,

    pub grade_analysis: GradeAssessment,

    pub completeness: CompletenessReport,

    pub educational_context: EducationalContext,

    /// Follow-up questions, empty when the question is complete
    pub clarifying_questions: Vec<String>,

    /// Cache key of the question
    pub fingerprint: String,

    /// Whether this analysis was served from cache
    pub from_cache: bool,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl QuestionAnalysis {
    /// Whether the student should be asked for more details
    pub fn needs_clarification(&self) -> bool {
        !self.completeness.is_complete
    }

    /// Input for the clarifying-question generator
    pub fn clarification_request(&self) -> ClarificationRequest {
        ClarificationRequest {
            language: self.language,
            subject: self.subject_analysis.subject,
            issues: self.completeness.issues.clone(),
        }
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Language: {}, Subject: {} ({:.0}%), Grade: {}, Expressions: {}, Complete: {}{}",
            self.language,
            self.subject_analysis.subject,
            self.subject_analysis.confidence * 100.0,
            self.grade_analysis.grade_level,
            self.mathematical_expressions.len(),
            if self.completeness.is_complete { "yes" } else { "no" },
            if self.from_cache { ", cached" } else { "" }
        )
    }
}
