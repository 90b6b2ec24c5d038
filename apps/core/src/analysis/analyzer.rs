//! Question Analyzer - Main orchestrator for the analysis module.
//!
//! Runs language detection, normalization, expression extraction, subject
//! and grade classification, completeness validation and context tagging,
//! then asks for clarification when the question is incomplete.
//!
//! With a cache attached, a question repeated verbatim is answered from the
//! cache without running the pipeline again. The cache is keyed on the exact
//! text because normalization and expression matching are case-sensitive;
//! the reported `fingerprint` stays case-insensitive.

use chrono::Utc;
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::{debug, info};

use super::clarification::generate_clarifying_questions;
use super::completeness::validate_question_completeness;
use super::context::extract_educational_context;
use super::expressions::{extract_mathematical_expressions, format_mathematical_expression};
use super::grade::assess_grade_level;
use super::language::{detect_language, Language};
use super::normalize::normalize_text;
use super::report::QuestionAnalysis;
use super::subject::classify_subject;
use crate::cache::AnalysisCache;
use crate::config::TutorConfig;
use crate::tools::{analysis_key, query_fingerprint};

/// Main analyzer that orchestrates all analysis components
pub struct QuestionAnalyzer {
    cache: Option<AnalysisCache>,
}

impl Default for QuestionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionAnalyzer {
    /// Create an analyzer without a cache
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Create an analyzer that remembers up to `capacity` analyses
    pub fn with_cache(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Some(AnalysisCache::new(capacity)),
        }
    }

    /// Create a cached analyzer sized from configuration
    pub fn from_config(config: &TutorConfig) -> Self {
        match NonZeroUsize::new(config.cache_capacity) {
            Some(capacity) => Self::with_cache(capacity),
            None => Self::new(),
        }
    }

    pub fn cache(&self) -> Option<&AnalysisCache> {
        self.cache.as_ref()
    }

    /// Analyze a student question
    pub fn analyze(&self, question: &str) -> QuestionAnalysis {
        let start = Instant::now();

        // Language is judged on what the student actually typed
        let language = detect_language(question);
        let key = analysis_key(question, language);

        if let Some(cache) = &self.cache {
            if let Some(mut cached) = cache.get(&key) {
                cached.from_cache = true;
                info!("Analysis (cached): {}", cached.summary());
                return cached;
            }
        }

        let fingerprint = query_fingerprint(question, Some(language));
        let analysis = self.run_pipeline(question, language, fingerprint, start);
        info!("Analysis: {}", analysis.summary());

        if let Some(cache) = &self.cache {
            cache.insert(key, analysis.clone());
        }

        analysis
    }

    fn run_pipeline(
        &self,
        question: &str,
        language: Language,
        fingerprint: String,
        start: Instant,
    ) -> QuestionAnalysis {
        debug!("Language: {}", language);

        let normalized_text = normalize_text(question);
        debug!("Normalized: {:?}", normalized_text);

        let mathematical_expressions = extract_mathematical_expressions(&normalized_text);
        let formatted_expressions: Vec<String> = mathematical_expressions
            .iter()
            .map(|m| format_mathematical_expression(&m.expression))
            .collect();
        debug!("Expressions: {:?}", formatted_expressions);

        let subject_analysis = classify_subject(&normalized_text);
        debug!(
            "Subject: {} ({:.2})",
            subject_analysis.subject, subject_analysis.confidence
        );

        let grade_analysis = assess_grade_level(&normalized_text, subject_analysis.subject);
        debug!(
            "Grade: {} ({:.2})",
            grade_analysis.grade_level, grade_analysis.confidence
        );

        let completeness = validate_question_completeness(&normalized_text);
        debug!("Completeness issues: {:?}", completeness.issues);

        let educational_context = extract_educational_context(&normalized_text);

        let mut analysis = QuestionAnalysis {
            query: question.to_string(),
            normalized_text,
            language,
            mathematical_expressions,
            formatted_expressions,
            subject_analysis,
            grade_analysis,
            completeness,
            educational_context,
            clarifying_questions: vec![],
            fingerprint,
            from_cache: false,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        };

        if analysis.needs_clarification() {
            analysis.clarifying_questions =
                generate_clarifying_questions(&analysis.clarification_request());
        }

        analysis.processing_time_ms = start.elapsed().as_millis() as u64;
        analysis
    }
}
