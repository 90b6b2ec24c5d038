//! # Tutor Core
//!
//! Rule-based pre-processing of Bengali and English student questions:
//! language, subject, grade band, embedded math, completeness, plus the
//! deterministic tools (calculator, definitions, fingerprints) the tutoring
//! agents lean on.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod tools;

pub use analysis::{QuestionAnalysis, QuestionAnalyzer};
pub use config::TutorConfig;
pub use error::TutorError;

#[cfg(test)]
mod tests;
