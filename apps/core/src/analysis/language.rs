//! Language Detection.
//!
//! Decides whether a question is written mostly in Bengali script, mostly in
//! Latin letters, or a mix of both. Digits, punctuation and whitespace are not
//! counted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Share of letters one script needs to claim the whole text
const DOMINANCE_THRESHOLD: f32 = 0.6;

/// Detected language of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bengali,
    English,
    Mixed,
}

impl Language {
    /// Returns the label used in analysis output
    pub fn label(&self) -> &'static str {
        match self {
            Language::Bengali => "bengali",
            Language::English => "english",
            Language::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bengali" | "bn" => Ok(Language::Bengali),
            "english" | "en" => Ok(Language::English),
            "mixed" => Ok(Language::Mixed),
            other => Err(format!("Unknown language '{}'", other)),
        }
    }
}

/// Characters of the Bengali Unicode block (U+0980..=U+09FF)
fn is_bengali(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

/// Detect the dominant language of a text.
///
/// Text without any Bengali or Latin letters defaults to English.
pub fn detect_language(text: &str) -> Language {
    let bengali_chars = text.chars().filter(|c| is_bengali(*c)).count();
    let english_chars = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

    let total_chars = bengali_chars + english_chars;
    if total_chars == 0 {
        return Language::English;
    }

    let bengali_ratio = bengali_chars as f32 / total_chars as f32;
    let english_ratio = english_chars as f32 / total_chars as f32;

    if bengali_ratio > DOMINANCE_THRESHOLD {
        Language::Bengali
    } else if english_ratio > DOMINANCE_THRESHOLD {
        Language::English
    } else {
        Language::Mixed
    }
}
