//! Query Fingerprinting.
//!
//! Stable cache key for a student question: the lower-cased, trimmed query
//! and its language are serialized as sorted-key JSON and hashed.
//!
//! ```text
//! key = hex(SHA256({"language": <lang>, "query": <normalized query>}))
//! ```
//!
//! [`analysis_key`] hashes the question exactly as written instead, for
//! caches whose entries echo the question text back.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::analysis::Language;

/// Field order is the sorted key order of the hashed JSON
#[derive(Serialize)]
struct FingerprintInput<'a> {
    language: &'a str,
    query: &'a str,
}

/// Fingerprint a query; a missing language is recorded as `unknown`
pub fn query_fingerprint(query: &str, language: Option<Language>) -> String {
    let normalized = query.trim().to_lowercase();
    hash_input(&normalized, language)
}

/// Case- and whitespace-sensitive key of a question
pub fn analysis_key(question: &str, language: Language) -> String {
    hash_input(question, Some(language))
}

fn hash_input(query: &str, language: Option<Language>) -> String {
    let input = FingerprintInput {
        language: language.map(|l| l.label()).unwrap_or("unknown"),
        query,
    };

    // Serializing two string fields cannot fail
    let payload = serde_json::to_vec(&input).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(&payload);
    hex::encode(hasher.finalize())
}
