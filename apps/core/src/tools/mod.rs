//! # Tools Module
//!
//! Deterministic helpers the tutoring agents call instead of the model:
//! - `calculator`: safe arithmetic evaluation
//! - `definitions`: quick definitions of common terms
//! - `fingerprint`: cache keys for student questions

pub mod calculator;
pub mod definitions;
pub mod fingerprint;

pub use calculator::{evaluate, simple_calculator, CalcError};
pub use definitions::{describe_term, lookup_definition};
pub use fingerprint::{analysis_key, query_fingerprint};
