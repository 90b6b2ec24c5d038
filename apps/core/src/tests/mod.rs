//! Test Module
//!
//! Crate-level test suite for the tutoring core.
//!
//! ## Test Categories
//! - `analysis_tests`: analysis components, analyzer pipeline, property tests
//! - `tools_tests`: calculator, definitions, fingerprints
//! - `cache_tests`: LRU cache behavior
//! - `config_tests`: environment configuration

pub mod cache_tests;
pub mod tools_tests;
