//! Cache Tests
//!
//! LRU eviction, hit/miss accounting and analyzer integration.

use std::num::NonZeroUsize;

use crate::analysis::QuestionAnalyzer;
use crate::cache::AnalysisCache;

fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_miss_then_hit() {
    let analyzer = QuestionAnalyzer::new();
    let cache = AnalysisCache::new(capacity(2));
    let analysis = analyzer.analyze("What is an atom?");

    assert!(cache.get(&analysis.fingerprint).is_none());
    cache.insert(analysis.fingerprint.clone(), analysis.clone());
    assert_eq!(cache.get(&analysis.fingerprint), Some(analysis));

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hit_rate(), 0.5);
}

#[test]
fn test_least_recently_used_is_evicted() {
    let analyzer = QuestionAnalyzer::new();
    let cache = AnalysisCache::new(capacity(2));

    let first = analyzer.analyze("What is an atom?");
    let second = analyzer.analyze("What is gravity?");
    let third = analyzer.analyze("What is a cell?");

    cache.insert(first.fingerprint.clone(), first.clone());
    cache.insert(second.fingerprint.clone(), second.clone());
    // touch the first entry so the second becomes the oldest
    assert!(cache.get(&first.fingerprint).is_some());
    cache.insert(third.fingerprint.clone(), third.clone());

    assert_eq!(cache.len(), 2);
    assert!(cache.get(&first.fingerprint).is_some());
    assert!(cache.get(&second.fingerprint).is_none());
    assert!(cache.get(&third.fingerprint).is_some());
}

#[test]
fn test_clear() {
    let analyzer = QuestionAnalyzer::new();
    let cache = AnalysisCache::new(capacity(4));
    let analysis = analyzer.analyze("Explain photosynthesis");

    cache.insert(analysis.fingerprint.clone(), analysis);
    assert!(!cache.is_empty());

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats().capacity, 4);
}

#[test]
fn test_cached_analyzer_flags_hits() {
    let analyzer = QuestionAnalyzer::with_cache(capacity(8));

    let first = analyzer.analyze("Find the area of a circle");
    let again = analyzer.analyze("Find the area of a circle");
    let other = analyzer.analyze("Find the area of a square");

    assert!(!first.from_cache);
    assert!(again.from_cache);
    assert!(!other.from_cache);
    assert!(again.summary().ends_with(", cached"));
    assert_eq!(analyzer.cache().unwrap().len(), 2);
}

#[test]
fn test_case_variant_matches_fresh_analysis() {
    let analyzer = QuestionAnalyzer::with_cache(capacity(8));

    analyzer.analyze("FIND SIN(30) + 2 X 3");
    let lower = analyzer.analyze("find sin(30) + 2 x 3");
    let fresh = QuestionAnalyzer::new().analyze("find sin(30) + 2 x 3");

    assert!(!lower.from_cache);
    assert_eq!(lower.query, fresh.query);
    assert_eq!(lower.normalized_text, fresh.normalized_text);
    assert_eq!(lower.mathematical_expressions, fresh.mathematical_expressions);
    assert_eq!(lower.formatted_expressions, fresh.formatted_expressions);

    let repeat = analyzer.analyze("find sin(30) + 2 x 3");
    assert!(repeat.from_cache);
    assert_eq!(repeat.normalized_text, fresh.normalized_text);
}
