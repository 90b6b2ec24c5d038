//! Analysis Cache
//!
//! Bounded LRU cache of question analyses keyed by an exact-text question
//! key, so a repeated question skips the whole pre-processing pipeline.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::analysis::QuestionAnalysis;

/// Hit/miss counters of the cache
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Share of lookups served from cache (0.0 when nothing was looked up)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe LRU cache of analyses
pub struct AnalysisCache {
    entries: Mutex<LruCache<String, QuestionAnalysis>>,
    capacity: NonZeroUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fetch a cached analysis, refreshing its recency
    pub fn get(&self, key: &str) -> Option<QuestionAnalysis> {
        let found = match self.entries.lock() {
            Ok(mut entries) => entries.get(key).cloned(),
            Err(_) => {
                warn!("Analysis cache lock poisoned, treating lookup as a miss");
                None
            }
        };

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Analysis cache hit for {}", key);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        found
    }

    /// Store an analysis, evicting the least recently used entry when full
    pub fn insert(&self, key: String, analysis: QuestionAnalysis) {
        if let Ok(mut entries) = self.entries.lock() {
            if let Some((evicted, _)) = entries.push(key.clone(), analysis) {
                if evicted != key {
                    debug!("Evicted analysis {} from cache", evicted);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity.get(),
        }
    }
}
