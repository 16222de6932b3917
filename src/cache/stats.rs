//! Cache Statistics Module
//!
//! Tracks cache performance metrics: hits, misses, lazy expiries, and
//! table resizes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (no live entry for the key)
    pub misses: u64,
    /// Number of expired entries collected during lookups
    pub expired: u64,
    /// Number of times the bucket table doubled
    pub resizes: u64,
    /// Current number of entries in the cache
    pub live_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds lazily collected expired entries to the expiry counter.
    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    /// Increments the resize counter.
    pub fn record_resize(&mut self) {
        self.resizes += 1;
    }

    /// Updates the live entry count.
    pub fn set_live_entries(&mut self, count: usize) {
        self.live_entries = count;
    }
}
