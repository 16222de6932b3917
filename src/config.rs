//! Configuration Module
//!
//! Construction parameters for the cache. The defaults are fixed values
//! compatible with existing callers; there is no environment or file
//! loading.

use crate::cache::{INITIAL_CAPACITY, LOAD_FACTOR_THRESHOLD, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Cache construction parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Number of buckets the table starts with
    pub initial_capacity: usize,
    /// Live-entry to bucket ratio that triggers table growth
    pub load_factor_threshold: f64,
    /// Maximum allowed key length in bytes
    pub max_key_length: usize,
    /// Maximum allowed value size in bytes
    pub max_value_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            load_factor_threshold: LOAD_FACTOR_THRESHOLD,
            max_key_length: MAX_KEY_LENGTH,
            max_value_size: MAX_VALUE_SIZE,
        }
    }
}
