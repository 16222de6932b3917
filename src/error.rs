//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Oversized keys and values are rejected with an error rather than
/// silently truncated, so no stored byte is ever dropped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Key exceeds the configured length bound
    #[error("key exceeds maximum length of {max} bytes (got {len})")]
    KeyTooLong { len: usize, max: usize },

    /// Value exceeds the configured size bound
    #[error("value exceeds maximum size of {max} bytes (got {len})")]
    ValueTooLarge { len: usize, max: usize },
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
