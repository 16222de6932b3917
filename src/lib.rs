//! Chain Cache - A lightweight in-memory key/value cache
//!
//! Provides thread-safe caching with TTL expiration over a chained hash
//! table that grows proactively under load.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, CacheStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
