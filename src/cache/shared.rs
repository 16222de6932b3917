//! Shared Cache Module
//!
//! The public thread-safe cache handle: one exclusive lock around the
//! store, held for the full duration of every operation.

use parking_lot::Mutex;

use crate::cache::stats::CacheStats;
use crate::cache::store::CacheStore;
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Thread-safe key/value cache with TTL expiry.
///
/// Every operation serializes on a single exclusive lock; `get` takes the
/// same lock as `set` and `delete` because it may unlink expired entries.
/// Lock acquisition blocks until the lock is free, and a resize triggered
/// inside `set` completes within that same critical section. Share the
/// cache across threads with `Arc`.
///
/// Dropping the cache releases every entry, the bucket array, and the
/// lock; a dropped cache cannot be used again.
#[derive(Debug)]
pub struct Cache {
    inner: Mutex<CacheStore>,
}

impl Cache {
    // == Constructors ==
    /// Creates an empty cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            inner: Mutex::new(CacheStore::new(config)),
        }
    }

    // == Set ==
    /// Stores a key/value pair that expires `ttl_seconds` from now.
    ///
    /// Always inserts a new entry, even when the key is already present;
    /// the newer entry shadows the older one for lookups. Fails if the
    /// key or value exceeds its configured bound.
    pub fn set(&self, key: &[u8], value: &[u8], ttl_seconds: u64) -> Result<()> {
        self.inner.lock().set(key, value, ttl_seconds)
    }

    // == Get ==
    /// Returns the most recently stored live value for `key`, or `None`.
    ///
    /// Expired entries for the key found during the scan are removed.
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.lock().get(key)
    }

    // == Delete ==
    /// Removes the first entry matching `key`.
    ///
    /// Returns whether an entry was found and removed; deleting an absent
    /// key is a no-op.
    pub fn delete(&self, key: &[u8]) -> bool {
        self.inner.lock().delete(key)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Snapshot of the performance statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
