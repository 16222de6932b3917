//! Cache Store Module
//!
//! Single-threaded cache engine combining the bucket table with input
//! validation, the load-factor resize trigger, and statistics.

use tracing::debug;

use crate::cache::entry::{current_timestamp_secs, CacheEntry};
use crate::cache::stats::CacheStats;
use crate::cache::table::BucketTable;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Cache engine: chained hash table, live-entry counter, statistics.
///
/// The store itself is not synchronized; [`Cache`](crate::cache::Cache)
/// wraps it in the exclusive lock that serializes all access.
#[derive(Debug)]
pub struct CacheStore {
    /// Bucket table holding all entries
    table: BucketTable,
    /// Number of entries currently linked in the table
    live_count: usize,
    /// Performance statistics
    stats: CacheStats,
    /// Bounds and growth parameters
    config: CacheConfig,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        let table = BucketTable::with_capacity(config.initial_capacity);
        Self {
            table,
            live_count: 0,
            stats: CacheStats::new(),
            config,
        }
    }

    // == Set ==
    /// Stores a key/value pair that expires `ttl_seconds` from now.
    ///
    /// Always inserts a new entry. A key already present is not updated in
    /// place: the new entry is chained in front of the old one and wins
    /// subsequent lookups. Oversized inputs are rejected, not truncated.
    pub fn set(&mut self, key: &[u8], value: &[u8], ttl_seconds: u64) -> Result<()> {
        if key.len() > self.config.max_key_length {
            return Err(CacheError::KeyTooLong {
                len: key.len(),
                max: self.config.max_key_length,
            });
        }
        if value.len() > self.config.max_value_size {
            return Err(CacheError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_size,
            });
        }

        // Grow before the insertion that would push the load factor past
        // the threshold, never after it.
        let capacity = self.table.capacity();
        if (self.live_count + 1) as f64 / capacity as f64 > self.config.load_factor_threshold {
            self.table.resize();
            self.stats.record_resize();
        }

        let now = current_timestamp_secs();
        let entry = CacheEntry::new(key.to_vec(), value.to_vec(), ttl_seconds, now);
        self.table.insert(Box::new(entry));
        self.live_count += 1;
        self.stats.set_live_entries(self.live_count);

        debug!(
            key_len = key.len(),
            value_len = value.len(),
            ttl_seconds,
            "entry stored"
        );
        Ok(())
    }

    // == Get ==
    /// Returns the most recently stored live value for `key`.
    ///
    /// Expired entries for the key encountered during the scan are
    /// unlinked and released; a fully scanned chain with no live match is
    /// a miss, not an error.
    pub fn get(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        let now = current_timestamp_secs();
        let lookup = self.table.lookup(key, now);

        if lookup.expired > 0 {
            self.live_count -= lookup.expired;
            self.stats.record_expired(lookup.expired);
            self.stats.set_live_entries(self.live_count);
            debug!(expired = lookup.expired, "expired entries collected during lookup");
        }

        match lookup.value {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the first entry matching `key`.
    ///
    /// Returns whether an entry was found and removed. Deleting an absent
    /// key is a no-op.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        match self.table.remove(key) {
            Some(_) => {
                self.live_count -= 1;
                self.stats.set_live_entries(self.live_count);
                debug!(key_len = key.len(), "entry deleted");
                true
            }
            None => false,
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_live_entries(self.live_count);
        stats
    }

    // == Length ==
    /// Number of entries currently linked in the table.
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn small_config(initial_capacity: usize) -> CacheConfig {
        CacheConfig {
            initial_capacity,
            ..CacheConfig::default()
        }
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(CacheConfig::default());
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 10_000);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 60).unwrap();
        assert_eq!(store.get(b"key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(CacheConfig::default());

        assert_eq!(store.get(b"nonexistent"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 60).unwrap();
        assert!(store.delete(b"key1"));
        assert!(store.is_empty());
        assert_eq!(store.get(b"key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store = CacheStore::new(CacheConfig::default());
        assert!(!store.delete(b"nonexistent"));
    }

    #[test]
    fn test_store_reinsertion_chains_instead_of_overwriting() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 60).unwrap();
        store.set(b"key1", b"value2", 60).unwrap();

        // Both entries coexist; the newest wins lookups.
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b"key1"), Some(b"value2".to_vec()));

        // Deleting removes the newest instance and re-exposes the older.
        assert!(store.delete(b"key1"));
        assert_eq!(store.get(b"key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_zero_ttl_is_expired_immediately() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 0).unwrap();
        assert_eq!(store.len(), 1);

        assert_eq!(store.get(b"key1"), None);
        // The expired entry was unlinked and the counter decremented.
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expired, 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 1).unwrap();

        // Wait for expiration
        sleep(Duration::from_millis(1100));
        assert_eq!(store.get(b"key1"), None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_key_too_long() {
        let mut store = CacheStore::new(CacheConfig::default());
        let long_key = vec![b'x'; 257];

        let result = store.set(&long_key, b"value", 60);
        assert_eq!(
            result,
            Err(CacheError::KeyTooLong { len: 257, max: 256 })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_value_too_large() {
        let mut store = CacheStore::new(CacheConfig::default());
        let large_value = vec![b'x'; 1025];

        let result = store.set(b"key", &large_value, 60);
        assert_eq!(
            result,
            Err(CacheError::ValueTooLarge { len: 1025, max: 1024 })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_bounds_are_inclusive() {
        let mut store = CacheStore::new(CacheConfig::default());

        let key = vec![b'k'; 256];
        let value = vec![b'v'; 1024];
        store.set(&key, &value, 60).unwrap();
        assert_eq!(store.get(&key), Some(value));
    }

    #[test]
    fn test_store_resize_triggers_before_threshold_crossing() {
        let mut store = CacheStore::new(small_config(10));

        // (live + 1) / 10 stays at or below 0.7 through the 7th insert
        for i in 0..7 {
            store.set(format!("key-{i}").as_bytes(), b"value", 60).unwrap();
        }
        assert_eq!(store.capacity(), 10);
        assert_eq!(store.stats().resizes, 0);

        // The 8th insert would reach 0.8, so the table doubles first
        store.set(b"key-7", b"value", 60).unwrap();
        assert_eq!(store.capacity(), 20);
        assert_eq!(store.stats().resizes, 1);

        for i in 0..8 {
            assert_eq!(
                store.get(format!("key-{i}").as_bytes()),
                Some(b"value".to_vec())
            );
        }
    }

    #[test]
    fn test_store_repeated_resizes_preserve_data() {
        let mut store = CacheStore::new(small_config(2));

        for i in 0..100 {
            store
                .set(format!("key-{i}").as_bytes(), format!("value-{i}").as_bytes(), 60)
                .unwrap();
        }

        assert!(store.capacity() >= 128);
        assert_eq!(store.len(), 100);
        for i in 0..100 {
            assert_eq!(
                store.get(format!("key-{i}").as_bytes()),
                Some(format!("value-{i}").into_bytes())
            );
        }
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(CacheConfig::default());

        store.set(b"key1", b"value1", 60).unwrap();
        store.get(b"key1");
        store.get(b"nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.live_entries, 1);
    }
}
