//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single key/value record in a bucket chain.
///
/// Entries are owned by the bucket slot they hash to: the slot owns the
/// chain head, and each entry exclusively owns everything after it through
/// `next`. Unlinking an entry therefore releases it; nothing can reference
/// it afterward.
#[derive(Debug)]
pub struct CacheEntry {
    /// The stored key
    pub key: Vec<u8>,
    /// The stored value
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix seconds)
    pub expires_at: u64,
    /// The rest of the chain in the same bucket
    pub next: Option<Box<CacheEntry>>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new unlinked entry expiring `ttl_seconds` after `now`.
    pub fn new(key: Vec<u8>, value: Vec<u8>, ttl_seconds: u64, now: u64) -> Self {
        Self {
            key,
            value,
            expires_at: now.saturating_add(ttl_seconds),
            next: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given timestamp.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so an entry stored
    /// with a TTL of zero is expired immediately.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
