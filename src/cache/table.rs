//! Bucket Table Module
//!
//! The chained hash table underneath the cache: an array of singly linked
//! entry chains with head insertion and a doubling rehash.

use tracing::info;

use crate::cache::entry::CacheEntry;
use crate::cache::hash::bucket_index;

// == Lookup Outcome ==
/// Result of scanning a bucket chain for a key.
#[derive(Debug)]
pub struct Lookup {
    /// The most recently inserted live value for the key, if any
    pub value: Option<Vec<u8>>,
    /// Number of expired entries unlinked during the scan
    pub expired: usize,
}

// == Bucket Table ==
/// Array of bucket chains.
///
/// Invariant: every entry reachable from bucket `i` hashes to `i` under
/// the current capacity. A resize restores this before anything else can
/// observe the table.
#[derive(Debug)]
pub struct BucketTable {
    /// Chain heads, one per bucket
    buckets: Vec<Option<Box<CacheEntry>>>,
    /// Current number of buckets; doubles on resize, never shrinks
    capacity: usize,
}

impl BucketTable {
    // == Constructor ==
    /// Creates an empty table with the given number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bucket table capacity must be non-zero");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets, capacity }
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Insert ==
    /// Pushes an entry as the new head of its bucket chain. O(1).
    ///
    /// An entry whose key is already present elsewhere in the chain is
    /// inserted in front of it, not merged; the head-first scan in
    /// [`lookup`](Self::lookup) then prefers the newer one.
    pub fn insert(&mut self, mut entry: Box<CacheEntry>) {
        let index = bucket_index(&entry.key, self.capacity);
        entry.next = self.buckets[index].take();
        self.buckets[index] = Some(entry);
    }

    // == Lookup ==
    /// Scans the chain `key` hashes to and returns the first live match.
    ///
    /// Expired entries for the key found before a live hit are unlinked
    /// and dropped in place; non-matching entries are stepped over. The
    /// scan always terminates at the chain tail.
    pub fn lookup(&mut self, key: &[u8], now: u64) -> Lookup {
        let index = bucket_index(key, self.capacity);
        let mut expired = 0;
        let mut cursor = &mut self.buckets[index];

        loop {
            let (is_match, is_dead) = match cursor.as_deref() {
                None => return Lookup { value: None, expired },
                Some(entry) => (entry.key == key, entry.is_expired(now)),
            };

            if is_match && !is_dead {
                let value = cursor.as_deref().map(|entry| entry.value.clone());
                return Lookup { value, expired };
            }

            if is_match {
                // Expired instance of this key: splice it out of the chain
                // and keep scanning from the same slot.
                if let Some(entry) = cursor.take() {
                    *cursor = entry.next;
                    expired += 1;
                }
            } else if let Some(entry) = cursor {
                cursor = &mut entry.next;
            }
        }
    }

    // == Remove ==
    /// Unlinks and returns the first entry whose key matches.
    ///
    /// With duplicate insertions of one key this removes the most recent
    /// one (closest to the head), re-exposing any older entry behind it.
    pub fn remove(&mut self, key: &[u8]) -> Option<Box<CacheEntry>> {
        let index = bucket_index(key, self.capacity);
        let mut cursor = &mut self.buckets[index];

        loop {
            let found = match cursor.as_deref() {
                None => return None,
                Some(entry) => entry.key == key,
            };

            if found {
                let mut entry = cursor.take()?;
                *cursor = entry.next.take();
                return Some(entry);
            }

            if let Some(entry) = cursor {
                cursor = &mut entry.next;
            }
        }
    }

    // == Resize ==
    /// Doubles the bucket array and rehashes every entry into it.
    ///
    /// Entries are relinked as the new head of their recomputed bucket --
    /// moved, never copied -- so resize cost is independent of value
    /// sizes. Exclusive access for the whole rehash means no lookup can
    /// observe a half-migrated table.
    pub fn resize(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity * 2;
        let mut new_buckets: Vec<Option<Box<CacheEntry>>> = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, || None);

        for slot in &mut self.buckets {
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = bucket_index(&entry.key, new_capacity);
                entry.next = new_buckets[index].take();
                new_buckets[index] = Some(entry);
            }
        }

        self.buckets = new_buckets;
        self.capacity = new_capacity;
        info!(old_capacity, new_capacity, "bucket table resized");
    }
}

impl Drop for BucketTable {
    fn drop(&mut self) {
        // Unlink chain nodes one at a time; dropping a long chain through
        // the default recursive Box drop could overflow the stack.
        for slot in &mut self.buckets {
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
    }
}
