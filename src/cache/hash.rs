//! Bucket Hashing Module
//!
//! Maps keys to bucket indices with the djb2 string hash.

/// Computes the bucket index for a key under the given table capacity.
///
/// The hash is deterministic: the same key and capacity always yield the
/// same index. Indices are never cached; callers recompute them against
/// the new capacity whenever the table resizes.
///
/// # Arguments
/// * `key` - The key bytes to hash
/// * `capacity` - Current number of buckets (must be non-zero)
pub fn bucket_index(key: &[u8], capacity: usize) -> usize {
    let mut hash: u64 = 5381;
    for &byte in key {
        // hash * 33 + byte
        hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte));
    }
    (hash % capacity as u64) as usize
}
