//! Memoized SHA-256.

use crate::hash::Crypto;
use dashmap::DashMap;
use neo_sdk_config::HASH_SIZE;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::trace;

/// Caches SHA-256 digests keyed by the exact input bytes.
///
/// Shared between threads through an `Arc`. Two callers missing on the same
/// input may both compute the digest; the stored value is identical either way.
#[derive(Debug, Default)]
pub struct HashCache {
    entries: DashMap<Vec<u8>, [u8; HASH_SIZE]>,
    capacity: Option<usize>,
    /// Slots handed out to inserts, including ones still in flight.
    reserved: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HashCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that stores at most `capacity` digests, also under concurrent
    /// misses. Inputs beyond that are still hashed, just not remembered.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// SHA-256 of `data`, served from the cache when present.
    pub fn sha256(&self, data: &[u8]) -> [u8; HASH_SIZE] {
        if let Some(entry) = self.entries.get(data) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *entry.value();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let digest = Crypto::sha256(data);
        let has_room = self.try_reserve();
        if has_room && self.entries.insert(data.to_vec(), digest).is_some() {
            // Another caller stored the same input first.
            self.reserved.fetch_sub(1, Ordering::AcqRel);
        }
        trace!(len = data.len(), stored = has_room, "sha256 cache miss");
        digest
    }

    fn try_reserve(&self) -> bool {
        match self.capacity {
            None => {
                self.reserved.fetch_add(1, Ordering::AcqRel);
                true
            }
            Some(capacity) => self
                .reserved
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                    (n < capacity).then_some(n + 1)
                })
                .is_ok(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drops every cached digest. Counters are kept.
    pub fn clear(&self) {
        let mut removed = 0;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });
        self.reserved.fetch_sub(removed, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_hit_and_miss() {
        let cache = HashCache::new();
        let first = cache.sha256(b"neo");
        let second = cache.sha256(b"neo");
        assert_eq!(first, second);
        assert_eq!(first, Crypto::sha256(b"neo"));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_bound() {
        let cache = HashCache::with_capacity(2);
        for input in [&b"a"[..], b"b", b"c"] {
            assert_eq!(cache.sha256(input), Crypto::sha256(input));
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.sha256(b"c"), Crypto::sha256(b"c"));
        assert_eq!(cache.misses(), 4);

        cache.clear();
        assert!(cache.is_empty());
        cache.sha256(b"d");
        cache.sha256(b"e");
        cache.sha256(b"f");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_bound_under_concurrent_misses() {
        let cache = Arc::new(HashCache::with_capacity(4));
        let handles: Vec<_> = (0..16u8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for j in 0..32u8 {
                        let input = [i, j, i % 4];
                        assert_eq!(cache.sha256(&input), Crypto::sha256(&input));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let cache = Arc::new(HashCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let input = [(i % 2) as u8; 16];
                    (input, cache.sha256(&input))
                })
            })
            .collect();

        for handle in handles {
            let (input, digest) = handle.join().unwrap();
            assert_eq!(digest, Crypto::sha256(&input));
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits() + cache.misses(), 8);
    }
}
