// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small LRU (Least Recently Used) cache used to memoize layout computations.
//!
//! A grid is typically asked for its preferred size several times with the same size
//! hints during one validation cycle (the parent asks for the width, then for the height
//! given that width, then lays it out). Building a [`crate::LogicalGridLayoutInfo`]
//! measures every component, so it is worth keeping the last few results around until
//! something changes.
//!
//! - Lookups use [`rustc_hash::FxHashMap`]. Keys are internal data (never user input)
//!   so there is no need for a DoS resistant hasher.
//! - Recency is tracked with a monotonic access counter. Eviction scans for the smallest
//!   counter, which is fine for the handful of entries a layout cache holds.
//! - Hit and miss counts are kept in [`CacheStats`] so callers (and tests) can verify
//!   that a cached value was actually reused.
//!
//! ```
//! use r3bl_logical_grid::LruCache;
//!
//! let mut cache = LruCache::<(i32, i32), i32>::new(2);
//! let value = cache.get_or_try_insert_with((1, 2), || Ok(3)).unwrap();
//! assert_eq!(value, 3);
//! let value = cache.get_or_try_insert_with((1, 2), || Ok(42)).unwrap();
//! assert_eq!(value, 3);
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use std::hash::Hash;

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::CommonResult;

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    last_access: u64,
}

/// Hit / miss counters. Reset by [`LruCache::clear`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// A generic LRU cache. When full, inserting a new key evicts the entry that was
/// accessed the longest time ago.
#[derive(Debug)]
pub struct LruCache<K, V> {
    map: FxHashMap<K, CacheEntry<V>>,
    capacity: usize,
    access_counter: u64,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// A `capacity` of 0 is bumped up to 1, a cache that can't hold anything is useless.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            capacity,
            access_counter: 0,
            stats: CacheStats::default(),
        }
    }

    /// Marks the entry as recently used. Counts as a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.access_counter += 1;
        match self.map.get_mut(key) {
            Some(entry) => {
                entry.last_access = self.access_counter;
                self.stats.hits += 1;
                Some(&entry.value)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.access_counter += 1;

        if self.map.len() >= self.capacity
            && !self.map.contains_key(&key)
            && let Some(lru_key) = self
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone())
        {
            self.map.remove(&lru_key);
        }

        let entry = CacheEntry {
            value,
            last_access: self.access_counter,
        };
        self.map.insert(key, entry).map(|it| it.value)
    }

    /// Return a clone of the cached value for `key`, or compute it with `create`, cache
    /// it, and return it. Errors from `create` are propagated and nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns whatever error `create` returns.
    pub fn get_or_try_insert_with(
        &mut self,
        key: K,
        create: impl FnOnce() -> CommonResult<V>,
    ) -> CommonResult<V> {
        if let Some(value) = self.get(&key) {
            return Ok(value.clone());
        }
        let value = create()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.access_counter = 0;
        self.stats = CacheStats::default();
    }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn stats(&self) -> CacheStats { self.stats }

    /// Does NOT update recency or stats.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool { self.map.contains_key(key) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutError, assert_eq2};

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.insert((10, 10), "a");
        cache.insert((20, 20), "b");

        // Touch the first entry so the second one becomes the LRU.
        cache.get(&(10, 10));
        cache.insert((30, 30), "c");

        assert!(cache.contains_key(&(10, 10)));
        assert!(!cache.contains_key(&(20, 20)));
        assert!(cache.contains_key(&(30, 30)));
        assert_eq2!(cache.len(), 2);
    }

    #[test]
    fn test_insert_existing_key_does_not_evict() {
        let mut cache = LruCache::new(2);
        cache.insert(1, "a");
        cache.insert(2, "b");
        assert_eq2!(cache.insert(1, "z"), Some("a"));
        assert!(cache.contains_key(&2));
        assert_eq2!(cache.len(), 2);
    }

    #[test]
    fn test_get_or_try_insert_with_counts_hits_and_misses() {
        let mut cache = LruCache::new(4);
        let mut calls = 0;

        for _ in 0..3 {
            let value = cache
                .get_or_try_insert_with("key", || {
                    calls += 1;
                    Ok(vec![1, 2, 3])
                })
                .unwrap();
            assert_eq2!(value, vec![1, 2, 3]);
        }

        assert_eq2!(calls, 1);
        assert_eq2!(cache.stats(), CacheStats { hits: 2, misses: 1 });
    }

    #[test]
    fn test_get_or_try_insert_with_does_not_cache_errors() {
        let mut cache = LruCache::<&str, i32>::new(4);
        let result = cache.get_or_try_insert_with("key", || {
            Err(LayoutError::InvalidConfig {
                reason: "boom".into(),
            }
            .into())
        });
        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_resets_stats() {
        let mut cache = LruCache::new(1);
        cache.insert("a", 1);
        cache.get(&"a");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq2!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_zero_capacity_is_bumped_to_one() {
        let mut cache = LruCache::new(0);
        assert_eq2!(cache.capacity(), 1);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq2!(cache.len(), 1);
        assert!(cache.contains_key(&"b"));
    }
}
