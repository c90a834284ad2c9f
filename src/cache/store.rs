//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO insertion-order eviction.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CachedFile, InsertionOrder, StatsCounters, MIN_CAPACITY};

// == Cache Store ==
/// Bounded map from request path to a previously loaded file.
///
/// At most `capacity` entries are live at once. When an insert would exceed
/// that, the entry that has been resident longest is evicted first. Lookups
/// never extend an entry's lifetime.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-to-entry index
    entries: HashMap<String, Arc<CachedFile>>,
    /// Insertion order tracker, oldest first
    order: InsertionOrder,
    /// Performance counters
    stats: StatsCounters,
    /// Maximum number of live entries
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is clamped to [`MIN_CAPACITY`] and logged.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity < MIN_CAPACITY {
            warn!(
                "Cache capacity {} is below the minimum, clamping to {}",
                capacity, MIN_CAPACITY
            );
            MIN_CAPACITY
        } else {
            capacity
        };

        Self {
            entries: HashMap::with_capacity(capacity),
            order: InsertionOrder::with_capacity(capacity),
            stats: StatsCounters::new(),
            capacity,
        }
    }

    // == Get ==
    /// Looks up the entry stored under `key`.
    ///
    /// Entries and insertion order are left untouched. The only side effect
    /// is bumping the hit or miss counter.
    pub fn get(&self, key: &str) -> Option<Arc<CachedFile>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                debug!("Cache hit: {}", key);
                Some(Arc::clone(entry))
            }
            None => {
                self.stats.record_miss();
                debug!("Cache miss: {}", key);
                None
            }
        }
    }

    // == Put ==
    /// Stores a file under `key`, evicting the oldest entry if the cache is full.
    ///
    /// An existing entry for `key` is replaced and becomes the newest insert,
    /// without changing the number of entries. The cache takes ownership of
    /// `content`.
    pub fn put(
        &mut self,
        key: &str,
        content_type: &str,
        content: Bytes,
        content_length: usize,
    ) -> Arc<CachedFile> {
        // Replace rather than update in place
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let entry = Arc::new(CachedFile::new(key, content_type, content, content_length));
        self.entries.insert(key.to_string(), Arc::clone(&entry));
        self.order.push_newest(key);
        self.stats.record_insert();

        debug!(
            "Cache insert: {} ({} bytes, {} of {} entries)",
            key,
            entry.content_length,
            self.entries.len(),
            self.capacity
        );

        entry
    }

    // == Remove ==
    /// Removes the entry stored under `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Arc<CachedFile>> {
        let entry = self.entries.remove(key)?;
        self.order.remove(key);
        Some(entry)
    }

    // == Destroy ==
    /// Drops every entry and releases the cache's internal storage.
    ///
    /// Safe to call on an empty or already destroyed cache.
    pub fn destroy(&mut self) {
        self.entries.clear();
        self.entries.shrink_to_fit();
        self.order.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Returns the key that the next eviction would remove.
    pub fn oldest_key(&self) -> Option<&str> {
        self.order.peek_oldest()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        if let Some(victim) = self.order.pop_oldest() {
            self.entries.remove(&victim);
            self.stats.record_eviction();
            debug!("Cache evict: {}", victim);
        }
    }

    #[cfg(test)]
    pub(crate) fn keys_oldest_first(&self) -> Vec<String> {
        self.order.iter().map(str::to_string).collect()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.len() == self.order.len()
            && self.entries.len() <= self.capacity
            && self.order.iter().all(|k| self.entries.contains_key(k))
    }
}
