//! Cache Module
//!
//! Bounded in-memory cache of loaded files, keyed by request path, with
//! insertion-order (FIFO) eviction.

mod entry;
mod order;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CachedFile;
pub use order::InsertionOrder;
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;

// == Public Constants ==
/// Smallest capacity a cache can be created with
pub const MIN_CAPACITY: usize = 1;

/// Default number of entries when none is configured
pub const DEFAULT_CAPACITY: usize = 10;

/// Cache shared between connection tasks.
///
/// Lookups take the read lock; inserts, removals and eviction take the write lock.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store for sharing across tasks.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
