//! Cache Module
//!
//! Provides the cache engine: a single ordered map combining LRU capacity
//! eviction with lazy TTL expiry.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::TimedLruCache;
