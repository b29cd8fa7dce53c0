//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their staleness
//! check.

// == Cache Entry ==
/// A single cache entry: the stored value plus the time it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion time in seconds since the cache clock's epoch
    pub added_at: f64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry written at `added_at`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `added_at` - Insertion time in seconds
    pub fn new(value: V, added_at: f64) -> Self {
        Self { value, added_at }
    }

    // == Age ==
    /// Returns the entry's age at `now`, in seconds.
    ///
    /// Negative when the entry carries a timestamp from the future, which
    /// can happen with externally supplied timestamps.
    pub fn age(&self, now: f64) -> f64 {
        now - self.added_at
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl` at time `now`.
    ///
    /// Boundary condition: an entry exactly `ttl` seconds old is already
    /// stale. The comparison is `>=`, so once the full lifetime has elapsed
    /// the entry is immediately unusable.
    pub fn is_stale(&self, now: f64, ttl: f64) -> bool {
        self.age(now) >= ttl
    }
}
