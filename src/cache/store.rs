//! Cache Store Module
//!
//! Main cache engine combining LRU recency tracking and lazy TTL expiry in a
//! single ordered map.

use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use tracing::debug;

use crate::cache::CacheEntry;
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Timed LRU Cache ==
/// An ordered map with least-recently-used capacity eviction and per-entry
/// time-to-live expiry.
///
/// Entries sit in recency order: index 0 is the least recently used key and
/// the last index the most recently used. Staleness is checked lazily, only
/// when a key is read, so an expired entry can remain in the map (and be
/// counted by [`len`](Self::len)) until the next [`get`](Self::get) on that
/// exact key.
#[derive(Debug)]
pub struct TimedLruCache<K, V, C = SystemClock> {
    /// Key-entry storage in recency order, least recently used first
    entries: IndexMap<K, CacheEntry<V>>,
    /// Maximum number of entries, None for unbounded
    max_size: Option<usize>,
    /// Entry lifetime in seconds, None for no age limit
    ttl: Option<f64>,
    /// Time source for default timestamps and staleness checks
    clock: C,
}

impl<K, V> TimedLruCache<K, V>
where
    K: Hash + Eq,
{
    // == Constructors ==
    /// Creates a cache with the given limits, reading time from the system
    /// clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, or None for unbounded
    /// * `ttl` - Entry lifetime in seconds, or None for no age limit
    pub fn new(max_size: Option<usize>, ttl: Option<f64>) -> Result<Self> {
        Self::with_config(CacheConfig::new(max_size, ttl))
    }

    /// Creates a cache from a prebuilt config, reading time from the system
    /// clock.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> TimedLruCache<K, V, C>
where
    K: Hash + Eq,
    C: Clock,
{
    /// Creates a cache that reads time from `clock`.
    ///
    /// Rejects a capacity of zero and a ttl that is not finite and positive.
    pub fn with_clock(config: CacheConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: IndexMap::new(),
            max_size: config.max_size,
            ttl: config.ttl,
            clock,
        })
    }

    // == Get ==
    /// Looks up `key`, returning a reference to its value if present and
    /// fresh.
    ///
    /// A hit promotes the key to most recently used. If the entry has
    /// reached the configured ttl it is removed here and the lookup reports
    /// a miss, so the removal is observable through [`len`](Self::len) even
    /// though this is a read. Misses and expiries leave the recency order of
    /// every other key untouched.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve, in borrowed form
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let now = self.clock.now();
        let index = self.entries.get_index_of(key)?;

        // Lazy expiry: only the looked-up entry is ever checked
        if let Some(ttl) = self.ttl {
            if self.entries[index].is_stale(now, ttl) {
                self.entries.shift_remove_index(index);
                debug!(len = self.entries.len(), "removed stale entry on access");
                return None;
            }
        }

        // Promote to most recently used
        let tail = self.entries.len() - 1;
        self.entries.move_index(index, tail);
        self.entries.get_index(tail).map(|(_, entry)| &entry.value)
    }

    // == Add ==
    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// The entry is stamped with `timestamp` when given, which lets callers
    /// assert the freshness of a value whose origin is elsewhere (a file
    /// modification time, for example), and with the clock's current time
    /// otherwise.
    ///
    /// When the cache already holds exactly `max_size` entries the least
    /// recently used entry is evicted first, even if `key` is one of the
    /// resident keys. Overwriting a non-oldest key at exact capacity
    /// therefore evicts the oldest entry and leaves the cache one below
    /// capacity.
    ///
    /// No staleness check happens here; a stale resident value is silently
    /// replaced.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `timestamp` - Optional insertion time in seconds (uses the clock if None)
    pub fn add(&mut self, key: K, value: V, timestamp: Option<f64>) {
        let added_at = timestamp.unwrap_or_else(|| self.clock.now());

        // Evict before inserting whenever the map is at capacity
        if let Some(max_size) = self.max_size {
            if self.entries.len() == max_size {
                self.entries.shift_remove_index(0);
                debug!(len = self.entries.len(), "evicted least recently used entry");
            }
        }

        let (index, _) = self
            .entries
            .insert_full(key, CacheEntry::new(value, added_at));

        // An overwrite lands at the old position; move it to the tail
        let tail = self.entries.len() - 1;
        self.entries.move_index(index, tail);
    }

    // == Purge Stale ==
    /// Removes every entry that has reached the configured ttl.
    ///
    /// Never runs implicitly; callers that want bounded memory ahead of the
    /// next read invoke this themselves. Returns the number of entries
    /// removed. Does nothing when no ttl is configured.
    pub fn purge_stale(&mut self) -> usize {
        let ttl = match self.ttl {
            Some(ttl) => ttl,
            None => return 0,
        };

        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));

        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, len = self.entries.len(), "purged stale entries");
        }
        removed
    }

    // == Length ==
    /// Returns the current number of entries, stale entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Clear ==
    /// Removes all entries. The configured limits and the clock are
    /// retained, so the cache is immediately usable again.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Keys ==
    /// Iterates the keys in recency order, least recently used first.
    ///
    /// Read-only: iterating does not count as access and promotes nothing.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    // == Accessors ==
    /// Returns the configured capacity, None when unbounded.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns the configured ttl in seconds, None when entries never age
    /// out.
    pub fn ttl(&self) -> Option<f64> {
        self.ttl
    }
}
