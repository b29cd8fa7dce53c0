//! Memoizing Wrapper Module
//!
//! Applies the cache engine to a computation so repeated calls with equal
//! arguments are answered from cache instead of recomputed.

use std::hash::Hash;

use tracing::debug;

use crate::cache::TimedLruCache;
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::memo::CacheInfo;

// == Memoized ==
/// A computation wrapped with a [`TimedLruCache`] keyed by its argument
/// bundle.
///
/// The argument bundle is any `Hash + Eq` type; a tuple gives the usual
/// multi-argument shape, and [`CallKey`](crate::memo::CallKey) covers
/// heterogeneous or runtime-shaped argument lists. The wrapped computation
/// receives the bundle by reference and returns its result together with an
/// optional timestamp: `Some(t)` stamps the cached entry with `t` instead of
/// the current time, which lets a computation whose value originates
/// elsewhere (a file read, for example) carry that origin's freshness;
/// `None` stamps it with now.
///
/// Calls take `&mut self`, so one caller at a time. There is no further
/// single-flight machinery: sharing a `Memoized` across threads means the
/// whole check-compute-store sequence must sit in one critical section, or
/// equal calls may race into duplicate computation.
pub struct Memoized<A, V, F, C = SystemClock> {
    /// The wrapped computation
    wrapped: F,
    /// Result cache keyed by argument bundle
    cache: TimedLruCache<A, V, C>,
    /// Calls answered from cache
    hits: u64,
    /// Calls that ran the computation
    misses: u64,
}

impl<A, V, F> Memoized<A, V, F>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> (V, Option<f64>),
{
    // == Constructors ==
    /// Wraps `computation` with a cache holding at most `max_size` results
    /// for at most `ttl` seconds each.
    ///
    /// # Arguments
    /// * `computation` - The function to memoize
    /// * `max_size` - Maximum number of cached results, or None for unbounded
    /// * `ttl` - Result lifetime in seconds, or None for no age limit
    pub fn wrap(computation: F, max_size: Option<usize>, ttl: Option<f64>) -> Result<Self> {
        Self::with_config(computation, CacheConfig::new(max_size, ttl))
    }

    /// Wraps `computation` using a prebuilt config and the system clock.
    pub fn with_config(computation: F, config: CacheConfig) -> Result<Self> {
        Self::with_clock(computation, config, SystemClock)
    }
}

impl<A, V, F, C> Memoized<A, V, F, C>
where
    A: Hash + Eq,
    V: Clone,
    F: FnMut(&A) -> (V, Option<f64>),
    C: Clock,
{
    /// Wraps `computation` with a cache that reads time from `clock`.
    pub fn with_clock(computation: F, config: CacheConfig, clock: C) -> Result<Self> {
        Ok(Self {
            wrapped: computation,
            cache: TimedLruCache::with_clock(config, clock)?,
            hits: 0,
            misses: 0,
        })
    }

    // == Call ==
    /// Returns the result for `args`, from cache when a fresh entry exists
    /// and by running the wrapped computation otherwise.
    ///
    /// The miss is counted before the computation runs. If the computation
    /// panics the panic propagates unchanged, the miss stays counted, and
    /// nothing is cached for that call.
    pub fn call(&mut self, args: A) -> V {
        if let Some(value) = self.cache.get(&args) {
            self.hits += 1;
            return value.clone();
        }

        self.misses += 1;
        let (value, timestamp) = (self.wrapped)(&args);
        self.cache.add(args, value.clone(), timestamp);
        value
    }

    // == Cache Info ==
    /// Returns a snapshot of the counters and cache occupancy.
    ///
    /// Read-only: counters, entries and recency order are all left
    /// untouched, and stale entries that nothing has read yet still count
    /// toward `current_size`.
    pub fn cache_info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits,
            misses: self.misses,
            current_size: self.cache.len(),
            max_size: self.cache.max_size(),
        }
    }

    // == Clear ==
    /// Drops every cached result and zeroes the hit and miss counters.
    pub fn clear(&mut self) {
        debug!(hits = self.hits, misses = self.misses, "memoized cache cleared");
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
