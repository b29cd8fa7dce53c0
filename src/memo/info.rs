//! Cache Info Module
//!
//! Read-only snapshot of a memoized function's counters and occupancy.

use serde::Serialize;

// == Cache Info ==
/// Snapshot of hit/miss counters and cache occupancy for a memoized
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Number of calls answered from cache
    pub hits: u64,
    /// Number of calls that ran the wrapped computation
    pub misses: u64,
    /// Number of entries currently cached, stale entries included
    pub current_size: usize,
    /// Configured capacity, None when unbounded
    pub max_size: Option<usize>,
}

impl CacheInfo {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no calls have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn info(hits: u64, misses: u64) -> CacheInfo {
        CacheInfo {
            hits,
            misses,
            current_size: 0,
            max_size: None,
        }
    }

    #[test]
    fn test_hit_rate_no_calls() {
        assert_eq!(info(0, 0).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        assert_eq!(info(3, 0).hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_all_misses() {
        assert_eq!(info(0, 2).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        assert_eq!(info(1, 1).hit_rate(), 0.5);
        assert_eq!(info(3, 1).hit_rate(), 0.75);
    }
}
