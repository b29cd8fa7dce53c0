//! Configuration Module
//!
//! Holds the eviction limits shared by the cache engine and the memoizing
//! wrapper, validated once at construction time.

use crate::error::{CacheError, Result};

/// Eviction limits for a cache.
///
/// Both limits are optional and independent:
/// - `max_size` caps the number of entries; `None` lets the cache grow
///   without bound.
/// - `ttl` is the age in seconds at which an entry becomes stale; `None`
///   means entries never expire by age.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: Option<usize>,
    /// Time-to-live in seconds for each entry
    pub ttl: Option<f64>,
}

impl CacheConfig {
    /// Creates a config with the given limits.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, or None for unbounded
    /// * `ttl` - Entry lifetime in seconds, or None for no age limit
    pub fn new(max_size: Option<usize>, ttl: Option<f64>) -> Self {
        Self { max_size, ttl }
    }

    /// Sets the maximum entry count.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Sets the time-to-live in seconds.
    pub fn with_ttl(mut self, ttl: f64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Checks that the configured limits are usable.
    ///
    /// A capacity of zero and a ttl that is not finite and positive are
    /// rejected here rather than producing a cache that can never hold a
    /// live entry.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_size) = self.max_size {
            if max_size == 0 {
                return Err(CacheError::InvalidMaxSize(max_size));
            }
        }
        if let Some(ttl) = self.ttl {
            if !ttl.is_finite() || ttl <= 0.0 {
                return Err(CacheError::InvalidTtl(ttl));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_is_unbounded() {
        let config = CacheConfig::default();
        assert_eq!(config.max_size, None);
        assert_eq!(config.ttl, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = CacheConfig::default().with_max_size(64).with_ttl(30.0);
        assert_eq!(config.max_size, Some(64));
        assert_eq!(config.ttl, Some(30.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_max_size() {
        let config = CacheConfig::new(Some(0), None);
        assert_eq!(config.validate(), Err(CacheError::InvalidMaxSize(0)));
    }

    #[test]
    fn test_config_rejects_non_positive_ttl() {
        let zero = CacheConfig::new(None, Some(0.0));
        assert!(matches!(zero.validate(), Err(CacheError::InvalidTtl(_))));

        let negative = CacheConfig::new(None, Some(-1.5));
        assert!(matches!(negative.validate(), Err(CacheError::InvalidTtl(_))));
    }

    #[test]
    fn test_config_rejects_non_finite_ttl() {
        let nan = CacheConfig::new(None, Some(f64::NAN));
        assert!(matches!(nan.validate(), Err(CacheError::InvalidTtl(_))));

        let inf = CacheConfig::new(None, Some(f64::INFINITY));
        assert!(matches!(inf.validate(), Err(CacheError::InvalidTtl(_))));
    }
}
