//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
///
/// Every runtime operation on a constructed cache is total, so the only
/// failure mode is rejecting an unusable configuration up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    /// Configured capacity is zero
    #[error("max_size must be at least 1, got {0}")]
    InvalidMaxSize(usize),

    /// Configured time-to-live is not a positive, finite number of seconds
    #[error("ttl must be a positive number of seconds, got {0}")]
    InvalidTtl(f64),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
