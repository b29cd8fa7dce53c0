//! Memoization Module
//!
//! Wraps a computation with the cache engine so repeated calls with equal
//! arguments are answered from cache, with hit/miss accounting.

mod info;
mod key;
mod wrapper;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use info::CacheInfo;
pub use key::{ArgValue, CallArg, CallKey};
pub use wrapper::Memoized;
