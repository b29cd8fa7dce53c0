//! timed_lru - An in-process cache with combined LRU and TTL eviction
//!
//! Provides an ordered cache engine that evicts by capacity (least recently
//! used first) and by age (lazily, on read), plus a memoizing wrapper that
//! applies the engine to a computation keyed by its arguments.
//!
//! ```
//! use timed_lru::Memoized;
//!
//! let mut square = Memoized::wrap(
//!     |n: &u64| (n * n, None),
//!     Some(128),
//!     Some(30.0),
//! )
//! .unwrap();
//!
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.cache_info().hits, 1);
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod memo;

pub use cache::{CacheEntry, TimedLruCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use memo::{ArgValue, CacheInfo, CallArg, CallKey, Memoized};
