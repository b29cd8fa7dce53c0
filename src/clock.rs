//! Time Source Module
//!
//! Defines the clock abstraction used for entry timestamps and staleness
//! checks. Timestamps are plain f64 seconds since the clock's epoch. The
//! system clock counts from the Unix epoch; a test clock may use any origin,
//! since only the difference between two readings ever matters.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

// == Clock Trait ==
/// A source of the current time in seconds.
pub trait Clock {
    /// Returns the current time in seconds since the clock's epoch.
    fn now(&self) -> f64;
}

// == System Clock ==
/// Wall-clock time in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_secs_f64()
    }
}

// == Manual Clock ==
/// A hand-driven clock for deterministic tests.
///
/// Clones share the same underlying time, so a test keeps one handle, gives
/// another to the cache, and moves time forward explicitly instead of
/// sleeping.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Creates a clock starting at zero seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time to `secs`.
    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    /// Moves the current time forward by `secs`.
    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
