//! Wall-clock timer
//!
//! Timestamps are whole microseconds since the timer was created. Only
//! differences between two timestamps are meaningful. The underlying clock
//! is [`Instant`], so a later timestamp is never smaller than an earlier
//! one.
//!
//! Elapsed times are kept as integer microseconds and only converted to
//! seconds when reported, so repeated measurements add up exactly.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Microsecond-resolution timer
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    origin: Instant,
}

impl Timer {
    /// Start a timer anchored at the current instant
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Whole microseconds elapsed since the anchor
    #[inline]
    pub fn timestamp_micros(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }

    /// Seconds elapsed since the anchor, at microsecond resolution
    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.timestamp_micros() as f64 * 1.0e-6
    }

    /// Run `f` and return its output with the elapsed time, truncated to
    /// whole microseconds
    ///
    /// The output passes through [`black_box`] before the clock is read
    /// again.
    #[inline]
    pub fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, Duration) {
        let start = self.timestamp_micros();
        let output = black_box(f());
        let elapsed = self.timestamp_micros().saturating_sub(start);
        (output, Duration::from_micros(elapsed))
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
