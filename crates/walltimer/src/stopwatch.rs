//! # Time Utilities

use std::time::{Duration, Instant};

/// Time an operation; return (duration, result).
pub fn timeit<F, R>(f: F) -> (Duration, R)
where
    F: FnOnce() -> R,
{
    let t0 = Instant::now();
    let ret = f();
    let t1 = Instant::now();
    (t1 - t0, ret)
}

/// A started monotonic clock.
///
/// For scoped measurements that don't fit a single closure.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    /// Start a new stopwatch.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time elapsed since start, in whole nanoseconds.
    ///
    /// Saturates at `u64::MAX` (roughly 584 years).
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Format the elapsed nanoseconds as ``"{label} (ns): {n}"``.
    pub fn report(
        &self,
        label: &str,
    ) -> String {
        format!("{label} (ns): {}", self.elapsed_nanos())
    }
}
