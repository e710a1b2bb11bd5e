//! # Timing Samples

use std::time::Duration;

/// A single elapsed wall clock measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimingSample {
    elapsed: Duration,
}

impl From<Duration> for TimingSample {
    fn from(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

impl TimingSample {
    /// The elapsed duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The elapsed duration in (non-negative) seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// The ordered samples of one timed run, in invocation order.
#[derive(Debug, Default, Clone)]
pub struct TimingRun {
    samples: Vec<TimingSample>,
}

impl TimingRun {
    /// Create an empty run with room for `iterations` samples.
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            samples: Vec::with_capacity(iterations),
        }
    }

    /// Append a sample.
    pub fn push(
        &mut self,
        sample: TimingSample,
    ) {
        self.samples.push(sample);
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Is the run empty?
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples, in invocation order.
    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// Total elapsed time over all samples.
    pub fn total(&self) -> Duration {
        self.samples.iter().map(TimingSample::elapsed).sum()
    }

    /// Arithmetic mean of the samples in seconds; `None` for an empty run.
    pub fn mean_secs(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(TimingSample::as_secs_f64).sum();
        Some(sum / self.samples.len() as f64)
    }
}
