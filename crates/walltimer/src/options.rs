//! # Timer Options

use std::sync::Arc;

use crate::{
    ReportSink,
    StdoutSink,
    TimedFn,
    TimerError,
    TimerResult,
};

/// Default number of iterations per timed run.
pub const DEFAULT_ITERATIONS: usize = 1;

/// Default number of decimal places in report lines.
pub const DEFAULT_PRECISION: usize = 10;

/// Largest print precision the float formatter accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Validated timing configuration.
///
/// Only constructable through [`TimerOptions::build`] or [`Default`];
/// ``iterations`` is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    iterations: usize,
    precision: usize,
    quiet: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            precision: DEFAULT_PRECISION,
            quiet: false,
        }
    }
}

impl TimerConfig {
    /// Number of times the wrapped callable runs per call.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Decimal places in report lines.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Are per-iteration lines suppressed for multi-iteration runs?
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Should per-iteration lines be emitted?
    ///
    /// A single-iteration run always reports its one line; otherwise
    /// it would produce no output at all.
    pub fn reports_iterations(&self) -> bool {
        self.iterations == 1 || !self.quiet
    }

    /// Should a summary average line be emitted?
    pub fn reports_average(&self) -> bool {
        self.iterations > 1
    }
}

/// Options for building a [`TimedFn`].
#[derive(Clone, Debug)]
pub struct TimerOptions {
    /// Number of iterations per timed run; must be >= 1.
    pub iterations: usize,

    /// Decimal places in report lines; at most [`MAX_PRECISION`].
    pub precision: usize,

    /// Suppress per-iteration lines (multi-iteration runs only).
    pub quiet: bool,

    /// Optional doc string attached to the wrapper.
    pub doc: Option<String>,

    /// Where report lines go.
    pub sink: Arc<dyn ReportSink>,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            precision: DEFAULT_PRECISION,
            quiet: false,
            doc: None,
            sink: Arc::new(StdoutSink),
        }
    }
}

impl TimerOptions {
    /// Set the iteration count.
    pub fn with_iterations(
        mut self,
        iterations: usize,
    ) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the print precision.
    pub fn with_precision(
        mut self,
        precision: usize,
    ) -> Self {
        self.precision = precision;
        self
    }

    /// Set quiet mode.
    pub fn with_quiet(
        mut self,
        quiet: bool,
    ) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set the doc string.
    pub fn with_doc<S: Into<String>>(
        mut self,
        doc: Option<S>,
    ) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    /// Set the report sink.
    pub fn with_sink(
        mut self,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        self.sink = sink;
        self
    }

    /// Validate into a [`TimerConfig`].
    ///
    /// # Errors
    /// * [`TimerError::InvalidConfiguration`] if ``iterations`` is 0.
    /// * [`TimerError::PrecisionTooLarge`] if ``precision`` > [`MAX_PRECISION`].
    pub fn build(&self) -> TimerResult<TimerConfig> {
        if self.iterations < 1 {
            return Err(TimerError::InvalidConfiguration {
                iterations: self.iterations,
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(TimerError::PrecisionTooLarge {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(TimerConfig {
            iterations: self.iterations,
            precision: self.precision,
            quiet: self.quiet,
        })
    }

    /// Wrap `f` under `name`.
    ///
    /// Validation happens here, before any call is attempted.
    ///
    /// # Errors
    /// * See [`TimerOptions::build`].
    pub fn wrap<S, F>(
        self,
        name: S,
        f: F,
    ) -> TimerResult<TimedFn<F>>
    where
        S: Into<String>,
    {
        let config = self.build()?;
        Ok(TimedFn::from_parts(name.into(), self.doc, config, self.sink, f))
    }
}
