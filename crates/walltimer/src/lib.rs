//! # `walltimer` Wall Clock Timing Wrappers
//!
//! Wrap a callable so each call runs it one or more times, prints the wall
//! clock time of every iteration, and (for multi-iteration runs) prints the
//! average.
//!
//! See:
//! * [`timed`] / [`timer!`] for the zero-configuration wrapper.
//! * [`TimerOptions`] to configure iterations, precision, quiet mode and sinks.
//! * [`TimedFn`] for the wrapper itself.
//! * [`report`] for line formats and [`ReportSink`] implementations.
//! * [`stopwatch`] for one-off measurements.
//!
//! ## Report Format
//!
//! ```text
//! Iteration 1 of add: 0.00 seconds
//! Iteration 2 of add: 0.00 seconds
//! Iteration 3 of add: 0.00 seconds
//! Average wall clock time: 0.00
//! ```
//!
//! * A single-iteration run prints its one iteration line, and no average,
//!   even when ``quiet`` is set.
//! * A multi-iteration run prints the average line, even when ``quiet`` is set.
//! * If the wrapped callable fails, its error (or panic) reaches the caller
//!   unchanged and no average is printed.
//!
//! ## Example
//!
//! ```rust
//! use walltimer::{TimerOptions, timed};
//!
//! fn create_list(size: usize) -> Vec<usize> {
//!     let mut lst = Vec::new();
//!     for i in 0..size {
//!         lst.push(i);
//!     }
//!     lst
//! }
//!
//! let once = timed("create_list", create_list);
//! assert_eq!(once.call(10).len(), 10);
//!
//! let ten = TimerOptions::default()
//!     .with_iterations(10)
//!     .with_precision(6)
//!     .wrap("create_list", create_list)?;
//! assert_eq!(ten.call(1000).len(), 1000);
//! # Ok::<(), walltimer::TimerError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod options;
pub mod report;
pub mod samples;
pub mod stopwatch;
pub mod timed_fn;

pub use errors::{TimerError, TimerResult};
pub use options::{TimerConfig, TimerOptions};
pub use report::{CaptureSink, LogSink, ReportSink, StdoutSink};
pub use samples::{TimingRun, TimingSample};
pub use stopwatch::{Stopwatch, timeit};
pub use timed_fn::{TimedFn, timed};
