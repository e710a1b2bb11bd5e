//! # Timing Reports
//!
//! Line formats, and the [`ReportSink`] seam where those lines leave a
//! [`TimedFn`](crate::TimedFn).

use std::{
    fmt::Debug,
    io::{self, Write},
};

use parking_lot::Mutex;

/// Format a per-iteration line.
///
/// ``"Iteration {index} of {name}: {secs} seconds"``
pub fn iteration_line(
    index: usize,
    name: &str,
    secs: f64,
    precision: usize,
) -> String {
    format!("Iteration {index} of {name}: {secs:.precision$} seconds")
}

/// Format a run summary line.
///
/// ``"Average wall clock time: {secs}"``
pub fn average_line(
    secs: f64,
    precision: usize,
) -> String {
    format!("Average wall clock time: {secs:.precision$}")
}

/// Destination for timing report lines.
///
/// Each call to [`ReportSink::emit`] receives one complete line,
/// without a trailing newline.
pub trait ReportSink: Debug + Send + Sync {
    /// Emit a single line.
    fn emit(
        &self,
        line: &str,
    );
}

/// Writes lines to stdout.
///
/// Holds the stdout lock for the whole line; write errors are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(
        &self,
        line: &str,
    ) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the lines captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Take the captured lines, leaving the capture empty.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl ReportSink for CaptureSink {
    fn emit(
        &self,
        line: &str,
    ) {
        self.lines.lock().push(line.to_string());
    }
}

/// Forwards lines to the [`log`] facade at ``Info`` level.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new("walltimer")
    }
}

impl LogSink {
    /// Create a sink logging under `target`.
    pub fn new<S: Into<String>>(target: S) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The log target.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ReportSink for LogSink {
    fn emit(
        &self,
        line: &str,
    ) {
        log::info!(target: self.target.as_str(), "{line}");
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_iteration_line() {
        assert_eq!(
            iteration_line(2, "add", 0.123456, 2),
            "Iteration 2 of add: 0.12 seconds"
        );
        assert_eq!(
            iteration_line(1, "f", 1.5, 0),
            "Iteration 1 of f: 2 seconds"
        );
    }

    #[test]
    fn test_average_line() {
        assert_eq!(
            average_line(0.000125, 4),
            "Average wall clock time: 0.0001"
        );
        assert_eq!(
            average_line(0.25, 10),
            "Average wall clock time: 0.2500000000"
        );
    }

    #[test]
    fn test_capture_sink() {
        let sink = CaptureSink::new();
        sink.emit("a");
        sink.emit("b");
        assert_eq!(sink.lines(), vec!["a", "b"]);
        assert_eq!(sink.take(), vec!["a", "b"]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_capture_sink_concurrent_lines_are_whole() {
        let sink = Arc::new(CaptureSink::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        sink.emit(&format!("thread {t} line {i}"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 100);
        assert!(lines.iter().all(|l| l.starts_with("thread ")));
    }

    #[test]
    fn test_log_sink_target() {
        assert_eq!(LogSink::default().target(), "walltimer");
        assert_eq!(LogSink::new("bench").target(), "bench");
    }
}
