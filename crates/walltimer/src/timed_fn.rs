//! # Timed Function Wrappers

use std::{convert::Infallible, fmt, sync::Arc};

use crate::{
    ReportSink,
    TimerConfig,
    TimerOptions,
    report::{average_line, iteration_line},
    samples::{TimingRun, TimingSample},
    stopwatch::timeit,
};

/// Wrap `f` under `name` with the default [`TimerOptions`].
///
/// This is the zero-configuration path: one iteration,
/// 10 decimal places, reported to stdout.
pub fn timed<S, F>(
    name: S,
    f: F,
) -> TimedFn<F>
where
    S: Into<String>,
{
    let options = TimerOptions::default();
    TimedFn::from_parts(
        name.into(),
        options.doc,
        TimerConfig::default(),
        options.sink,
        f,
    )
}

/// Wrap a named function, using its identifier as the report name.
///
/// ```rust
/// use walltimer::{TimerOptions, timer};
///
/// fn add((a, b): (i32, i32)) -> i32 {
///     a + b
/// }
///
/// let bare = timer!(add);
/// assert_eq!(bare.name(), "add");
///
/// let configured = timer!(add, TimerOptions::default().with_iterations(3)).unwrap();
/// assert_eq!(configured.config().iterations(), 3);
/// ```
///
/// The bare form is infallible; the configured form returns
/// a [`TimerResult`](crate::TimerResult).
#[macro_export]
macro_rules! timer {
    ($f:ident) => {
        $crate::timed(stringify!($f), $f)
    };
    ($f:ident, $options:expr) => {
        ($options).wrap(stringify!($f), $f)
    };
}

/// A callable wrapped with wall clock timing.
///
/// Every call is a timed run: the wrapped callable executes
/// [`TimerConfig::iterations`] times with identical arguments,
/// each iteration is timed, and the result of the last iteration is returned.
///
/// ```rust
/// use std::sync::Arc;
/// use walltimer::{CaptureSink, TimerOptions};
///
/// let sink = Arc::new(CaptureSink::new());
/// let add = TimerOptions::default()
///     .with_iterations(3)
///     .with_precision(2)
///     .with_sink(sink.clone())
///     .wrap("add", |(a, b): (i32, i32)| a + b)
///     .unwrap();
///
/// assert_eq!(add.call((2, 3)), 5);
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 4);
/// assert!(lines[0].starts_with("Iteration 1 of add: "));
/// assert!(lines[3].starts_with("Average wall clock time: "));
/// ```
pub struct TimedFn<F> {
    name: String,
    doc: Option<String>,
    config: TimerConfig,
    sink: Arc<dyn ReportSink>,
    f: F,
}

impl<F> fmt::Debug for TimedFn<F> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TimedFn")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("config", &self.config)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

impl<F> TimedFn<F> {
    pub(crate) fn from_parts(
        name: String,
        doc: Option<String>,
        config: TimerConfig,
        sink: Arc<dyn ReportSink>,
        f: F,
    ) -> Self {
        Self {
            name,
            doc,
            config,
            sink,
            f,
        }
    }

    /// The name reported in per-iteration lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The doc string, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// The validated configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// The wrapped callable.
    pub fn inner(&self) -> &F {
        &self.f
    }

    /// Unwrap into the wrapped callable.
    pub fn into_inner(self) -> F {
        self.f
    }

    /// Call with `args`; return the last iteration's result.
    ///
    /// Earlier iterations receive clones of `args`; the last receives `args`.
    /// Panics in the wrapped callable unwind through unchanged, and
    /// no average is reported for the abandoned run.
    pub fn call<A, R>(
        &self,
        args: A,
    ) -> R
    where
        F: Fn(A) -> R,
        A: Clone,
    {
        let Ok(value) = self.run(args, |f, args| Ok::<R, Infallible>(f(args)));
        value
    }

    /// Call a zero-argument callable; return the last iteration's result.
    pub fn invoke<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        let Ok(value) = self.run((), |f, ()| Ok::<R, Infallible>(f()));
        value
    }

    /// Call a fallible callable with `args`.
    ///
    /// The first `Err` stops the run and is returned unmodified;
    /// remaining iterations are skipped, and no average is reported.
    pub fn try_call<A, R, E>(
        &self,
        args: A,
    ) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: Clone,
    {
        self.run(args, |f, args| f(args))
    }

    fn run<A, R, E, I>(
        &self,
        args: A,
        invoke: I,
    ) -> Result<R, E>
    where
        A: Clone,
        I: Fn(&F, A) -> Result<R, E>,
    {
        let iterations = self.config.iterations();
        log::debug!("timing {}: {} iteration(s)", self.name, iterations);

        let mut run = TimingRun::with_capacity(iterations);

        for index in 1..iterations {
            let (elapsed, ret) = timeit(|| invoke(&self.f, args.clone()));
            ret?;
            self.record(&mut run, index, elapsed.into());
        }

        let (elapsed, ret) = timeit(|| invoke(&self.f, args));
        let value = ret?;
        self.record(&mut run, iterations, elapsed.into());

        self.finish(&run);
        Ok(value)
    }

    fn record(
        &self,
        run: &mut TimingRun,
        index: usize,
        sample: TimingSample,
    ) {
        log::trace!("{} iteration {}: {:?}", self.name, index, sample.elapsed());
        if self.config.reports_iterations() {
            self.sink.emit(&iteration_line(
                index,
                &self.name,
                sample.as_secs_f64(),
                self.config.precision(),
            ));
        }
        run.push(sample);
    }

    fn finish(
        &self,
        run: &TimingRun,
    ) {
        if self.config.reports_average()
            && let Some(mean) = run.mean_secs()
        {
            self.sink.emit(&average_line(mean, self.config.precision()));
        }
        log::debug!("timed {}: {:?} total", self.name, run.total());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::CaptureSink;

    fn capture(options: TimerOptions) -> (Arc<CaptureSink>, TimerOptions) {
        let sink = Arc::new(CaptureSink::new());
        let options = options.with_sink(sink.clone());
        (sink, options)
    }

    #[test]
    fn test_timed_defaults() {
        let f = timed("square", |x: u64| x * x);
        assert_eq!(f.name(), "square");
        assert_eq!(f.doc(), None);
        assert_eq!(f.config().iterations(), 1);
        assert_eq!(f.config().precision(), 10);
        assert!(!f.config().quiet());
    }

    #[test]
    fn test_call_counts_and_args() {
        let seen = RefCell::new(Vec::new());
        let (sink, options) = capture(TimerOptions::default().with_iterations(4));
        let f = options
            .wrap("record", |s: String| {
                seen.borrow_mut().push(s.clone());
                s.len()
            })
            .unwrap();

        assert_eq!(f.call("abc".to_string()), 3);
        assert_eq!(*seen.borrow(), vec!["abc"; 4]);
        assert_eq!(sink.lines().len(), 5);
    }

    #[test]
    fn test_returns_last_result() {
        let counter = Cell::new(0);
        let (_sink, options) = capture(TimerOptions::default().with_iterations(5));
        let f = options
            .wrap("count", || {
                counter.set(counter.get() + 1);
                counter.get()
            })
            .unwrap();

        assert_eq!(f.invoke(), 5);
        assert_eq!(f.invoke(), 10);
    }

    #[test]
    fn test_single_iteration_ignores_quiet() {
        let (sink, options) = capture(TimerOptions::default().with_quiet(true));
        let f = options.wrap("one", || 1).unwrap();
        assert_eq!(f.invoke(), 1);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Iteration 1 of one: "));
        assert!(lines[0].ends_with(" seconds"));
    }

    #[test]
    fn test_quiet_multi_iteration() {
        let (sink, options) = capture(
            TimerOptions::default()
                .with_iterations(3)
                .with_quiet(true)
                .with_precision(3),
        );
        let f = options.wrap("q", || ()).unwrap();
        f.invoke();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Average wall clock time: "));
    }

    #[test]
    fn test_try_call_error_stops_run() {
        let calls = Cell::new(0usize);
        let (sink, options) = capture(TimerOptions::default().with_iterations(5));
        let f = options
            .wrap("flaky", |limit: usize| {
                calls.set(calls.get() + 1);
                if calls.get() == limit {
                    Err(format!("failed on {}", calls.get()))
                } else {
                    Ok(calls.get())
                }
            })
            .unwrap();

        assert_eq!(f.try_call(3), Err("failed on 3".to_string()));
        assert_eq!(calls.get(), 3);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with("Iteration ")));
    }

    #[test]
    fn test_try_call_ok() {
        let (sink, options) = capture(TimerOptions::default().with_iterations(2));
        let f = options
            .wrap("parse", |s: &str| s.parse::<i32>())
            .unwrap();
        assert_eq!(f.try_call("42"), Ok(42));
        assert_eq!(sink.lines().len(), 3);
    }

    #[test]
    fn test_panic_propagates_without_average() {
        let calls = Cell::new(0usize);
        let (sink, options) = capture(TimerOptions::default().with_iterations(4));
        let f = options
            .wrap("boom", || {
                calls.set(calls.get() + 1);
                if calls.get() == 2 {
                    panic!("boom");
                }
            })
            .unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f.invoke()));
        assert!(result.is_err());
        assert_eq!(calls.get(), 2);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Iteration 1 of boom: "));
    }

    #[test]
    fn test_into_inner() {
        let f = timed("double", |x: i32| x * 2);
        assert_eq!((f.inner())(4), 8);
        let g = f.into_inner();
        assert_eq!(g(5), 10);
    }

    fn add((a, b): (i32, i32)) -> i32 {
        a + b
    }

    #[test]
    fn test_timer_macro() {
        let bare = timer!(add);
        assert_eq!(bare.name(), "add");
        assert_eq!(bare.config().iterations(), 1);

        let (sink, options) = capture(TimerOptions::default().with_iterations(2));
        let configured = timer!(add, options).unwrap();
        assert_eq!(configured.name(), "add");
        assert_eq!(configured.call((2, 3)), 5);
        assert_eq!(sink.lines().len(), 3);

        let invalid = timer!(add, TimerOptions::default().with_iterations(0));
        assert!(invalid.is_err());
    }
}
