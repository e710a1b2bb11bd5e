use std::sync::Arc;

use walltimer::{LogSink, TimerOptions};

/// Timing setup arg group.
#[derive(clap::Args, Debug)]
pub struct TimingArgs {
    /// Number of iterations per timed run.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: usize,

    /// Decimal places in the timing output.
    #[arg(short, long, default_value_t = walltimer::options::DEFAULT_PRECISION)]
    pub precision: usize,

    /// Suppress per-iteration lines; the average is still printed.
    #[arg(short, long)]
    pub quiet: bool,

    /// Route timing lines through the logger instead of stdout.
    #[arg(long, conflicts_with = "silent")]
    pub log_sink: bool,
}

impl TimingArgs {
    /// Build [`TimerOptions`] from the args; validation happens on wrap.
    pub fn timer_options(&self) -> TimerOptions {
        let options = TimerOptions::default()
            .with_iterations(self.iterations)
            .with_precision(self.precision)
            .with_quiet(self.quiet);

        if self.log_sink {
            options.with_sink(Arc::new(LogSink::default()))
        } else {
            options
        }
    }
}
