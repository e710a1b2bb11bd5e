use std::{thread, time::Duration};

use walltimer::{Stopwatch, TimerOptions};

use crate::{logging::LogArgs, timing_args::TimingArgs};

/// Args for the sleep command.
#[derive(clap::Args, Debug)]
pub struct SleepArgs {
    /// Milliseconds to sleep per iteration.
    #[arg(long, default_value_t = 70)]
    pub millis: u64,

    #[clap(flatten)]
    pub timing: TimingArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl SleepArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;
        self.execute(self.timing.timer_options())?;
        Ok(())
    }

    /// Time the sleep under `options`; return the total elapsed time.
    pub fn execute(
        &self,
        options: TimerOptions,
    ) -> Result<Duration, Box<dyn std::error::Error>> {
        let timed =
            options.wrap("sleep", |millis: u64| thread::sleep(Duration::from_millis(millis)))?;

        let total = Stopwatch::start();
        timed.call(self.millis);
        log::info!("{}", total.report("Elapsed time"));

        Ok(total.elapsed())
    }
}
