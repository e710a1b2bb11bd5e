use walltimer::{TimerOptions, timer};

use crate::{logging::LogArgs, timing_args::TimingArgs};

/// Args for the create-list command.
#[derive(clap::Args, Debug)]
pub struct CreateListArgs {
    /// Number of elements to push.
    #[arg(long, default_value_t = 1000)]
    pub size: usize,

    #[clap(flatten)]
    pub timing: TimingArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

/// Build ``[0, size)`` one push at a time.
pub fn create_list(size: usize) -> Vec<usize> {
    let mut lst = Vec::new();
    for i in 0..size {
        lst.push(i);
    }
    lst
}

impl CreateListArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;
        self.execute(self.timing.timer_options())?;
        Ok(())
    }

    /// Time ``create_list(size)`` under `options`; return the built list.
    pub fn execute(
        &self,
        options: TimerOptions,
    ) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
        let timed = timer!(create_list, options)?;
        log::info!(
            "create_list: size={} iterations={}",
            self.size,
            timed.config().iterations()
        );

        let lst = timed.call(self.size);
        log::debug!("built list of {} elements", lst.len());

        Ok(lst)
    }
}
