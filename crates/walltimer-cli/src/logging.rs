use stderrlog::{LogLevelNum, Timestamp};

/// Log level used when no ``-v`` flags are given; ``Info`` keeps
/// ``--log-sink`` timing lines visible.
pub const DEFAULT_LOG_LEVEL: u8 = 3;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(long)]
    pub silent: bool,

    /// More log detail on top of the default (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[arg(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level: ``-v`` flags only ever raise it.
    pub fn level(&self) -> LogLevelNum {
        match DEFAULT_LOG_LEVEL.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.silent)
            .verbosity(self.level())
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
