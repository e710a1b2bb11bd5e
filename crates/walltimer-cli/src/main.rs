mod commands;
mod logging;
mod timing_args;

use clap::Parser;
use commands::Commands;

/// wtimer: wall clock timing of built-in workloads.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
