mod create_list;
mod sleep;

/// Subcommands for wtimer
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Time building a list by repeated pushes.
    CreateList(create_list::CreateListArgs),

    /// Time a fixed sleep.
    Sleep(sleep::SleepArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::CreateList(cmd) => cmd.run(),
            Commands::Sleep(cmd) => cmd.run(),
        }
    }
}
