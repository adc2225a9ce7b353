mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// curricula: bucket a parallel corpus into curriculum levels.
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
