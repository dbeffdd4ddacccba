//! natord command-line entry point

use anyhow::Result;
use clap::Parser;
use natord_cli::commands::Commands;

/// Locale-aware natural order sorting
#[derive(Debug, Parser)]
#[command(name = "natord", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    natord_cli::init_logging(cli.verbose, cli.quiet);
    log::debug!("Command: {:?}", cli.command);

    cli.command.execute()
}
