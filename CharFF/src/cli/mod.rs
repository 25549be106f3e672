//! charff CLI - Command-line interface for character container tools

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "charff")]
#[command(about = "charff: character container (.ff) structural tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the charff CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
