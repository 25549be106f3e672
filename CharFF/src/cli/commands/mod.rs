use clap::Subcommand;
use std::path::PathBuf;

pub mod dump;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a character file's structural prefix as a TeX hex listing
    Dump {
        /// Source .ff file
        source: PathBuf,

        /// Write the listing to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the structural prefix length in bytes
    Length {
        /// Source .ff file
        source: PathBuf,
    },

    /// Print palette counts and sprite record offsets
    Inspect {
        /// Source .ff file
        source: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Dump { source, output } => dump::execute(source, output.as_deref()),
            Commands::Length { source } => dump::length(source),
            Commands::Inspect { source } => inspect::execute(source),
        }
    }
}
