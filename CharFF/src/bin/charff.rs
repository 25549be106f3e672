//! charff command-line binary

fn main() -> anyhow::Result<()> {
    charff::cli::run_cli()
}
