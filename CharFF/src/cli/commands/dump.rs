//! CLI commands for dumping character containers

use std::path::Path;

use crate::converter::{convert_ff_to_tex, ff_to_tex_string};
use crate::formats::ff;

/// Render a character file as a TeX hex listing
pub fn execute(source: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(dest) => convert_ff_to_tex(source, dest)?,
        None => println!("{}", ff_to_tex_string(source)?),
    }
    Ok(())
}

/// Print the structural prefix length of a character file
pub fn length(source: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(source)?;
    let len = ff::measure_ff_bytes(&data)?;
    println!("{len}");
    Ok(())
}
