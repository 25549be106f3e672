//! CLI command for reporting container layout

use std::path::Path;

use crate::formats::ff;

/// Print the structural layout of a character file
pub fn execute(source: &Path) -> anyhow::Result<()> {
    let layout = ff::inspect_ff(source)?;

    println!(
        "Palettes: {} ({} colors each)",
        layout.palette_count, layout.color_count
    );
    println!("Sprites: {}", layout.sprite_count);
    for (index, sprite) in layout.sprites.iter().enumerate() {
        println!(
            "  {index:4}  offset {:#08X}  {:5} bytes  {}",
            sprite.offset,
            sprite.len,
            sprite.kind.label()
        );
    }
    println!("Structural length: {} bytes", layout.structural_len);

    Ok(())
}
