//! # CharFF
//!
//! A pure-Rust library for working with `.ff` fighting-game character
//! containers.
//!
//! A container packs a header, a palette table, a character stats block, and
//! a sprite table whose records have data-dependent, flag-controlled
//! lengths, followed by raw pixel data. `CharFF` walks the structural records
//! to find where they end, trims the file to that prefix, and can render the
//! result as a TeX hex listing.
//!
//! The walker computes offsets only. It never decodes palette colors, pixel
//! data, or box coordinates, and it performs no validation beyond bounds
//! checks - the format carries nothing to validate against.
//!
//! ## Quick Start
//!
//! ### Measuring and trimming a container
//!
//! ```no_run
//! use charff::formats::ff;
//!
//! // Structural prefix of a character file, pixel data stripped
//! let records = ff::read_ff("data/characters/Debuggy.ff")?;
//!
//! // Or work on bytes already in memory
//! let data = std::fs::read("data/characters/Debuggy.ff")?;
//! let len = ff::measure_ff_bytes(&data)?;
//! println!("{len} structural bytes of {}", data.len());
//! # Ok::<(), charff::Error>(())
//! ```
//!
//! ### Rendering a TeX hex listing
//!
//! ```no_run
//! use charff::converter::convert_ff_to_tex;
//!
//! convert_ff_to_tex("data/characters/Debuggy.ff", "Debuggy.tex")?;
//! # Ok::<(), charff::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `charff` command-line binary

pub mod converter;
pub mod error;
pub mod formats;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::ff::{
        FfLayout, FfWalker, SpriteKind, SpriteRecord, Stage, inspect_ff, inspect_ff_bytes,
        measure_ff_bytes, read_ff, trim_ff_bytes,
    };

    pub use crate::converter::{convert_ff_to_tex, ff_bytes_to_tex, ff_to_tex_string};
}
