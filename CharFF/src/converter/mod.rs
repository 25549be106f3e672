//! Format conversion utilities
//!
//! Renders the structural prefix of a `.ff` character container as an
//! uppercase hex listing wrapped in a TeX display-math block. Trailing
//! pixel data past the structural records is left out of the listing.

mod ff_to_tex;

pub use ff_to_tex::{
    convert_ff_to_tex, ff_bytes_to_tex, ff_to_tex_string, format_hex_dump, wrap_display_math,
};
