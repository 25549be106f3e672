//! FF to TeX hex-listing conversion

use std::path::Path;

use crate::error::Result;
use crate::formats::ff::trim_ff_bytes;

/// Byte groups per hex-listing line.
const GROUPS_PER_LINE: usize = 16;

/// Convert a character file to a TeX hex listing on disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the source cannot be read or the destination
/// cannot be written.
/// Returns [`Error::TruncatedInput`] if the source's records run past the
/// end of the file.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn convert_ff_to_tex<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    tracing::info!("Converting FF→TeX: {:?} → {:?}", source.as_ref(), dest.as_ref());

    let tex = ff_to_tex_string(source)?;
    std::fs::write(dest, tex)?;

    tracing::info!("Conversion complete");
    Ok(())
}

/// Read a character file and render its structural prefix as a TeX listing
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::TruncatedInput`] if the file's records run past its end.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn ff_to_tex_string<P: AsRef<Path>>(source: P) -> Result<String> {
    let data = std::fs::read(source)?;
    ff_bytes_to_tex(&data)
}

/// Render the structural prefix of raw container bytes as a TeX listing
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] if the container's records run past the
/// end of the buffer.
///
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn ff_bytes_to_tex(data: &[u8]) -> Result<String> {
    let prefix = trim_ff_bytes(data)?;
    Ok(wrap_display_math(&format_hex_dump(prefix)))
}

/// Format bytes as uppercase hex, sixteen space-separated groups per line
///
/// No line carries trailing whitespace and the result has no trailing
/// newline.
pub fn format_hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (line, chunk) in bytes.chunks(GROUPS_PER_LINE).enumerate() {
        if line > 0 {
            out.push('\n');
        }
        for (group, byte) in chunk.iter().enumerate() {
            if group > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:02X}"));
        }
    }
    out
}

/// Wrap hex-listing lines in a TeX display-math block
///
/// Every line becomes a `\texttt{...}` group terminated by a `\` line
/// continuation, bracketed by `$$` delimiters.
pub fn wrap_display_math(listing: &str) -> String {
    let mut out = String::from("$$\n");
    for line in listing.lines() {
        out.push_str(&format!("\\texttt{{{line}}}\\\n"));
    }
    out.push_str("$$");
    out
}
