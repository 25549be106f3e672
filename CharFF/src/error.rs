//! Error types for `charff`

use thiserror::Error;

use crate::formats::ff::Stage;

/// The error type for `charff` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A read or skip ran past the end of the container.
    ///
    /// This is the only structural failure the walker can report. In-bounds
    /// garbage is not detected; the container format carries no checksums or
    /// length fields to validate against.
    #[error(
        "truncated input: {field} needs {needed} byte(s) at offset {offset} \
         ({remaining} remaining) during the {stage} stage"
    )]
    TruncatedInput {
        /// The stage the walk was in when the container ran out.
        stage: Stage,
        /// The field or region being read.
        field: &'static str,
        /// Offset the read started from.
        offset: usize,
        /// Bytes the read needed.
        needed: usize,
        /// Bytes left in the container.
        remaining: usize,
    },
}

/// A specialized Result type for `charff` operations.
pub type Result<T> = std::result::Result<T, Error>;
