//! Error types for document operations

use thiserror::Error;

/// Errors reported by document operations
///
/// All variants are recoverable: a failed operation leaves the in-memory
/// document exactly as it was before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// File bytes are not valid UTF-8 text
    #[error("Failed to decode file as UTF-8: {0}")]
    Decode(String),

    /// Cell coordinates outside the current grid
    #[error("Cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operation needs a file identity but the document has none
    #[error("Document has no associated file")]
    NoFile,

    /// Storage read failure
    #[error("Read error: {0}")]
    Read(String),

    /// Storage write failure
    #[error("Write error: {0}")]
    Write(String),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, Error>;
