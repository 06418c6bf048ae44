//! Error types for stemtree

use thiserror::Error;

/// Result type alias for stemtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stemtree operations
///
/// Ordinary absence (a missing key, an empty heap) is reported as `None`
/// by the operation itself, never through this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
