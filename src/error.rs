use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanarIndexError {
    /// A point, rectangle or radius passed by the caller was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A nearest-neighbor query was made against an index with no points.
    #[error("Nearest-neighbor query on an empty index")]
    EmptyIndex,
}

pub type Result<T> = std::result::Result<T, PlanarIndexError>;
