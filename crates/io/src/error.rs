use std::path::PathBuf;

use dominant_core::MatrixError;
use thiserror::Error;

/// Errors that can occur when loading a matrix from a source.
#[derive(Debug, Error)]
pub enum MatrixLoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document")]
    Parse(#[source] serde_json::Error),

    #[error("dataset {dataset} not found")]
    NotFound { dataset: String },

    #[error("expected dataset {dataset} to be 2-dimensional but it appears to be {rank}-dimensional")]
    NotTwoDimensional { dataset: String, rank: usize },

    #[error("dataset {dataset} has rows of different lengths")]
    Ragged { dataset: String },

    #[error("dataset {dataset} has a non-numeric entry at index {index}")]
    NonNumeric { dataset: String, index: usize },

    #[error("dataset {dataset} declares shape {rows}x{cols} but holds {found} values")]
    ShapeMismatch {
        dataset: String,
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("dataset {dataset} is {rows}x{cols}, expected a square matrix")]
    NotSquare {
        dataset: String,
        rows: usize,
        cols: usize,
    },

    #[error("dataset {dataset} is not a valid matrix")]
    Matrix {
        dataset: String,
        #[source]
        source: MatrixError,
    },
}
