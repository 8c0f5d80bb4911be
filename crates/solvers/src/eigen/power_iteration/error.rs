use dominant_core::{MatrixError, VectorError};

use super::ConfigError;

/// Errors that can occur during power iteration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid matrix: {0}")]
    InvalidMatrix(#[from] MatrixError),

    #[error("eigenvector estimate collapsed to zero at iteration {iter}")]
    ZeroVector { iter: usize },

    #[error("eigenvector estimate is not finite at iteration {iter}")]
    NonFiniteVector { iter: usize },
}

impl Error {
    pub(super) fn normalization(err: VectorError, iter: usize) -> Self {
        match err {
            VectorError::ZeroMagnitude => Self::ZeroVector { iter },
            VectorError::NonFiniteMagnitude => Self::NonFiniteVector { iter },
        }
    }
}
