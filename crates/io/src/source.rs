use dominant_core::Matrix;

use crate::MatrixLoadError;

/// Supplies dense square matrices by identifier.
pub trait MatrixSource {
    /// Loads the matrix named by `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixLoadError`] if the dataset does not exist or cannot be
    /// turned into a square matrix.
    fn load(&self, dataset: &str) -> Result<Matrix, MatrixLoadError>;
}

impl<S: MatrixSource + ?Sized> MatrixSource for &S {
    fn load(&self, dataset: &str) -> Result<Matrix, MatrixLoadError> {
        (**self).load(dataset)
    }
}
