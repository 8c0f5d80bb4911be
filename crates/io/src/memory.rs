use std::collections::BTreeMap;

use dominant_core::Matrix;

use crate::{MatrixLoadError, MatrixSource};

/// Matrices registered under names and served from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    matrices: BTreeMap<String, Matrix>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `matrix` under `name`, returning any matrix it replaces.
    pub fn insert(&mut self, name: impl Into<String>, matrix: Matrix) -> Option<Matrix> {
        self.matrices.insert(name.into(), matrix)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, matrix: Matrix) -> Self {
        self.insert(name, matrix);
        self
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }
}

impl MatrixSource for InMemorySource {
    fn load(&self, dataset: &str) -> Result<Matrix, MatrixLoadError> {
        self.matrices
            .get(dataset)
            .cloned()
            .ok_or_else(|| MatrixLoadError::NotFound {
                dataset: dataset.to_owned(),
            })
    }
}
