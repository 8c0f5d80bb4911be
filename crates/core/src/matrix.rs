use std::fmt;

use thiserror::Error;

use crate::matvec;

/// Errors that can occur when constructing a [`Matrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("matrix dimension must be positive")]
    Empty,

    /// The buffer does not hold exactly `n * n` values.
    #[error("expected {expected} values for a {n}x{n} matrix, found {found}")]
    LengthMismatch {
        n: usize,
        expected: usize,
        found: usize,
    },

    /// `n * n` does not fit in `usize`.
    #[error("a {n}x{n} matrix is too large to store")]
    TooLarge { n: usize },

    /// An entry is NaN or infinite.
    #[error("non-finite entry at ({row}, {col})")]
    NonFinite { row: usize, col: usize },
}

/// An immutable dense square matrix stored row-major.
///
/// The dimension is at least one and every entry is finite; both are checked
/// when the matrix is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an `n × n` matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero, if `n * n` overflows, if
    /// `data.len() != n * n`, or if any entry is non-finite.
    pub fn from_row_major(n: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = checked_len(n)?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                n,
                expected,
                found: data.len(),
            });
        }

        if let Some(index) = data.iter().position(|value| !value.is_finite()) {
            return Err(MatrixError::NonFinite {
                row: index / n,
                col: index % n,
            });
        }

        Ok(Self { n, data })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row length differs from
    /// the number of rows, or if any entry is non-finite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(checked_len(n)?);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self::from_row_major(n, data)
    }

    /// Creates the `n × n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `n` is zero and
    /// [`MatrixError::TooLarge`] if `n * n` overflows.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        checked_len(n)?;
        Self::from_diagonal(&vec![1.0; n])
    }

    /// Creates a square matrix with `diagonal` on its main diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if `diagonal` is empty or holds a non-finite value.
    pub fn from_diagonal(diagonal: &[f64]) -> Result<Self, MatrixError> {
        let n = diagonal.len();
        let mut data = vec![0.0; checked_len(n)?];
        for (i, &value) in diagonal.iter().enumerate() {
            data[i * n + i] = value;
        }
        Self::from_row_major(n, data)
    }

    /// Returns the dimension `n` of this `n × n` matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entry at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.n && col < self.n {
            Some(self.data[row * self.n + col])
        } else {
            None
        }
    }

    /// Returns row `i`, or `None` if out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.n).then(|| &self.data[i * self.n..(i + 1) * self.n])
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }

    /// Writes `A·x` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `dst` is shorter than the matrix dimension.
    pub fn apply_into(&self, x: &[f64], dst: &mut [f64]) {
        matvec::multiply(dst, &self.data, self.n, self.n, x);
    }

    /// Returns `A·x` as a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `x` is shorter than the matrix dimension.
    #[must_use]
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        let mut dst = vec![0.0; self.n];
        self.apply_into(x, &mut dst);
        dst
    }

    /// Consumes the matrix and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

/// Returns `n * n`, the buffer length of an `n × n` matrix.
fn checked_len(n: usize) -> Result<usize, MatrixError> {
    if n == 0 {
        return Err(MatrixError::Empty);
    }
    n.checked_mul(n).ok_or(MatrixError::TooLarge { n })
}

/// Renders one row per line with each entry as ` %8.2f`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, " {value:8.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn from_row_major_accepts_square_buffer() {
        let matrix = Matrix::from_row_major(2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid matrix");

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.get(1, 0), Some(3.0));
        assert_eq!(matrix.row(0), Some(&[1.0, 2.0][..]));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn rejects_zero_dimension() {
        assert_eq!(
            Matrix::from_row_major(0, vec![]),
            Err(MatrixError::Empty)
        );
        let rows: [[f64; 0]; 0] = [];
        assert_eq!(Matrix::from_rows(&rows), Err(MatrixError::Empty));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Matrix::from_row_major(2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::LengthMismatch {
                n: 2,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(MatrixError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_dimension_whose_square_overflows() {
        let n = 1usize << (usize::BITS / 2);

        assert_eq!(
            Matrix::from_row_major(n, vec![]),
            Err(MatrixError::TooLarge { n })
        );
        assert_eq!(Matrix::identity(n), Err(MatrixError::TooLarge { n }));
        assert_eq!(
            Matrix::from_row_major(usize::MAX, vec![1.0]),
            Err(MatrixError::TooLarge { n: usize::MAX })
        );
    }

    #[test]
    fn rejects_non_finite_entries() {
        let err = Matrix::from_row_major(2, vec![1.0, 0.0, f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err, MatrixError::NonFinite { row: 1, col: 0 });
    }

    #[test]
    fn identity_applies_as_identity() {
        let matrix = Matrix::identity(3).expect("valid matrix");
        let x = [1.5, -2.0, 0.25];

        let y = matrix.apply(&x);

        for (a, b) in x.iter().zip(&y) {
            assert_relative_eq!(*a, *b);
        }
    }

    #[test]
    fn apply_multiplies_rows() {
        let matrix = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("valid matrix");

        let y = matrix.apply(&[1.0, 1.0]);

        assert_relative_eq!(y[0], 3.0);
        assert_relative_eq!(y[1], 7.0);
    }

    #[test]
    fn display_formats_entries_like_a_dump() {
        let matrix = Matrix::from_rows(&[[1.0, -2.5], [10.0, 0.126]]).expect("valid matrix");

        assert_eq!(
            matrix.to_string(),
            "     1.00    -2.50\n    10.00     0.13\n"
        );
    }
}
