//! Elementary vector arithmetic on `f64` slices.
//!
//! Length mismatches between operands are caller bugs and panic. A vector
//! that cannot be normalized is a numerical outcome and is reported as a
//! [`VectorError`] instead of being turned into NaN or infinity.

use thiserror::Error;

/// Errors that can occur when normalizing a vector.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Every component is zero, so there is no direction to keep.
    #[error("cannot normalize a zero vector")]
    ZeroMagnitude,

    /// A component is NaN or infinite.
    #[error("vector has a non-finite component")]
    NonFiniteMagnitude,
}

/// Returns the inner product `Σ a[i] * b[i]`.
///
/// # Panics
///
/// Panics if `a` and `b` have different lengths.
#[must_use]
pub fn inner_product(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "vector lengths must match");

    let mut sum = 0.0;
    for (ai, bi) in a.iter().zip(b) {
        sum += ai * bi;
    }
    sum
}

/// Returns the Euclidean norm `√Σ v[i]²`.
///
/// The sum is formed on components scaled by `max|v[i]|`, so vectors whose
/// squares would underflow or overflow still get a finite, nonzero norm. The
/// result is infinite only when the norm itself exceeds `f64::MAX` or a
/// component is infinite, and NaN when a component is NaN.
#[must_use]
pub fn magnitude(v: &[f64]) -> f64 {
    match scaled_norm(v) {
        Ok(Some((scale, root))) => scale * root,
        Ok(None) => 0.0,
        Err(bad) => bad,
    }
}

/// Writes `src / ‖src‖` into `dst` and returns `‖src‖`.
///
/// `dst` is left untouched when an error is returned. The returned magnitude
/// is infinite when `‖src‖` exceeds `f64::MAX`, but `dst` is still a finite
/// unit vector.
///
/// # Errors
///
/// Returns [`VectorError::ZeroMagnitude`] if every component of `src` is zero
/// and [`VectorError::NonFiniteMagnitude`] if a component is NaN or infinite.
///
/// # Panics
///
/// Panics if `dst` and `src` have different lengths.
pub fn normalize_into(dst: &mut [f64], src: &[f64]) -> Result<f64, VectorError> {
    assert_eq!(dst.len(), src.len(), "vector lengths must match");

    let (scale, root) = checked_scaled_norm(src)?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s / scale / root;
    }
    Ok(scale * root)
}

/// Scales `v` to unit length in place and returns its previous magnitude.
///
/// # Errors
///
/// Same as [`normalize_into`]; `v` is unchanged on error.
pub fn normalize_in_place(v: &mut [f64]) -> Result<f64, VectorError> {
    let (scale, root) = checked_scaled_norm(v)?;
    for value in v.iter_mut() {
        *value = *value / scale / root;
    }
    Ok(scale * root)
}

/// Returns a unit-length copy of `v`.
///
/// # Errors
///
/// Same as [`normalize_into`].
pub fn normalized(v: &[f64]) -> Result<Vec<f64>, VectorError> {
    let mut out = v.to_vec();
    normalize_in_place(&mut out)?;
    Ok(out)
}

/// Splits `‖v‖` into `scale * root` with `scale = max|v[i]|` and
/// `1 ≤ root ≤ √n`.
///
/// Returns `Ok(None)` for the zero vector and `Err` with the NaN or infinite
/// norm when a component is not finite.
fn scaled_norm(v: &[f64]) -> Result<Option<(f64, f64)>, f64> {
    let mut scale = 0.0_f64;
    for value in v {
        let abs = value.abs();
        if abs.is_nan() {
            return Err(f64::NAN);
        }
        if abs > scale {
            scale = abs;
        }
    }

    if scale.is_infinite() {
        return Err(f64::INFINITY);
    }
    #[allow(clippy::float_cmp)]
    if scale == 0.0 {
        return Ok(None);
    }

    let mut sum = 0.0;
    for value in v {
        let ratio = value / scale;
        sum += ratio * ratio;
    }
    Ok(Some((scale, sum.sqrt())))
}

fn checked_scaled_norm(v: &[f64]) -> Result<(f64, f64), VectorError> {
    match scaled_norm(v) {
        Ok(Some(parts)) => Ok(parts),
        Ok(None) => Err(VectorError::ZeroMagnitude),
        Err(_) => Err(VectorError::NonFiniteMagnitude),
    }
}
