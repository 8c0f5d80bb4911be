//! Dense matrix-vector multiplication.

/// Writes `A·x` into `dst`, where `a` holds a `rows × cols` matrix row-major.
///
/// Only the first `rows` entries of `dst` and the first `cols` entries of `x`
/// are used. No allocation takes place.
///
/// # Panics
///
/// Panics if `rows * cols` overflows, if `a` holds fewer than `rows * cols`
/// values, `x` fewer than `cols`, or `dst` fewer than `rows`.
pub fn multiply(dst: &mut [f64], a: &[f64], rows: usize, cols: usize, x: &[f64]) {
    let len = rows
        .checked_mul(cols)
        .unwrap_or_else(|| panic!("{rows}x{cols} matrix size overflows usize"));
    assert!(a.len() >= len, "matrix buffer too short");
    assert!(x.len() >= cols, "input vector too short");
    assert!(dst.len() >= rows, "output vector too short");

    let x = &x[..cols];
    for (i, out) in dst[..rows].iter_mut().enumerate() {
        let row = &a[i * cols..(i + 1) * cols];
        let mut sum = 0.0;
        for (aij, xj) in row.iter().zip(x) {
            sum += aij * xj;
        }
        *out = sum;
    }
}
