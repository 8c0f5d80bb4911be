use dominant_core::{
    Matrix,
    vector::{inner_product, normalize_in_place, normalize_into},
};

use super::{Error, Event, Solution, Status};

/// Iteration state for one solve.
///
/// Both vectors are allocated once and reused. `x` is the unit-norm estimate
/// and `y` holds its image `A·x` after each step.
pub(super) struct State {
    x: Vec<f64>,
    y: Vec<f64>,
    eigenvalue: f64,
    previous: f64,
    iter: usize,
}

impl State {
    /// Starts from the normalized all-ones vector with `λ = 0` and
    /// `λ₀ = λ + 2ε`, so the first convergence test can never pass.
    pub(super) fn new(n: usize, tolerance: f64) -> Result<Self, Error> {
        let mut x = vec![1.0; n];
        normalize_in_place(&mut x).map_err(|err| Error::normalization(err, 0))?;

        let eigenvalue = 0.0;
        Ok(Self {
            x,
            y: vec![0.0; n],
            eigenvalue,
            previous: eigenvalue + 2.0 * tolerance,
            iter: 0,
        })
    }

    /// Performs one power iteration step.
    ///
    /// On error the estimate from the previous step is left in place.
    pub(super) fn step(&mut self, matrix: &Matrix) -> Result<(), Error> {
        let iter = self.iter + 1;

        matrix.apply_into(&self.x, &mut self.y);
        let eigenvalue = inner_product(&self.x, &self.y);
        normalize_into(&mut self.x, &self.y).map_err(|err| Error::normalization(err, iter))?;

        self.previous = self.eigenvalue;
        self.eigenvalue = eigenvalue;
        self.iter = iter;
        Ok(())
    }

    pub(super) fn iter(&self) -> usize {
        self.iter
    }

    /// Absolute convergence test: `|λ - λ₀| < ε`.
    pub(super) fn is_converged(&self, tolerance: f64) -> bool {
        (self.eigenvalue - self.previous).abs() < tolerance
    }

    pub(super) fn event(&self) -> Event<'_> {
        Event {
            iter: self.iter,
            eigenvalue: self.eigenvalue,
            previous: self.previous,
            eigenvector: &self.x,
        }
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            eigenvalue: self.eigenvalue,
            eigenvector: self.x,
            iters: self.iter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use dominant_core::vector::magnitude;

    #[test]
    fn starts_from_normalized_ones() {
        let state = State::new(4, 1e-6).expect("valid state");

        assert_eq!(state.iter(), 0);
        for value in &state.x {
            assert_relative_eq!(*value, 0.5);
        }
        assert_relative_eq!(state.previous - state.eigenvalue, 2e-6);
        assert!(!state.is_converged(1e-6));
    }

    #[test]
    fn step_updates_estimates_in_order() {
        let matrix = Matrix::from_diagonal(&[2.0, 1.0]).expect("valid matrix");
        let mut state = State::new(2, 1e-6).expect("valid state");

        state.step(&matrix).expect("nonzero image");
        assert_eq!(state.iter(), 1);
        assert_relative_eq!(state.previous, 0.0);
        assert_relative_eq!(state.eigenvalue, 1.5);

        state.step(&matrix).expect("nonzero image");
        assert_eq!(state.iter(), 2);
        assert_relative_eq!(state.previous, 1.5);
        assert_relative_eq!(state.eigenvalue, 1.8, epsilon = 1e-12);
        assert_relative_eq!(magnitude(&state.x), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn failed_step_keeps_previous_estimate() {
        let matrix = Matrix::from_row_major(2, vec![0.0; 4]).expect("valid matrix");
        let mut state = State::new(2, 1e-6).expect("valid state");
        let before = state.x.clone();

        let err = state.step(&matrix).unwrap_err();

        assert_eq!(err, Error::ZeroVector { iter: 1 });
        assert_eq!(state.iter(), 0);
        assert_eq!(state.x, before);
    }
}
