/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive eigenvalue estimates differ by less than the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a power iteration solve.
///
/// When the solver does not converge, the fields hold the last computed
/// estimates, which may oscillate between iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Eigenvalue estimate (Rayleigh quotient of the last iteration).
    pub eigenvalue: f64,

    /// Unit-norm eigenvector estimate.
    pub eigenvector: Vec<f64>,

    /// Number of iterations performed.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solve met the convergence test.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
