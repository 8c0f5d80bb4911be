/// Event emitted by the power iteration solver after each iteration.
///
/// The eigenvector has already been normalized when the event is emitted.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Eigenvalue estimate from this iteration.
    pub eigenvalue: f64,

    /// Eigenvalue estimate from the previous iteration.
    pub previous: f64,

    /// Unit-norm eigenvector estimate.
    pub eigenvector: &'a [f64],
}

impl Event<'_> {
    /// Returns `|eigenvalue - previous|`, the quantity tested against the tolerance.
    #[must_use]
    pub fn delta(&self) -> f64 {
        (self.eigenvalue - self.previous).abs()
    }
}
