use dominant_core::Observer;

use crate::traits::HasEigenvalue;

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Eigenvalue estimate at this iteration.
    pub eigenvalue: f64,

    /// Absolute change from the previous estimate.
    pub delta: f64,
}

/// Observer that records every eigenvalue estimate.
///
/// Useful for inspecting convergence behavior after a solve. Pass
/// `&mut history` to the solver to keep ownership.
///
/// # Example
///
/// ```rust
/// use dominant_core::Matrix;
/// use dominant_observers::History;
/// use dominant_solvers::eigen::power_iteration::{Config, solve};
///
/// let matrix = Matrix::from_diagonal(&[2.0, 1.0]).unwrap();
/// let mut history = History::new();
/// let solution = solve(&matrix, &Config::default(), &mut history).unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the eigenvalue estimates in iteration order.
    pub fn eigenvalues(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.eigenvalue)
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record for `event`.
    pub fn record<E: HasEigenvalue>(&mut self, event: &E) {
        self.records.push(Record {
            iter: event.iter(),
            eigenvalue: event.eigenvalue(),
            delta: event.delta(),
        });
    }
}

impl<E: HasEigenvalue, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E: HasEigenvalue, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
