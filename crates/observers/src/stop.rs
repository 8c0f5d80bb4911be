use dominant_core::Observer;

use crate::traits::CanStopEarly;

/// Observer that requests an early stop once `predicate` returns true.
///
/// # Example
///
/// ```rust
/// use dominant_core::Matrix;
/// use dominant_observers::StopWhen;
/// use dominant_solvers::eigen::power_iteration::{Config, Event, Status, solve};
///
/// let matrix = Matrix::from_diagonal(&[3.0, 2.0, 1.0]).unwrap();
/// let observer = StopWhen::new(|event: &Event<'_>| event.eigenvalue > 2.9);
/// let solution = solve(&matrix, &Config::default(), observer).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// ```
pub struct StopWhen<F> {
    predicate: F,
    fired: bool,
}

impl<F> StopWhen<F> {
    /// Creates an observer from a predicate over events.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            fired: false,
        }
    }

    /// Returns true if the predicate has requested a stop.
    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

impl<E, A, F> Observer<E, A> for StopWhen<F>
where
    A: CanStopEarly,
    F: FnMut(&E) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if (self.predicate)(event) {
            self.fired = true;
            Some(A::stop_early())
        } else {
            None
        }
    }
}

/// Allows `&mut StopWhen<F>` to be passed to solvers that take an observer by
/// value, so [`StopWhen::fired`] can be checked after the solve completes.
impl<E, A, F> Observer<E, A> for &mut StopWhen<F>
where
    A: CanStopEarly,
    F: FnMut(&E) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
