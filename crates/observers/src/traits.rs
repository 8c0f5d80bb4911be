//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused.
//!
//! # Event traits
//!
//! - [`HasEigenvalue`]: events that carry successive eigenvalue estimates
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use dominant_core::Observer;
//! use dominant_observers::traits::{CanStopEarly, HasEigenvalue};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasEigenvalue, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.delta() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use dominant_solvers::eigen::power_iteration;

/// An event that carries the current and previous eigenvalue estimates.
pub trait HasEigenvalue {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the current eigenvalue estimate.
    fn eigenvalue(&self) -> f64;

    /// Returns the estimate from the previous iteration.
    fn previous(&self) -> f64;

    /// Returns the absolute change between the two estimates.
    fn delta(&self) -> f64 {
        (self.eigenvalue() - self.previous()).abs()
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasEigenvalue for power_iteration::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn eigenvalue(&self) -> f64 {
        self.eigenvalue
    }

    fn previous(&self) -> f64 {
        self.previous
    }
}

impl CanStopEarly for power_iteration::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
