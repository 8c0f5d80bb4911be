//! Power iteration for the dominant eigenpair of a dense square matrix.
//!
//! # Algorithm
//!
//! Starting from the normalized all-ones vector `x`, each iteration computes
//! the image `y = A·x`, takes the Rayleigh quotient `λ = xᵀy` as the new
//! eigenvalue estimate, and renormalizes `x ← y / ‖y‖`. The solver stops when
//! two successive estimates satisfy `|λ - λ₀| < ε` or when the iteration cap
//! is reached.
//!
//! The starting vector is fixed, so repeated solves on the same input are
//! bit-identical.
//!
//! # When to Use
//!
//! Power iteration is appropriate when:
//! - Only the eigenvalue of largest magnitude is needed
//! - That eigenvalue is strictly dominant (`|λ₁| > |λ₂|`)
//! - The matrix is dense and small enough to multiply repeatedly
//!
//! # Limitations
//!
//! - **Absolute tolerance**: the convergence test compares raw differences, so
//!   eigenvalues far from unit magnitude need proportionally tighter or looser
//!   tolerances.
//! - **Tied leading eigenvalues**: with `λ` and `-λ` (or a complex pair) at
//!   the top of the spectrum the estimates may oscillate forever. The solver
//!   then returns [`Status::MaxIters`] with the last computed values.
//! - **Linear convergence**: the error shrinks roughly by `|λ₂/λ₁|` per
//!   iteration, which is slow when the two are close.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every iteration, once the new
//! eigenvector estimate has been normalized. Observers can return
//! [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`]. The
//! convergence test takes precedence: a stop requested on the iteration that
//! converges still yields [`Status::Converged`].

mod action;
mod config;
mod error;
mod event;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use dominant_core::{Matrix, Observer};
use log::{debug, trace};

use state::State;

/// Finds the dominant eigenvalue and eigenvector using power iteration.
///
/// The observer receives an [`Event`] after each iteration.
/// See the [module docs](self) for details on termination.
///
/// # Errors
///
/// Returns an error if an iterate collapses to the zero vector (for example
/// when `A·x = 0`) or one of its components overflows.
pub fn solve<Obs>(matrix: &Matrix, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    debug!(
        "power iteration: n = {}, tolerance = {:e}, max_iters = {}",
        matrix.dim(),
        config.tolerance(),
        config.max_iters()
    );

    let mut state = State::new(matrix.dim(), config.tolerance())?;

    while state.iter() < config.max_iters() {
        state.step(matrix)?;

        let event = state.event();
        trace!(
            "iter {}: eigenvalue = {}, delta = {:e}",
            event.iter,
            event.eigenvalue,
            event.delta()
        );

        let action = observer.observe(&event);

        if state.is_converged(config.tolerance()) {
            debug!("power iteration converged after {} iterations", state.iter());
            return Ok(state.into_solution(Status::Converged));
        }

        if let Some(Action::StopEarly) = action {
            debug!("power iteration stopped by observer after {} iterations", state.iter());
            return Ok(state.into_solution(Status::StoppedByObserver));
        }
    }

    debug!(
        "power iteration reached max_iters = {} without converging",
        config.max_iters()
    );
    Ok(state.into_solution(Status::MaxIters))
}

/// Runs power iteration without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if an iterate collapses to the zero vector or one of its
/// components overflows.
pub fn solve_unobserved(matrix: &Matrix, config: &Config) -> Result<Solution, Error> {
    solve(matrix, config, ())
}

/// Finds the dominant eigenpair of the `n × n` row-major matrix in `data`.
///
/// All arguments are validated before any iteration runs.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tolerance` is not finite and positive
/// or `max_iters` is zero, [`Error::InvalidMatrix`] if `n` is zero, `n * n`
/// overflows, `data` does not hold `n * n` values, or an entry is
/// non-finite, and otherwise
/// any error from [`solve`].
pub fn dominant_eigen(
    data: &[f64],
    n: usize,
    tolerance: f64,
    max_iters: usize,
) -> Result<Solution, Error> {
    let config = Config::new(tolerance, max_iters)?;
    let matrix = Matrix::from_row_major(n, data.to_vec())?;
    solve_unobserved(&matrix, &config)
}
