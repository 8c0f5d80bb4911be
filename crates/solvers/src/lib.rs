//! Numerical solvers for dominant eigenvalue problems.
//!
//! # Solvers
//!
//! - [`eigen::power_iteration`]: dominant eigenpair of a dense square matrix
//!   by repeated multiplication and normalization
//!
//! For a one-call entry point on a raw row-major buffer, see
//! [`eigen::power_iteration::dominant_eigen`].

pub mod eigen;
