//! Solvers for eigenvalue problems on a dense square [`Matrix`].
//!
//! # Solvers
//!
//! - [`power_iteration`]: finds the eigenvalue of largest magnitude and its
//!   eigenvector, provided that eigenvalue is strictly dominant
//!
//! [`Matrix`]: dominant_core::Matrix

pub mod power_iteration;
