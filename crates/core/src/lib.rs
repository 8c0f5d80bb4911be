//! Core types and primitives for the dominant eigenvalue solvers.
//!
//! This crate defines the shared building blocks that solvers, observers, and
//! matrix sources build on:
//!
//! - [`Matrix`]: an immutable dense square matrix stored row-major
//! - [`vector`]: inner product, magnitude, and normalization
//! - [`matvec`]: dense matrix times vector
//! - [`Observer`]: receives solver events and optionally returns control actions

mod matrix;
mod observer;

pub mod matvec;
pub mod vector;

pub use matrix::{Matrix, MatrixError};
pub use observer::Observer;
pub use vector::VectorError;
