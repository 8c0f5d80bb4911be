//! Matrix sources for the dominant eigenvalue solvers.
//!
//! A [`MatrixSource`] turns an identifier into a validated square
//! [`Matrix`]. Two sources are provided:
//!
//! - [`JsonSource`]: a JSON document on disk, with the dataset located by a
//!   JSON pointer such as [`DEFAULT_DATASET`]
//! - [`InMemorySource`]: matrices registered by name, for tests and embedding
//!
//! [`Matrix`]: dominant_core::Matrix

mod error;
mod json;
mod memory;
mod source;

pub use error::MatrixLoadError;
pub use json::{DEFAULT_DATASET, JsonSource};
pub use memory::InMemorySource;
pub use source::MatrixSource;
