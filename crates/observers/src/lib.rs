//! Reusable observers for the dominant eigenvalue solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing an eigenvalue estimate.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasEigenvalue`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`]: records every eigenvalue estimate for later inspection
//! - [`LogObserver`]: forwards each event to the `log` facade
//! - [`StopWhen`]: requests an early stop once a predicate holds
//!
//! [`Observer`]: dominant_core::Observer
//! [`HasEigenvalue`]: traits::HasEigenvalue
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logger;
mod stop;

pub use history::{History, Record};
pub use logger::LogObserver;
pub use stop::StopWhen;
