//! Core logic, independent of the browser.
//!
//! - [`percentage`] - Ratio/percentage normalization for bars
//! - [`routes`] - Declarative route table and link matching
//! - [`error`] - Domain error types

pub mod error;
pub mod percentage;
pub mod routes;

pub use percentage::BarSegments;
