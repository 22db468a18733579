//! Utility modules for browser access, formatting and logging.
//!
//! Provides:
//! - [`fetch_json`] - Uncached JSON requests with a timeout
//! - [`format`] - Quantity and byte-size formatting
//! - [`log`] - Level-filtered console logging

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::fetch_json;
