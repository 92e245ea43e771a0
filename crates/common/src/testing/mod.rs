//! Test support utilities
//!
//! Shipped as a regular module (not `#[cfg(test)]`) so downstream crates can
//! use the clock abstractions in their own tests and inject them into
//! production types.

pub mod time;

pub use time::{Clock, MockClock, SystemClock};
