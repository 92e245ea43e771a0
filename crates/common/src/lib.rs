//! Modular common utilities shared across Daybook crates.
//!
//! This crate hosts the infrastructure-free building blocks:
//! - [`time`]: local-day math (day keys, day bounds, day windows)
//! - [`testing`]: clock abstractions for deterministic tests
//! - [`observability`]: tracing subscriber setup
//!
//! No dependency on other Daybook crates; pure utility code.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod observability;
pub mod testing;
pub mod time;

// Re-export commonly used types and traits for convenience
pub use testing::{Clock, MockClock, SystemClock};
pub use time::{day_bounds, day_key, day_window, local_date, local_datetime, DAY_KEY_FORMAT};
