//! Shared test helpers for `daybook-core` integration tests.
//!
//! Provides record builders and in-memory mocks for the record-source and
//! completion-backend ports so tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod backends;
pub mod records;
