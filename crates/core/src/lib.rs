//! # Daybook Core
//!
//! The agenda aggregation and caching engine.
//!
//! This crate contains:
//! - Identity derivation for agenda entries (stable, content-addressed ids)
//! - Recurrence rule evaluation for reminder-like sources
//! - The per-day agenda merger (pure transform over raw records)
//! - The day-keyed agenda cache with TTL and concurrent preloading
//! - The completion status store (local + cloud union merge)
//!
//! ## Architecture
//! - Port traits ([`agenda::ports`], [`completion::ports`]) describe the
//!   external collaborators; hosts inject implementations
//! - Pure functions (identity, recurrence, merge) are safe from any task
//! - Stateful components confine mutation behind their own locks

pub mod agenda;
pub mod completion;
pub mod identity;
pub mod recurrence;

// Re-export commonly used items
pub use agenda::{build_agenda, AgendaCache, AgendaService, RecordSource};
pub use completion::{CompletionBackend, CompletionStore};
pub use identity::{derive_entry_id, derive_fallback_id};
pub use recurrence::{occurs_on, occurs_on_any};
