//! Agenda port interfaces
//!
//! The raw record source is the only I/O-bound collaborator of the agenda
//! engine: a device calendar/reminders provider (or a test double) that
//! supplies raw records for a UTC window. Records arrive already filtered to
//! the user's selected source collections.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use daybook_domain::{EventRecord, ReminderRecord, Result};

/// Trait for raw calendar/reminder record providers
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch event records whose occurrence start falls within `[start, end)`.
    ///
    /// Event sources are assumed pre-expanded by the provider (one record per
    /// occurrence), so no recurrence handling is needed on this side.
    async fn fetch_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventRecord>>;

    /// Fetch reminder records that may produce an occurrence within
    /// `[start, end)`.
    ///
    /// Recurring reminders are returned as base records with their rules even
    /// when the base due date predates the window; expansion is the engine's
    /// job.
    async fn fetch_reminders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReminderRecord>>;
}
