//! Raw collaborator record types
//!
//! These mirror what a device calendar/reminders provider hands over for a
//! local-day window, already filtered to the user's selected collections.
//! Event sources arrive pre-expanded (one record per occurrence); reminder
//! sources arrive as base records plus their recurrence rules.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::recurrence::RecurrenceRule;

/// Raw calendar event record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    /// Start of this occurrence (already expanded by the provider)
    pub start_time: DateTime<Utc>,
    /// Owning calendar (source collection)
    pub calendar_id: String,
    /// Sharing/ownership flag of the owning calendar
    pub is_shared: bool,
    pub calendar_color: Option<String>,
    pub calendar_name: Option<String>,
}

/// Raw reminder record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRecord {
    pub id: String,
    pub title: String,
    /// Due date component; reminders without one are excluded from agendas
    pub due_date: Option<NaiveDate>,
    /// Due time component; absent for date-only reminders
    pub due_time: Option<NaiveTime>,
    /// Custom recurrence rules; the item occurs on a date if any rule matches
    pub rules: Vec<RecurrenceRule>,
    pub is_completed: bool,
    pub completion_date: Option<DateTime<Utc>>,
    /// Owning reminder list (source collection)
    pub list_id: String,
    /// Sharing/ownership flag of the owning list
    pub is_shared: bool,
    pub list_color: Option<String>,
    pub list_name: Option<String>,
}

impl ReminderRecord {
    /// Whether this reminder carries at least one recurrence rule
    pub fn is_recurring(&self) -> bool {
        !self.rules.is_empty()
    }
}
