//! Recurrence rule types
//!
//! Reminder sources carry custom recurrence rules with no built-in occurrence
//! expansion, so the engine evaluates them itself (see `daybook-core`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recurrence frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Describes repetition of a reminder-like source item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Step between occurrences (every N units); always >= 1
    pub interval: u32,
    /// Inclusive upper bound; an end date before the base due date matches
    /// no occurrences
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    /// Create a rule with the given frequency and interval (clamped to >= 1)
    pub fn new(frequency: Frequency, interval: u32) -> Self {
        Self { frequency, interval: interval.max(1), end_date: None }
    }

    /// Set an inclusive end date
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}
