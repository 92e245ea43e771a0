//! Agenda entry types
//!
//! One `AgendaEntry` is one displayable row in a day's agenda, built fresh on
//! every rebuild and never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of source record an agenda entry came from.
///
/// Closed set: the merger's filtering logic is defined per-case, so adding a
/// variant means touching that logic too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Event,
    Reminder,
}

impl EntryKind {
    /// Canonical lowercase label, used in identity derivation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Reminder => "reminder",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row in a day's agenda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaEntry {
    /// Stable identifier derived from (kind, source id, occurrence time).
    /// Equal inputs always yield the same id, across process restarts.
    pub id: Uuid,
    /// Display text; never empty (placeholder substituted upstream)
    pub title: String,
    /// Absolute timestamp of this specific occurrence
    pub occurrence_time: DateTime<Utc>,
    /// Whether this row came from an event or a reminder
    pub kind: EntryKind,
    /// Identifier of the originating record; absent only in fallback paths
    pub source_id: Option<String>,
    /// Derived from the owning collection's sharing metadata
    pub is_from_shared_source: bool,
    /// Presentation metadata from the owning collection
    pub collection_color: Option<String>,
    /// Presentation metadata from the owning collection
    pub collection_name: Option<String>,
}

/// Equality covers id plus the render-affecting fields; used to suppress
/// redundant refreshes, not for identity.
impl PartialEq for AgendaEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.occurrence_time == other.occurrence_time
            && self.is_from_shared_source == other.is_from_shared_source
    }
}

impl Eq for AgendaEntry {}
