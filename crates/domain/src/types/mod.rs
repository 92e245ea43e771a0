//! Domain types and models

pub mod agenda;
pub mod records;
pub mod recurrence;

pub use agenda::{AgendaEntry, EntryKind};
pub use records::{EventRecord, ReminderRecord};
pub use recurrence::{Frequency, RecurrenceRule};
