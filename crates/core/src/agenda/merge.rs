//! Per-day agenda merge
//!
//! Pure transform from raw event and reminder records to one sorted agenda
//! list. Touches no shared state, so it is safe to call concurrently for
//! different dates (preload does exactly that).

use chrono::{DateTime, NaiveDate, Utc};
use daybook_common::time::{day_bounds, local_date, local_datetime};
use daybook_domain::constants::UNTITLED_PLACEHOLDER;
use daybook_domain::{AgendaEntry, DaybookConfig, EntryKind, EventRecord, ReminderRecord};
use uuid::Uuid;

use crate::identity::{derive_entry_id, derive_fallback_id};
use crate::recurrence::occurs_on_any;

/// Build the sorted agenda for one local calendar day.
///
/// Events are filtered to the day's local bounds. Reminders are resolved to a
/// concrete due instant (missing time-of-day filled from config), expanded
/// through their recurrence rules, and filtered by the completed-on-that-day
/// policy. Entries come out ascending by occurrence time; at equal times
/// events sort before reminders (stable sort over an events-first list).
pub fn build_agenda(
    date: NaiveDate,
    events: &[EventRecord],
    reminders: &[ReminderRecord],
    config: &DaybookConfig,
) -> Vec<AgendaEntry> {
    let tz = config.timezone;
    let (day_start, day_end) = day_bounds(date, tz);

    let mut entries: Vec<AgendaEntry> = Vec::with_capacity(events.len() + reminders.len());

    for event in events {
        if event.start_time < day_start || event.start_time >= day_end {
            continue;
        }
        entries.push(AgendaEntry {
            id: entry_id(EntryKind::Event, &event.id, &event.title, event.start_time),
            title: display_title(&event.title),
            occurrence_time: event.start_time,
            kind: EntryKind::Event,
            source_id: non_empty(&event.id),
            is_from_shared_source: event.is_shared,
            collection_color: event.calendar_color.clone(),
            collection_name: event.calendar_name.clone(),
        });
    }

    for reminder in reminders {
        let Some(occurrence_time) = reminder_occurrence(reminder, date, config) else {
            continue;
        };
        entries.push(AgendaEntry {
            id: entry_id(EntryKind::Reminder, &reminder.id, &reminder.title, occurrence_time),
            title: display_title(&reminder.title),
            occurrence_time,
            kind: EntryKind::Reminder,
            source_id: non_empty(&reminder.id),
            is_from_shared_source: reminder.is_shared,
            collection_color: reminder.list_color.clone(),
            collection_name: reminder.list_name.clone(),
        });
    }

    entries.sort_by_key(|entry| entry.occurrence_time);
    entries
}

/// Resolve the occurrence instant of `reminder` on `date`, or `None` when it
/// does not belong on that day's agenda.
fn reminder_occurrence(
    reminder: &ReminderRecord,
    date: NaiveDate,
    config: &DaybookConfig,
) -> Option<DateTime<Utc>> {
    let tz = config.timezone;
    // Reminders with no resolvable due date never appear
    let due_date = reminder.due_date?;
    let due_time = reminder.due_time.unwrap_or(config.default_due_time);
    let base_due = local_datetime(due_date, due_time, tz);

    if reminder.is_recurring() {
        // Completed recurring reminders are evaluated purely by rule
        if !occurs_on_any(&reminder.rules, base_due, date, tz) {
            return None;
        }
        return Some(local_datetime(date, due_time, tz));
    }

    if local_date(base_due, tz) != date {
        return None;
    }
    if reminder.is_completed {
        // "done today" stays visible today but does not linger on other days
        match reminder.completion_date {
            Some(completed_at) if local_date(completed_at, tz) == date => {}
            _ => return None,
        }
    }
    Some(base_due)
}

fn entry_id(kind: EntryKind, source_id: &str, title: &str, time: DateTime<Utc>) -> Uuid {
    if source_id.is_empty() {
        derive_fallback_id(kind, title, time)
    } else {
        derive_entry_id(kind, source_id, time)
    }
}

fn display_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
