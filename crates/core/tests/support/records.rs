//! Record builders and an in-memory `RecordSource` mock

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use daybook_core::RecordSource;
use daybook_domain::{DaybookError, EventRecord, ReminderRecord, Result};

/// Build an event record starting at the given UTC wall-clock time.
pub fn event(id: &str, title: &str, y: i32, m: u32, d: u32, h: u32, min: u32) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        start_time: Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
        calendar_id: "cal-1".to_string(),
        is_shared: false,
        calendar_color: None,
        calendar_name: Some("Personal".to_string()),
    }
}

/// Build a non-recurring, not-completed reminder due on the given date.
pub fn reminder(id: &str, title: &str, due_date: Option<NaiveDate>) -> ReminderRecord {
    ReminderRecord {
        id: id.to_string(),
        title: title.to_string(),
        due_date,
        due_time: None,
        rules: Vec::new(),
        is_completed: false,
        completion_date: None,
        list_id: "list-1".to_string(),
        is_shared: false,
        list_color: None,
        list_name: Some("Tasks".to_string()),
    }
}

/// Add a time-of-day component to a reminder.
pub fn with_time(mut rem: ReminderRecord, time: NaiveTime) -> ReminderRecord {
    rem.due_time = Some(time);
    rem
}

/// In-memory mock for `RecordSource`.
///
/// Serves a fixed set of records, counts fetches, and can be told to fail
/// for specific days (matched against the UTC date of the window start, so
/// intended for UTC-configured tests).
#[derive(Default)]
pub struct StaticRecordSource {
    events: Vec<EventRecord>,
    reminders: Vec<ReminderRecord>,
    fail_days: HashSet<NaiveDate>,
    fetches: AtomicUsize,
}

impl StaticRecordSource {
    /// Create a mock seeded with the provided records.
    pub fn new(events: Vec<EventRecord>, reminders: Vec<ReminderRecord>) -> Self {
        Self { events, reminders, fail_days: HashSet::new(), fetches: AtomicUsize::new(0) }
    }

    /// Make every fetch for the given day fail with a source error.
    pub fn failing_on(mut self, day: NaiveDate) -> Self {
        self.fail_days.insert(day);
        self
    }

    /// Number of day-fetches served so far (event fetches only, so one
    /// `rebuild` counts once).
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_days.contains(&start.date_naive()) {
            return Err(DaybookError::Source("injected fetch failure".to_string()));
        }
        Ok(self
            .events
            .iter()
            .filter(|ev| ev.start_time >= start && ev.start_time < end)
            .cloned()
            .collect())
    }

    async fn fetch_reminders(
        &self,
        start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<ReminderRecord>> {
        if self.fail_days.contains(&start.date_naive()) {
            return Err(DaybookError::Source("injected fetch failure".to_string()));
        }
        Ok(self.reminders.clone())
    }
}
