//! Recurrence rule evaluation
//!
//! Reminder sources carry custom rules with no provider-side occurrence
//! expansion, so the engine answers "does this rule fire on that day?"
//! itself. Pure functions, no state.
//!
//! Day-of-month and month-day matching use exact equality, not nearest-valid-
//! day logic: a monthly rule based on the 31st simply does not occur in
//! shorter months. This is a documented limitation, not a bug.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use daybook_common::time::local_date;
use daybook_domain::{Frequency, RecurrenceRule};

/// Whether `rule` produces an occurrence on `target`, given the base due
/// instant of the source item.
///
/// `target` is a local calendar day in `tz`; occurrences never predate the
/// base due day, and an inclusive `end_date` cuts the series off.
pub fn occurs_on(rule: &RecurrenceRule, base_due: DateTime<Utc>, target: NaiveDate, tz: Tz) -> bool {
    if let Some(end) = rule.end_date {
        if target > end {
            return false;
        }
    }

    let base_day = local_date(base_due, tz);
    if target < base_day {
        return false;
    }

    let interval = i64::from(rule.interval.max(1));
    match rule.frequency {
        Frequency::Daily => {
            let days = (target - base_day).num_days();
            days % interval == 0
        }
        Frequency::Weekly => {
            let days = (target - base_day).num_days();
            // Same weekday as the base, then every `interval` whole weeks
            days % 7 == 0 && (days / 7) % interval == 0
        }
        Frequency::Monthly => {
            target.day() == base_day.day() && months_between(base_day, target) % interval == 0
        }
        Frequency::Yearly => {
            target.month() == base_day.month()
                && target.day() == base_day.day()
                && i64::from(target.year() - base_day.year()) % interval == 0
        }
    }
}

/// Whether any rule in `rules` produces an occurrence on `target`.
///
/// Logical OR over the list; an empty list never matches.
pub fn occurs_on_any(
    rules: &[RecurrenceRule],
    base_due: DateTime<Utc>,
    target: NaiveDate,
    tz: Tz,
) -> bool {
    rules.iter().any(|rule| occurs_on(rule, base_due, target, tz))
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let from_months = i64::from(from.year()) * 12 + i64::from(from.month0());
    let to_months = i64::from(to.year()) * 12 + i64::from(to.month0());
    to_months - from_months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn due(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        date(y, m, d).and_hms_opt(8, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn months_between_spans_year_boundaries() {
        assert_eq!(months_between(date(2025, 11, 30), date(2026, 2, 28)), 3);
        assert_eq!(months_between(date(2026, 1, 31), date(2026, 1, 31)), 0);
    }

    #[test]
    fn interval_zero_is_treated_as_one() {
        let rule = RecurrenceRule { frequency: Frequency::Daily, interval: 0, end_date: None };
        assert!(occurs_on(&rule, due(2026, 1, 5), date(2026, 1, 6), Tz::UTC));
    }
}
