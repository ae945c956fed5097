use crate::models::{RecentRecord, WorkEntry};
use crate::stats::is_weekend;
use chrono::{Datelike, NaiveDate};

/// Lists every weekday of `selected`'s month with the location recorded for it.
pub fn recent_records(selected: NaiveDate, entries: &[WorkEntry]) -> Vec<RecentRecord> {
    let Some(first) = selected.with_day(1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .filter(|date| !is_weekend(*date))
        .map(|date| RecentRecord {
            date,
            weekday: date.format("%A").to_string(),
            location: entries
                .iter()
                .find(|entry| entry.day() == date)
                .map(|entry| entry.location),
        })
        .collect()
}

/// Days from `start` to `end` inclusive, optionally skipping weekends.
pub fn expand_days(start: NaiveDate, end: NaiveDate, weekdays_only: bool) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !weekdays_only || !is_weekend(*date))
        .collect()
}
