use crate::models::{DateRange, Location, StatsResult, WorkEntry};
use chrono::{Datelike, NaiveDate, Weekday};

/// Aggregates `entries` over `range` into counts and percentages.
///
/// Weekend office/home entries count towards `office_count`/`home_count` but
/// never towards `total_work_days_excluding_time_off`, so percentages can
/// exceed a naive share and need not sum to 100.
pub fn compute_stats(entries: &[WorkEntry], range: &DateRange) -> StatsResult {
    let mut stats = StatsResult::default();

    for entry in entries.iter().filter(|entry| range.contains(entry.day())) {
        let weekend = is_weekend(entry.day());
        match entry.location {
            Location::TimeOff => {
                stats.time_off_count += 1;
                continue;
            }
            Location::Office => stats.office_count += 1,
            Location::Home => stats.home_count += 1,
        }

        if weekend {
            stats.week_end_entries_count += 1;
        } else {
            stats.total_work_days_excluding_time_off += 1;
        }
    }

    stats.office_percentage = percentage(stats.office_count, stats.total_work_days_excluding_time_off);
    stats.home_percentage = percentage(stats.home_count, stats.total_work_days_excluding_time_off);
    stats
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(count) / f64::from(total) * 100.0)
}

/// One-decimal rounding of the exact binary value, ties going up.
/// Exact ties only occur when `value * 4` is an odd integer.
fn round_to_tenth(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return (value * 10.0 + 0.5).floor() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
