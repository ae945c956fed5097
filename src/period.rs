use crate::models::DateRange;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Month,
    Quarter,
    Custom,
}

/// Maps a period selector to the inclusive range it covers around `today`.
///
/// A custom period needs both bounds; otherwise it falls back to the start of
/// the previous month through `today`. Inverted custom bounds pass through.
/// Returns `None` when a bound would fall outside the representable calendar.
pub fn resolve_range(
    period: Period,
    today: NaiveDate,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
) -> Option<DateRange> {
    let (start, end) = match period {
        Period::Week => {
            let start = week_start(today)?;
            (start, start.checked_add_signed(Duration::days(6))?)
        }
        Period::Month => month_bounds(today)?,
        Period::Quarter => {
            let first_month = (today.month0() / 3) * 3 + 1;
            let start = today.with_day(1)?.with_month(first_month)?;
            (start, last_day_of_month(start.checked_add_months(Months::new(2))?)?)
        }
        Period::Custom => match (custom_start, custom_end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                let start = today.with_day(1)?.checked_sub_months(Months::new(1))?;
                (start, today)
            }
        },
    };

    Some(DateRange::days(start, end))
}

fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))
}

fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    Some((date.with_day(1)?, last_day_of_month(date)?))
}

fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(1))?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds(range: Option<DateRange>) -> (NaiveDate, NaiveDate) {
        let range = range.expect("range in calendar");
        (range.start_day(), range.end_day())
    }

    #[test]
    fn week_runs_monday_to_sunday() {
        // 2025-05-14 is a Wednesday
        let range = resolve_range(Period::Week, day(2025, 5, 14), None, None);
        assert_eq!(bounds(range), (day(2025, 5, 12), day(2025, 5, 18)));

        let sunday = resolve_range(Period::Week, day(2025, 5, 18), None, None);
        assert_eq!(bounds(sunday), (day(2025, 5, 12), day(2025, 5, 18)));
    }

    #[test]
    fn month_covers_leap_february() {
        let range = resolve_range(Period::Month, day(2024, 2, 10), None, None);
        assert_eq!(bounds(range), (day(2024, 2, 1), day(2024, 2, 29)));
    }

    #[test]
    fn quarter_boundaries() {
        let q2 = resolve_range(Period::Quarter, day(2025, 5, 31), None, None);
        assert_eq!(bounds(q2), (day(2025, 4, 1), day(2025, 6, 30)));

        let q4 = resolve_range(Period::Quarter, day(2025, 12, 31), None, None);
        assert_eq!(bounds(q4), (day(2025, 10, 1), day(2025, 12, 31)));
    }

    #[test]
    fn custom_uses_both_bounds() {
        let range = resolve_range(
            Period::Custom,
            day(2025, 5, 14),
            Some(day(2025, 1, 3)),
            Some(day(2025, 2, 9)),
        );
        assert_eq!(bounds(range), (day(2025, 1, 3), day(2025, 2, 9)));
    }

    #[test]
    fn custom_without_both_bounds_falls_back_to_previous_month() {
        let range = resolve_range(Period::Custom, day(2025, 1, 14), Some(day(2024, 6, 1)), None);
        assert_eq!(bounds(range), (day(2024, 12, 1), day(2025, 1, 14)));
    }

    #[test]
    fn period_parses_lowercase() {
        let period: Period = serde_json::from_str("\"quarter\"").unwrap();
        assert_eq!(period, Period::Quarter);
    }

    #[test]
    fn calendar_edges_yield_none() {
        assert_eq!(resolve_range(Period::Week, NaiveDate::MAX, None, None), None);
        assert_eq!(resolve_range(Period::Month, NaiveDate::MAX, None, None), None);
        assert_eq!(resolve_range(Period::Quarter, NaiveDate::MAX, None, None), None);
        assert_eq!(resolve_range(Period::Custom, NaiveDate::MIN, None, None), None);
    }

    #[test]
    fn custom_bounds_at_calendar_edges_pass_through() {
        let range = resolve_range(
            Period::Custom,
            NaiveDate::MAX,
            Some(NaiveDate::MIN),
            Some(NaiveDate::MAX),
        );
        assert_eq!(bounds(range), (NaiveDate::MIN, NaiveDate::MAX));
    }
}
