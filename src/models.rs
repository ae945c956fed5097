use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Office,
    Home,
    TimeOff,
}

/// One record for one calendar day. Only the date part of `date` matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub date: NaiveDateTime,
    pub location: Location,
}

impl WorkEntry {
    pub fn new(date: NaiveDate, location: Location) -> Self {
        Self {
            id: None,
            user_id: None,
            date: date.and_time(NaiveTime::MIN),
            location,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// Inclusive on both ends, compared at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn days(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_day() <= day && day <= self.end_day()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsResult {
    pub office_count: u32,
    pub home_count: u32,
    pub time_off_count: u32,
    pub total_work_days_excluding_time_off: u32,
    pub office_percentage: f64,
    pub home_percentage: f64,
    pub week_end_entries_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: u64,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub entries: BTreeMap<NaiveDate, StoredEntry>,
}

impl AppData {
    pub fn work_entries(&self, user_id: &str) -> Vec<WorkEntry> {
        self.entries
            .iter()
            .map(|(date, stored)| WorkEntry {
                id: Some(stored.id),
                user_id: Some(user_id.to_string()),
                ..WorkEntry::new(*date, stored.location)
            })
            .collect()
    }

    /// Inserts or relocates the entry for each day. Returns the touched entries.
    pub fn save(&mut self, dates: &[NaiveDate], location: Location) -> Vec<(NaiveDate, StoredEntry)> {
        let mut saved = Vec::with_capacity(dates.len());
        for date in dates {
            let entry = match self.entries.get_mut(date) {
                Some(existing) => {
                    existing.location = location;
                    existing.clone()
                }
                None => {
                    self.next_id = self.next_id.saturating_add(1);
                    let stored = StoredEntry {
                        id: self.next_id,
                        location,
                    };
                    self.entries.insert(*date, stored.clone());
                    stored
                }
            };
            saved.push((*date, entry));
        }
        saved
    }

    pub fn delete(&mut self, dates: &[NaiveDate]) -> usize {
        dates
            .iter()
            .filter(|date| self.entries.remove(date).is_some())
            .count()
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveEntriesRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub location: Location,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEntriesRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteEntriesResponse {
    pub deleted: usize,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub period: crate::period::Period,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub period: crate::period::Period,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub stats: StatsResult,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRecord {
    pub date: NaiveDate,
    pub weekday: String,
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_keeps_one_entry_per_day() {
        let mut data = AppData::default();
        data.save(&[day(2025, 5, 1)], Location::Home);
        let saved = data.save(&[day(2025, 5, 1), day(2025, 5, 2)], Location::Office);

        assert_eq!(data.entries.len(), 2);
        assert_eq!(saved[0].1.id, 1);
        assert_eq!(saved[0].1.location, Location::Office);
        assert_eq!(saved[1].1.id, 2);
    }

    #[test]
    fn delete_counts_only_existing_days() {
        let mut data = AppData::default();
        data.save(&[day(2025, 5, 1)], Location::Home);
        assert_eq!(data.delete(&[day(2025, 5, 1), day(2025, 5, 2)]), 1);
        assert!(data.entries.is_empty());
    }

    #[test]
    fn location_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&Location::TimeOff).unwrap();
        assert_eq!(json, "\"time_off\"");
    }
}
