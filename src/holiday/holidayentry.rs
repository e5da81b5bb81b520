use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::error::holidayerror::InvalidRangeError;
use crate::time::rangeofdates::{RangeOfDates, RangeOfDatesIterator};

/// A dated or date-ranged holiday with its description.
///
/// Ranges stay unexpanded: a five-day collective leave is one entry whose
/// window covers all five days. `date_start <= date_end` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HolidayEntryRecord")]
pub struct HolidayEntry {
    date_start: NaiveDate,
    date_end: NaiveDate,
    description: String
}

/// User-registered holiday. Same shape as a scraped entry, never cached.
pub type DefaultDateEntry = HolidayEntry;

impl HolidayEntry {
    pub fn new(
        date_start: NaiveDate,
        date_end: NaiveDate,
        description: impl Into<String>
    ) -> Result<HolidayEntry, InvalidRangeError> {
        if date_start > date_end {
            return Err(InvalidRangeError { start: date_start, end: date_end });
        }
        Ok(HolidayEntry { date_start, date_end, description: description.into() })
    }

    pub fn single(date: NaiveDate, description: impl Into<String>) -> HolidayEntry {
        HolidayEntry { date_start: date, date_end: date, description: description.into() }
    }

    pub fn date_start(&self) -> NaiveDate {
        self.date_start
    }

    pub fn date_end(&self) -> NaiveDate {
        self.date_end
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn range(&self) -> RangeOfDates {
        RangeOfDates::new(self.date_start, self.date_end)
    }

    #[inline]
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.range().contain(d)
    }

    pub fn day_count(&self) -> usize {
        self.range().len()
    }

    pub fn days(&self) -> RangeOfDatesIterator {
        self.range().iter()
    }
}

/// On-disk shapes accepted when reading a year cache: the ranged record and
/// the older one-date-per-entry record.
#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayEntryRecord {
    #[serde(rename_all = "camelCase")]
    Range {
        date_start: NaiveDate,
        date_end: NaiveDate,
        description: String
    },
    Single {
        date: NaiveDate,
        description: String
    }
}

impl TryFrom<HolidayEntryRecord> for HolidayEntry {
    type Error = InvalidRangeError;

    fn try_from(record: HolidayEntryRecord) -> Result<Self, Self::Error> {
        match record {
            HolidayEntryRecord::Range { date_start, date_end, description } => {
                HolidayEntry::new(date_start, date_end, description)
            },
            HolidayEntryRecord::Single { date, description } => {
                Ok(HolidayEntry::single(date, description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_window() {
        let err = HolidayEntry::new(ymd(2024, 1, 3), ymd(2024, 1, 1), "x").unwrap_err();
        assert_eq!(err.start, ymd(2024, 1, 3));
        assert_eq!(err.end, ymd(2024, 1, 1));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let entry = HolidayEntry::new(ymd(2024, 4, 8), ymd(2024, 4, 15), "Cuti Bersama Idul Fitri").unwrap();
        assert!(entry.contains(ymd(2024, 4, 15)));
        assert!(!entry.contains(ymd(2024, 4, 16)));
        assert_eq!(entry.day_count(), 8);
        assert_eq!(entry.days().last(), Some(ymd(2024, 4, 15)));
    }

    #[test]
    fn serializes_with_camel_case_iso_dates() {
        let entry = HolidayEntry::single(ymd(2024, 8, 17), "Hari Kemerdekaan");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({
            "dateStart": "2024-08-17",
            "dateEnd": "2024-08-17",
            "description": "Hari Kemerdekaan"
        }));
    }

    #[test]
    fn reads_legacy_single_date_record() {
        let entry: HolidayEntry = serde_json::from_str(
            r#"{"date": "2024-12-25", "description": "Hari Raya Natal"}"#
        ).unwrap();
        assert_eq!(entry, HolidayEntry::single(ymd(2024, 12, 25), "Hari Raya Natal"));
    }

    #[test]
    fn refuses_inverted_record() {
        let result: Result<HolidayEntry, _> = serde_json::from_str(
            r#"{"dateStart": "2024-01-03", "dateEnd": "2024-01-01", "description": "x"}"#
        );
        assert!(result.is_err());
    }
}
