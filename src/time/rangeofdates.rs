use chrono::{
    Days,
    NaiveDate
};

/// Inclusive window of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    /// Builds the window spanned by `d1` and `d2`, whichever order they come in.
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates { start_date: d2, end_date: d1 }
        } else {
            RangeOfDates { start_date: d1, end_date: d2 }
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days in the window, both ends counted.
    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    #[inline]
    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Part of the window that falls inside `other`, if any.
    pub fn intersect(&self, other: &RangeOfDates) -> Option<RangeOfDates> {
        let start_date = self.start_date.max(other.start_date);
        let end_date = self.end_date.min(other.end_date);
        if start_date > end_date {
            None
        } else {
            Some(RangeOfDates { start_date, end_date })
        }
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            range_of_dates: *self,
            index: 0,
        }
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    range_of_dates: RangeOfDates,
    index: usize,
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let d = self.range_of_dates.start_date.checked_add_days(Days::new(self.index as u64))?;
            self.index += 1;
            Some(d)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn orders_its_ends() {
        let range = RangeOfDates::new(ymd(2024, 1, 3), ymd(2024, 1, 1));
        assert_eq!(range.start_date(), ymd(2024, 1, 1));
        assert_eq!(range.end_date(), ymd(2024, 1, 3));
    }

    #[test]
    fn containment_is_inclusive() {
        let range = RangeOfDates::new(ymd(2024, 4, 8), ymd(2024, 4, 15));
        assert!(range.contain(ymd(2024, 4, 8)));
        assert!(range.contain(ymd(2024, 4, 15)));
        assert!(!range.contain(ymd(2024, 4, 7)));
        assert!(!range.contain(ymd(2024, 4, 16)));
    }

    #[test]
    fn expands_across_month_end() {
        let range = RangeOfDates::new(ymd(2024, 2, 28), ymd(2024, 3, 1));
        assert_eq!(range.len(), 3);
        let days: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(days, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn single_day_window() {
        let range = RangeOfDates::new(ymd(2024, 8, 17), ymd(2024, 8, 17));
        assert_eq!(range.len(), 1);
        assert_eq!(range.into_iter().collect::<Vec<_>>(), vec![ymd(2024, 8, 17)]);
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let year_end = RangeOfDates::new(ymd(2024, 12, 30), ymd(2025, 1, 2));
        let year_2025 = RangeOfDates::new(ymd(2025, 1, 1), ymd(2025, 12, 31));
        let clipped = year_end.intersect(&year_2025).unwrap();
        assert_eq!(clipped, RangeOfDates::new(ymd(2025, 1, 1), ymd(2025, 1, 2)));

        let disjoint = RangeOfDates::new(ymd(2024, 6, 1), ymd(2024, 6, 1));
        assert!(disjoint.intersect(&year_2025).is_none());
    }
}
