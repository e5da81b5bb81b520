use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

const ONE_DAY: Days = Days::new(1);

/// Longest run of consecutive holidays searched through.
const SEARCH_LIMIT: u32 = 366;

pub trait HolidayCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Every holiday date falling in `year`, in ascending order.
    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// First business day strictly after `d`. Gives up after a year of
    /// holidays, which only happens when every weekday is a default day.
    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        let mut current = d;
        for _ in 0..SEARCH_LIMIT {
            current = current.checked_add_days(ONE_DAY)?;
            if self.is_business_day(current) {
                return Some(current);
            }
        }
        None
    }

    /// Last business day strictly before `d`, with the same one-year bound.
    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        let mut current = d;
        for _ in 0..SEARCH_LIMIT {
            current = current.checked_sub_days(ONE_DAY)?;
            if self.is_business_day(current) {
                return Some(current);
            }
        }
        None
    }

    /// Business days in `[start, end]`, both ends counted.
    fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> usize {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .count()
    }
}
