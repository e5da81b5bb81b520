//! Decides whether a date is a holiday.
//!
//! Precedence, first match wins:
//! 1. default weekday rules, in registration order;
//! 2. holiday entries, in the order given (scraped or cached first, then
//!    user-registered dates), matched by inclusive window containment;
//! 3. otherwise not a holiday.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::holiday::defaultdayrule::DefaultDayRule;
use crate::holiday::holidayentry::HolidayEntry;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HolidayMatch {
    pub date: NaiveDate,
    pub description: Option<String>
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub status: bool,
    pub result: HolidayMatch
}

impl CheckResult {
    fn holiday(date: NaiveDate, description: &str) -> CheckResult {
        CheckResult {
            status: true,
            result: HolidayMatch { date, description: Some(description.to_owned()) }
        }
    }

    fn working_day(date: NaiveDate) -> CheckResult {
        CheckResult {
            status: false,
            result: HolidayMatch { date, description: None }
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.result.description.as_deref()
    }
}

/// Either the bare status or the full result, as chosen by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Status(bool),
    Detailed(CheckResult)
}

impl CheckOutcome {
    pub fn is_holiday(&self) -> bool {
        match self {
            CheckOutcome::Status(status) => *status,
            CheckOutcome::Detailed(result) => result.status
        }
    }
}

pub fn resolve<'a, I>(date: NaiveDate, default_days: &[DefaultDayRule], holidays: I) -> CheckResult
where
    I: IntoIterator<Item = &'a HolidayEntry>
{
    let weekday = date.weekday();
    if let Some(rule) = default_days.iter().find(|rule| rule.applies_to(weekday)) {
        return CheckResult::holiday(date, rule.description());
    }

    holidays
        .into_iter()
        .find(|entry| entry.contains(date))
        .map_or_else(
            || CheckResult::working_day(date),
            |entry| CheckResult::holiday(date, entry.description())
        )
}
