use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::cache::yearcache::{JsonFileCache, YearCacheStore};
use crate::catalog::resolver::{resolve, CheckOutcome, CheckResult};
use crate::configuration::CatalogConfiguration;
use crate::error::holidayerror::HolidayError;
use crate::holiday::defaultdayrule::DefaultDayRule;
use crate::holiday::holidayentry::{DefaultDateEntry, HolidayEntry};
use crate::scrape::fetcher::{HttpFetcher, PageFetcher};
use crate::scrape::holidaypage::{extract_holidays, SkippedRow};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::localenames::weekday_index;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::year_bounds;

pub const DEFAULT_SUNDAY: &str = "Minggu";
pub const DEFAULT_SUNDAY_DESCRIPTION: &str = "Libur pekanan hari minggu";

/// Where the scraped part of the holiday set came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayOrigin {
    Cache,
    Fetch
}

/// Holidays of one year plus the user's default weekdays and dates.
///
/// Built once, then queried with [`check`](Self::check). Not meant to be
/// shared across threads.
pub struct HolidayCatalog {
    year: i32,
    origin: HolidayOrigin,
    holidays: Vec<HolidayEntry>,
    default_days: Vec<DefaultDayRule>,
    default_dates: Vec<DefaultDateEntry>,
    skipped_rows: Vec<SkippedRow>
}

impl HolidayCatalog {
    /// Builds the catalog for `config.target_year()`.
    ///
    /// With `use_local_cache` and a non-empty snapshot in `cache`, the
    /// snapshot is used and `fetcher` is never called. Otherwise the listing
    /// page is fetched, extracted, and saved to `cache`, replacing any
    /// earlier snapshot of that year.
    pub fn new(
        config: &CatalogConfiguration,
        fetcher: &dyn PageFetcher,
        cache: &dyn YearCacheStore
    ) -> Result<HolidayCatalog, HolidayError> {
        let year = config.target_year();
        let mut catalog = HolidayCatalog {
            year,
            origin: HolidayOrigin::Fetch,
            holidays: Vec::new(),
            default_days: Vec::new(),
            default_dates: Vec::new(),
            skipped_rows: Vec::new()
        };

        if config.include_default_sunday {
            catalog.add_default_day(DEFAULT_SUNDAY, DEFAULT_SUNDAY_DESCRIPTION);
        }
        for day in config.default_days.iter() {
            catalog.add_default_day(&day.day, day.description.as_str());
        }
        for date in config.default_dates.iter() {
            catalog.add_default_date(date.date_start, date.date_end, date.description.as_str())?;
        }

        let cached = if config.use_local_cache {
            cache.load(year)?.filter(|entries| !entries.is_empty())
        } else {
            None
        };

        match cached {
            Some(entries) => {
                info!(year, entries = entries.len(), "using cached holidays");
                catalog.origin = HolidayOrigin::Cache;
                catalog.holidays = entries;
            },
            None => {
                let url = config.holiday_page_url(year);
                let markup = fetcher.fetch(&url)?;
                let extraction = extract_holidays(&markup, year)?;
                info!(
                    year,
                    %url,
                    entries = extraction.entries.len(),
                    skipped = extraction.skipped.len(),
                    "fetched holidays"
                );
                cache.save(year, &extraction.entries)?;
                catalog.holidays = extraction.entries;
                catalog.skipped_rows = extraction.skipped;
            }
        }

        Ok(catalog)
    }

    /// Builds the catalog against the live listing and the JSON file cache
    /// under `config.cache_dir`.
    pub fn open(config: &CatalogConfiguration) -> Result<HolidayCatalog, HolidayError> {
        let fetcher = HttpFetcher::new(config.request_timeout())?;
        let cache = JsonFileCache::new(&config.cache_dir);
        HolidayCatalog::new(config, &fetcher, &cache)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn origin(&self) -> HolidayOrigin {
        self.origin
    }

    /// Registers a weekly holiday. Repeated days accumulate; the earliest
    /// registration is the one reported by [`check`](Self::check).
    pub fn add_default_day(&mut self, day: &str, description: impl Into<String>) {
        let rule = DefaultDayRule::new(day, description);
        if weekday_index(rule.day()).is_none() {
            warn!(day = rule.day(), "default day is not a known weekday name and will never match");
        }
        self.default_days.push(rule);
    }

    /// Registers a one-off holiday, single-day when `date_end` is omitted.
    /// Kept in memory only; never written to the year cache.
    pub fn add_default_date(
        &mut self,
        date_start: NaiveDate,
        date_end: Option<NaiveDate>,
        description: impl Into<String>
    ) -> Result<(), HolidayError> {
        let entry = HolidayEntry::new(date_start, date_end.unwrap_or(date_start), description)?;
        self.default_dates.push(entry);
        Ok(())
    }

    /// Scraped or cached holidays followed by the registered default dates.
    pub fn holidays(&self) -> impl Iterator<Item = &HolidayEntry> + '_ {
        self.holidays.iter().chain(self.default_dates.iter())
    }

    pub fn listed_holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    pub fn default_days(&self) -> &[DefaultDayRule] {
        &self.default_days
    }

    pub fn default_dates(&self) -> &[DefaultDateEntry] {
        &self.default_dates
    }

    /// Rows of the fetched listing that could not be read. Empty when the
    /// holidays came from the cache.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped_rows
    }

    pub fn resolve(&self, date: NaiveDate) -> CheckResult {
        resolve(date, &self.default_days, self.holidays())
    }

    pub fn check(&self, date: NaiveDate, bool_result: bool) -> CheckOutcome {
        let result = self.resolve(date);
        if bool_result {
            CheckOutcome::Status(result.status)
        } else {
            CheckOutcome::Detailed(result)
        }
    }
}

impl HolidayCalendar for HolidayCatalog {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.resolve(d).status
    }

    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate> {
        let Some((first, last)) = year_bounds(year) else {
            return BTreeSet::new();
        };
        let whole_year = RangeOfDates::new(first, last);

        let mut holiday_set: BTreeSet<NaiveDate> = whole_year
            .iter()
            .filter(|d| self.default_days.iter().any(|rule| rule.applies_to(d.weekday())))
            .collect();

        for entry in self.holidays() {
            if let Some(window) = entry.range().intersect(&whole_year) {
                holiday_set.extend(window.iter());
            }
        }

        holiday_set
    }
}
