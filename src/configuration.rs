use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use crate::error::holidayerror::HolidayError;
use crate::scrape::fetcher::holiday_page_url;

pub const DEFAULT_BASE_URL: &str = "https://publicholidays.co.id/id";
pub const DEFAULT_CACHE_DIR: &str = "locals";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DefaultDayJsonProp {
    pub day: String,
    pub description: String
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DefaultDateJsonProp {
    pub date_start: NaiveDate,
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
    pub description: String
}

/// Settings for building a [`HolidayCatalog`](crate::catalog::holidaycatalog::HolidayCatalog).
///
/// Every field has a default, so `{}` is a valid configuration file. All keys,
/// including those of `default_dates` entries, are snake_case:
///
/// ```json
/// {
///     "year": 2024,
///     "use_local_cache": true,
///     "cache_dir": "locals",
///     "default_days": [{ "day": "Sabtu", "description": "Libur Sabtu" }],
///     "default_dates": [{ "date_start": "2024-06-17", "description": "Cuti kantor" }]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfiguration {
    pub base_url: String,
    pub cache_dir: PathBuf,
    pub year: Option<i32>,
    pub use_local_cache: bool,
    pub include_default_sunday: bool,
    pub request_timeout_secs: u64,
    pub default_days: Vec<DefaultDayJsonProp>,
    pub default_dates: Vec<DefaultDateJsonProp>
}

impl Default for CatalogConfiguration {
    fn default() -> Self {
        CatalogConfiguration {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            year: None,
            use_local_cache: false,
            include_default_sunday: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_days: Vec::new(),
            default_dates: Vec::new()
        }
    }
}

impl CatalogConfiguration {
    pub fn new() -> CatalogConfiguration {
        CatalogConfiguration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<CatalogConfiguration, HolidayError> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .map_err(|source| HolidayError::ConfigRead { path: path.to_owned(), source })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|source| HolidayError::ConfigParse { path: path.to_owned(), source })
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_local_cache(mut self, use_local_cache: bool) -> Self {
        self.use_local_cache = use_local_cache;
        self
    }

    pub fn with_default_sunday(mut self, include_default_sunday: bool) -> Self {
        self.include_default_sunday = include_default_sunday;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Configured year, or the current one on the local clock.
    pub fn target_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().date_naive().year())
    }

    pub fn holiday_page_url(&self, year: i32) -> String {
        holiday_page_url(&self.base_url, year)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: CatalogConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfiguration::default());
        assert!(config.include_default_sunday);
        assert!(!config.use_local_cache);
        assert_eq!(config.holiday_page_url(2024), "https://publicholidays.co.id/id/2024-dates");
    }

    #[test]
    fn reads_file_with_defaults_registered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harilibur.json");
        fs::write(&path, r#"{
            "year": 2024,
            "use_local_cache": true,
            "include_default_sunday": false,
            "default_days": [{ "day": "sabtu", "description": "Libur Sabtu" }],
            "default_dates": [
                { "date_start": "2024-06-17", "description": "Cuti kantor" },
                { "date_start": "2024-12-24", "date_end": "2024-12-26", "description": "Libur akhir tahun" }
            ]
        }"#).unwrap();

        let config = CatalogConfiguration::from_reader(&path).unwrap();
        assert_eq!(config.target_year(), 2024);
        assert!(config.use_local_cache);
        assert!(!config.include_default_sunday);
        assert_eq!(config.default_days[0].day, "sabtu");
        assert_eq!(config.default_dates[0].date_end, None);
        assert_eq!(config.default_dates[1].date_end, NaiveDate::from_ymd_opt(2024, 12, 26));
        assert_eq!(config.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
    }

    #[test]
    fn missing_and_invalid_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = CatalogConfiguration::from_reader(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(HolidayError::ConfigRead { .. })));

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "year": "next" }"#).unwrap();
        let invalid = CatalogConfiguration::from_reader(&path);
        assert!(matches!(invalid, Err(HolidayError::ConfigParse { .. })));
    }

    #[test]
    fn default_date_keys_share_the_file_casing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camel.json");
        fs::write(&path, r#"{ "default_dates": [{ "dateStart": "2024-06-17", "description": "x" }] }"#).unwrap();

        let camel = CatalogConfiguration::from_reader(&path);
        assert!(matches!(camel, Err(HolidayError::ConfigParse { .. })));
    }
}
