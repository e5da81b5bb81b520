// ── yearcache.rs ────────────────────────────────────────────────────────────

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::holidayerror::HolidayError;
use crate::holiday::holidayentry::HolidayEntry;

/// Per-year snapshot of scraped holidays.
///
/// `load` answers `Ok(None)` when no snapshot exists for the year; that is a
/// cache miss, not a failure. A snapshot that exists but cannot be read is an
/// error. `save` replaces whatever snapshot the year had.
pub trait YearCacheStore {
    fn load(&self, year: i32) -> Result<Option<Vec<HolidayEntry>>, HolidayError>;

    fn save(&self, year: i32, entries: &[HolidayEntry]) -> Result<(), HolidayError>;
}

// ── JSON files: <dir>/holidays-<year>.json ──────────────────────────────────

pub struct JsonFileCache {
    dir: PathBuf
}

impl JsonFileCache {
    pub fn new(dir: impl Into<PathBuf>) -> JsonFileCache {
        JsonFileCache { dir: dir.into() }
    }

    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("holidays-{}.json", year))
    }
}

impl YearCacheStore for JsonFileCache {
    fn load(&self, year: i32) -> Result<Option<Vec<HolidayEntry>>, HolidayError> {
        let path = self.path_for(year);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no holiday cache for year");
                return Ok(None);
            },
            Err(source) => return Err(HolidayError::CacheRead { path, source })
        };

        let entries: Vec<HolidayEntry> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| HolidayError::CacheCorrupt { path: path.clone(), source })?;
        debug!(path = %path.display(), entries = entries.len(), "loaded holiday cache");
        Ok(Some(entries))
    }

    /// Writes to a temporary file next to the target and renames it into
    /// place, so a crash mid-write leaves the previous snapshot intact.
    fn save(&self, year: i32, entries: &[HolidayEntry]) -> Result<(), HolidayError> {
        let path = self.path_for(year);
        let write_error = |source: std::io::Error| HolidayError::CacheWrite { path: path.clone(), source };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(write_error)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, entries)
                .map_err(|source| HolidayError::CacheEncode { path: path.clone(), source })?;
            writer.write_all(b"\n").map_err(write_error)?;
            writer.flush().map_err(write_error)?;
        }
        temp.persist(&path).map_err(|err| write_error(err.error))?;

        info!(path = %path.display(), entries = entries.len(), "saved holiday cache");
        Ok(())
    }
}

// ── In-process: RefCell ─────────────────────────────────────────────────────

/// Keeps snapshots in memory for the lifetime of the value. Single-threaded.
#[derive(Default)]
pub struct MemoryYearCache {
    snapshots: RefCell<HashMap<i32, Vec<HolidayEntry>>>
}

impl MemoryYearCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(year: i32, entries: Vec<HolidayEntry>) -> Self {
        let cache = Self::new();
        cache.snapshots.borrow_mut().insert(year, entries);
        cache
    }

    pub fn snapshot(&self, year: i32) -> Option<Vec<HolidayEntry>> {
        self.snapshots.borrow().get(&year).cloned()
    }
}

impl YearCacheStore for MemoryYearCache {
    fn load(&self, year: i32) -> Result<Option<Vec<HolidayEntry>>, HolidayError> {
        Ok(self.snapshot(year))
    }

    fn save(&self, year: i32, entries: &[HolidayEntry]) -> Result<(), HolidayError> {
        self.snapshots.borrow_mut().insert(year, entries.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<HolidayEntry> {
        vec![
            HolidayEntry::single(ymd(2024, 1, 1), "Tahun Baru Masehi"),
            HolidayEntry::new(ymd(2024, 4, 8), ymd(2024, 4, 15), "Cuti Bersama Idul Fitri").unwrap(),
        ]
    }

    #[test]
    fn missing_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());
        assert_eq!(cache.load(2024).unwrap(), None);
    }

    #[test]
    fn save_then_load_returns_same_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("locals"));
        cache.save(2024, &sample()).unwrap();
        assert_eq!(cache.load(2024).unwrap(), Some(sample()));
        assert_eq!(cache.load(2025).unwrap(), None);
    }

    #[test]
    fn file_keeps_iso_date_strings() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());
        cache.save(2024, &sample()[..1]).unwrap();

        let text = fs::read_to_string(cache.path_for(2024)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json, serde_json::json!([
            { "dateStart": "2024-01-01", "dateEnd": "2024-01-01", "description": "Tahun Baru Masehi" }
        ]));
        assert!(text.contains('\n'));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());
        cache.save(2024, &sample()).unwrap();
        cache.save(2024, &sample()[1..]).unwrap();
        assert_eq!(cache.load(2024).unwrap(), Some(sample()[1..].to_vec()));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());
        fs::write(cache.path_for(2024), "[{\"dateStart\": ").unwrap();
        assert!(matches!(cache.load(2024), Err(HolidayError::CacheCorrupt { .. })));
    }

    #[test]
    fn reads_legacy_single_date_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());
        fs::write(
            cache.path_for(2023),
            r#"[{"date": "2023-08-17", "description": "Hari Kemerdekaan"}]"#
        ).unwrap();
        assert_eq!(
            cache.load(2023).unwrap(),
            Some(vec![HolidayEntry::single(ymd(2023, 8, 17), "Hari Kemerdekaan")])
        );
    }

    #[test]
    fn memory_cache_round_trip() {
        let cache = MemoryYearCache::new();
        assert_eq!(cache.load(2024).unwrap(), None);
        cache.save(2024, &sample()).unwrap();
        assert_eq!(cache.load(2024).unwrap(), Some(sample()));
    }
}
