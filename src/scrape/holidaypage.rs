//! Reads the holiday table out of a listing page and runs every data row
//! through the row extractor.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::holidayerror::{HolidayError, RowError};
use crate::holiday::holidayentry::HolidayEntry;
use crate::scrape::rowextractor::extract_row;

pub const ROW_SELECTOR: &str = "table.publicholidays tbody tr";

/// Class markers the listing alternates on its data rows. Header and
/// separator rows carry neither.
pub const DATA_ROW_MARKERS: [&str; 2] = ["even", "odd"];

/// One `<tr>` of the holiday table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayRow {
    pub marker: String,
    pub cells: Vec<String>
}

impl HolidayRow {
    pub fn is_data_row(&self) -> bool {
        let marker = self.marker.trim();
        DATA_ROW_MARKERS.iter().any(|m| *m == marker)
    }
}

/// A data row the extractor could not read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// Position among all rows of the table.
    pub index: usize,
    pub cells: Vec<String>,
    pub error: RowError
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub entries: Vec<HolidayEntry>,
    pub skipped: Vec<SkippedRow>
}

/// All rows of the holiday table, in document order, with their `<td>` texts.
pub fn parse_rows(markup: &str) -> Result<Vec<HolidayRow>, HolidayError> {
    let selector = Selector::parse(ROW_SELECTOR).map_err(|err| HolidayError::Selector {
        selector: ROW_SELECTOR,
        message: format!("{err:?}")
    })?;

    let document = Html::parse_document(markup);
    let rows: Vec<HolidayRow> = document
        .select(&selector)
        .map(|row| {
            let marker = row.value().attr("class").unwrap_or_default().trim().to_owned();
            let cells = row
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| cell.value().name() == "td")
                .map(|cell| cell.text().collect::<String>())
                .collect();
            HolidayRow { marker, cells }
        })
        .collect();

    debug!(rows = rows.len(), "parsed holiday table");
    Ok(rows)
}

/// Extracts every data row. Rows that fail are logged and reported in
/// [`Extraction::skipped`]; they never stop the pass.
pub fn extract_rows(rows: &[HolidayRow], year: i32) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, row) in rows.iter().enumerate() {
        if !row.is_data_row() {
            continue;
        }
        match extract_row(&row.cells, year) {
            Ok(entry) => extraction.entries.push(entry),
            Err(error) => {
                warn!(row = index, cells = ?row.cells, %error, "skipping holiday row");
                extraction.skipped.push(SkippedRow {
                    index,
                    cells: row.cells.clone(),
                    error
                });
            }
        }
    }

    extraction
}

pub fn extract_holidays(markup: &str, year: i32) -> Result<Extraction, HolidayError> {
    let rows = parse_rows(markup)?;
    Ok(extract_rows(&rows, year))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="publicholidays phgtable">
          <thead><tr><th>Tanggal</th><th>Hari</th><th>Hari Libur</th></tr></thead>
          <tbody>
            <tr class="even"><td>1 Januari</td><td>Senin</td><td><a href="/id/new-year">Tahun Baru Masehi</a> </td></tr>
            <tr class="odd"><td>8 April to 10 April</td><td>Senin</td><td> Cuti Bersama Idul Fitri</td></tr>
            <tr class="ad"><td colspan="3">advert</td></tr>
            <tr class="even"><td>1 Mei to 2 Mei to 3 Mei</td><td>Rabu</td><td>Rusak</td></tr>
            <tr class=" odd "><td>25 Desember</td><td>Rabu</td><td>Hari Raya Natal</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reads_rows_with_markers_and_cell_text() {
        let rows = parse_rows(PAGE).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].marker, "even");
        assert_eq!(rows[0].cells[2], "Tahun Baru Masehi ");
        assert_eq!(rows[2].marker, "ad");
        assert!(!rows[2].is_data_row());
        assert!(rows[4].is_data_row());
    }

    #[test]
    fn malformed_row_does_not_disturb_its_neighbours() {
        let extraction = extract_holidays(PAGE, 2024).unwrap();
        assert_eq!(extraction.entries, vec![
            HolidayEntry::single(ymd(2024, 1, 1), "Tahun Baru Masehi"),
            HolidayEntry::new(ymd(2024, 4, 8), ymd(2024, 4, 10), "Cuti Bersama Idul Fitri").unwrap(),
            HolidayEntry::single(ymd(2024, 12, 25), "Hari Raya Natal"),
        ]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].index, 3);
        assert!(matches!(extraction.skipped[0].error, RowError::Malformed(_)));
    }

    #[test]
    fn page_without_table_yields_nothing() {
        let extraction = extract_holidays("<html><body><p>maintenance</p></body></html>", 2024).unwrap();
        assert!(extraction.entries.is_empty());
        assert!(extraction.skipped.is_empty());
    }
}
