//! Turns one listing row into a [`HolidayEntry`].
//!
//! A data row has three cells: the date text, the weekday name (unused) and
//! the description. The date text is either `"<day> <month>"` or two such
//! dates joined by `" to "`, e.g. `"8 April to 12 April"`.

use chrono::NaiveDate;

use crate::error::holidayerror::{ParseDateError, RowError};
use crate::holiday::holidayentry::HolidayEntry;
use crate::time::localenames::month_index;
use crate::time::utility::days_of_month;

pub const RANGE_SEPARATOR: &str = " to ";

const DATE_CELL: usize = 0;
const DESCRIPTION_CELL: usize = 2;

pub fn extract_row<S: AsRef<str>>(cells: &[S], year: i32) -> Result<HolidayEntry, RowError> {
    if cells.len() <= DESCRIPTION_CELL {
        return Err(RowError::Malformed(format!("expected 3 cells, found {}", cells.len())));
    }

    let date_text = cells[DATE_CELL].as_ref();
    let description = cells[DESCRIPTION_CELL].as_ref().trim();

    let parts: Vec<&str> = date_text.split(RANGE_SEPARATOR).collect();
    let (date_start, date_end) = match parts.as_slice() {
        [single] => {
            let d = parse_day_month(single, year)?;
            (d, d)
        },
        [start, end] => (parse_day_month(start, year)?, parse_day_month(end, year)?),
        _ => {
            return Err(RowError::Malformed(format!(
                "date cell '{}' splits into {} parts", date_text.trim(), parts.len()
            )));
        }
    };

    Ok(HolidayEntry::new(date_start, date_end, description)?)
}

/// Parses `"<day> <month name>"` within `year`. Tokens after the month are ignored.
pub fn parse_day_month(text: &str, year: i32) -> Result<NaiveDate, ParseDateError> {
    let mut tokens = text.split_whitespace();
    let day_text = tokens.next().unwrap_or_default();
    let month_text = tokens
        .next()
        .ok_or_else(|| ParseDateError::MissingMonth(text.trim().to_owned()))?;

    let month = month_index(month_text)
        .ok_or_else(|| ParseDateError::UnknownMonth(month_text.to_owned()))?;
    let day: u32 = day_text
        .parse()
        .map_err(|source| ParseDateError::InvalidDay { text: day_text.to_owned(), source })?;

    let out_of_range = ParseDateError::DayOutOfRange { year, month, day };
    match days_of_month(year, month) {
        Some(last) if day >= 1 && day <= last => {
            NaiveDate::from_ymd_opt(year, month, day).ok_or(out_of_range)
        },
        _ => Err(out_of_range)
    }
}
