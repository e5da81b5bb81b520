//! Indonesian weekday and month names used by the holiday listing.
//!
//! Weekdays are indexed 1 (Senin, Monday) through 7 (Minggu, Sunday) and
//! months 1 (Januari) through 12 (Desember), matching ISO numbering.

use chrono::Weekday;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"
];

pub const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember"
];

pub fn weekday_name(index: u32) -> Option<&'static str> {
    match index {
        1..=7 => Some(WEEKDAY_NAMES[(index - 1) as usize]),
        _ => None
    }
}

pub fn weekday_index(name: &str) -> Option<u32> {
    WEEKDAY_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

#[inline]
pub fn name_of_weekday(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

pub fn month_name(index: u32) -> Option<&'static str> {
    match index {
        1..=12 => Some(MONTH_NAMES[(index - 1) as usize]),
        _ => None
    }
}

pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

/// First letter upper case, the rest lower case ("mINGGU" -> "Minggu").
pub fn canonical_day_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
