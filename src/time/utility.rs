use chrono::NaiveDate;

#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` when `month` is not in 1..=12.
pub const fn days_of_month(year: i32, month: u32) -> Option<u32> {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 0 || month > 12 {
        return None;
    }

    if is_leap(year) {
        Some(LEAP_EOM[month as usize])
    } else {
        Some(NO_LEAP_EOM[month as usize])
    }
}

/// First and last day of `year`, if `year` is representable.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((first, last))
}
