// Date utility functions
// Calendar arithmetic shared by the grid generator and the picker controller

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days per month in a common year, indexed by 0-based month.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month.
///
/// # Arguments
/// * `year` - Full year (e.g. 2024)
/// * `month` - 0-based month (0 = January); values past 11 wrap
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = (month % 12) as usize;
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month]
    }
}

/// Roll a signed month of any magnitude into `(year, 0..=11)`.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (
        year + month.div_euclid(12),
        month.rem_euclid(12) as u32,
    )
}

/// First day of a 0-based month, if chrono can represent it.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// Last day of a 0-based month, if chrono can represent it.
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month + 1, days_in_month(year, month))
}

/// Number of leading cells before day 1 in a grid whose first column is
/// `first_day` (0 = Sunday, 1 = Monday, ...).
pub fn weekday_offset(year: i32, month: u32, first_day: u8) -> u32 {
    let Some(first) = first_of_month(year, month) else {
        return 0;
    };
    let weekday = first.weekday().num_days_from_sunday() as i64;
    ((weekday - first_day as i64).rem_euclid(7)) as u32
}

/// ISO week number of the Thursday inside a 7-day row starting at `row_start`.
///
/// Every run of seven consecutive days holds exactly one Thursday, so rows
/// starting on any weekday get a stable number; Monday-first rows match ISO
/// numbering exactly.
pub fn row_week_number(row_start: NaiveDate) -> u32 {
    let thursday = Weekday::Thu.num_days_from_sunday() as i64;
    let start = row_start.weekday().num_days_from_sunday() as i64;
    let offset = (thursday - start).rem_euclid(7);
    shift_days(row_start, offset).iso_week().week()
}

/// Move a date by a signed number of days, saturating at chrono's range.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(date)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Clamp a date into optional inclusive bounds. The lower bound wins when
/// both apply.
pub fn clamp_date(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    match (min, max) {
        (Some(min), _) if date < min => min,
        (_, Some(max)) if date > max => max,
        _ => date,
    }
}
