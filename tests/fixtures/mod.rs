// Test fixtures - reusable test data
// Provides consistent dates and picker setups across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_datepicker::services::strategy::FixedClock;
use rust_datepicker::{DatePicker, PickerSettings};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// The fixed "today" used by picker fixtures (a Wednesday)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Picker setups for testing
pub mod pickers {
    use super::*;

    /// Picker with the fixed clock and the given settings, opened
    pub fn open_picker(settings: PickerSettings) -> DatePicker {
        let mut picker = DatePicker::builder(settings)
            .clock(FixedClock(dates::today()))
            .build()
            .unwrap();
        picker.open();
        picker
    }

    /// Two panels anchored on the right, Monday first, weekends off
    pub fn booking_settings() -> PickerSettings {
        PickerSettings {
            first_day: 1,
            number_of_months: 2,
            main_calendar: rust_datepicker::models::settings::MainCalendar::Right,
            disable_weekends: true,
            min_date: Some(dates::ymd(2025, 1, 1)),
            max_date: Some(dates::new_years_eve_2025()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::today().weekday(), chrono::Weekday::Wed);
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert_eq!(dates::new_years_eve_2025().month(), 12);
    }

    #[test]
    fn test_fixture_settings_are_valid() {
        assert!(pickers::booking_settings().validate().is_ok());
    }
}
