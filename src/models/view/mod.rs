// Calendar view module
// One visible (year, month) panel of the picker

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::utils::date::{first_of_month, last_of_month, normalize_month};

/// A visible month panel. `month` is 0-based and always normalized into
/// `0..=11`; construct through [`CalendarView::new`] to keep that true.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
}

impl CalendarView {
    /// Build a view from a possibly out-of-range month, rolling overflow
    /// and underflow into the year.
    ///
    /// # Examples
    /// ```
    /// use rust_datepicker::models::view::CalendarView;
    ///
    /// assert_eq!(CalendarView::new(2020, 12), CalendarView::new(2021, 0));
    /// assert_eq!(CalendarView::new(2020, -1).month, 11);
    /// ```
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize_month(year, month);
        Self { year, month }
    }

    /// The view containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The view `months` panels away from this one.
    pub fn offset(self, months: i32) -> Self {
        Self::new(self.year, self.month as i32 + months)
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        first_of_month(self.year, self.month)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        last_of_month(self.year, self.month)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rolls_over_year() {
        let december = CalendarView::new(2024, 11);
        assert_eq!(december.offset(1), CalendarView { year: 2025, month: 0 });

        let january = CalendarView::new(2024, 0);
        assert_eq!(january.offset(-1), CalendarView { year: 2023, month: 11 });
        assert_eq!(january.offset(-25), CalendarView { year: 2021, month: 11 });
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(CalendarView::new(2024, 11) < CalendarView::new(2025, 0));
        assert!(CalendarView::new(2025, 1) > CalendarView::new(2025, 0));
    }

    #[test]
    fn test_month_bounds() {
        let view = CalendarView::new(2024, 1);
        assert_eq!(view.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(view.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(view.contains(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
        assert!(!view.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(CalendarView::new(2025, 0).to_string(), "2025-01");
    }
}
