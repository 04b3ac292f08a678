// Settings module
// Per-instance picker configuration

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{PickerError, PickerResult};
use crate::models::labels::Labels;
use crate::models::view::CalendarView;
use crate::utils::date::clamp_date;

/// Most panels one picker may show side by side.
pub const MAX_MONTHS: usize = 12;

/// Widest `YearRange::Span` accepted.
pub const MAX_YEAR_SPAN: i32 = 9999;

/// Years offered in the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearRange {
    /// This many years either side of the displayed year
    Span(i32),
    /// Explicit inclusive `[lower, upper]` window
    Bounds(i32, i32),
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange::Span(10)
    }
}

impl YearRange {
    /// Inclusive year window around `year`.
    pub fn window(self, year: i32) -> (i32, i32) {
        match self {
            YearRange::Span(span) => (year.saturating_sub(span), year.saturating_add(span)),
            YearRange::Bounds(lower, upper) => (lower, upper),
        }
    }
}

/// Where the main panel sits when several months are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCalendar {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Output/input pattern using moment-style tokens
    pub format: String,
    /// Only accept input matching `format` exactly
    pub format_strict: bool,
    /// Date to show (or select) when the input holds no date
    pub default_date: Option<NaiveDate>,
    /// Select `default_date` instead of only navigating to it
    pub set_default_date: bool,
    /// First column of the grid: 0 = Sunday, 1 = Monday, ...
    pub first_day: u8,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub year_range: YearRange,
    pub show_week_number: bool,
    pub pick_whole_week: bool,
    pub disable_weekends: bool,
    pub start_range: Option<NaiveDate>,
    pub end_range: Option<NaiveDate>,
    pub is_rtl: bool,
    pub year_suffix: String,
    pub show_month_after_year: bool,
    pub show_days_in_next_and_previous_months: bool,
    pub enable_selection_days_in_next_and_previous_months: bool,
    pub number_of_months: usize,
    pub main_calendar: MainCalendar,
    /// Dates flagged with `has_event` in the grid
    pub events: BTreeSet<NaiveDate>,
    pub labels: Labels,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            format: "YYYY-MM-DD".to_string(),
            format_strict: false,
            default_date: None,
            set_default_date: false,
            first_day: 0, // Sunday
            min_date: None,
            max_date: None,
            year_range: YearRange::default(),
            show_week_number: false,
            pick_whole_week: false,
            disable_weekends: false,
            start_range: None,
            end_range: None,
            is_rtl: false,
            year_suffix: String::new(),
            show_month_after_year: false,
            show_days_in_next_and_previous_months: false,
            enable_selection_days_in_next_and_previous_months: false,
            number_of_months: 1,
            main_calendar: MainCalendar::Left,
            events: BTreeSet::new(),
            labels: Labels::default(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> PickerResult<()> {
        if !(1..=MAX_MONTHS).contains(&self.number_of_months) {
            return Err(PickerError::InvalidMonthCount(self.number_of_months));
        }

        if self.first_day > 6 {
            return Err(PickerError::InvalidFirstDay(self.first_day));
        }

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(PickerError::InvertedBounds { min, max });
            }
        }

        match self.year_range {
            YearRange::Span(span) if !(0..=MAX_YEAR_SPAN).contains(&span) => {
                return Err(PickerError::InvalidYearRange(span, span));
            }
            YearRange::Bounds(lower, upper) if lower > upper => {
                return Err(PickerError::InvalidYearRange(lower, upper));
            }
            _ => {}
        }

        Ok(())
    }

    /// Clamp a date into `[min_date, max_date]`.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        clamp_date(date, self.min_date, self.max_date)
    }

    /// Earliest selectable year (0 when unbounded).
    pub fn min_year(&self) -> i32 {
        self.min_date.map_or(0, |d| d.year())
    }

    /// Latest selectable year (9999 when unbounded).
    pub fn max_year(&self) -> i32 {
        self.max_date.map_or(9999, |d| d.year())
    }

    /// Earliest month panel navigation may reach.
    pub fn min_view(&self) -> CalendarView {
        self.min_date
            .map_or(CalendarView::new(self.min_year(), 0), CalendarView::of)
    }

    /// Latest month panel navigation may reach.
    pub fn max_view(&self) -> CalendarView {
        self.max_date
            .map_or(CalendarView::new(self.max_year(), 11), CalendarView::of)
    }

    pub fn is_out_of_bounds(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min) || self.max_date.is_some_and(|max| date > max)
    }
}
