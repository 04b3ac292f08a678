//! Month grid generation.
//!
//! Turns a (year, month) panel plus configuration into week rows of
//! classified day cells, and builds the matching weekday header.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::day_cell::{DayCell, MonthGrid, WeekRow};
use crate::models::settings::PickerSettings;
use crate::models::view::CalendarView;
use crate::utils::date::{days_in_month, is_weekend, row_week_number, shift_days, weekday_offset};

/// Inputs that change between draws.
pub struct GridContext<'a> {
    pub settings: &'a PickerSettings,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
    /// Caller-supplied disable predicate
    pub is_day_disabled: &'a dyn Fn(NaiveDate) -> bool,
}

impl GridContext<'_> {
    fn is_disabled(&self, date: NaiveDate) -> bool {
        let settings = self.settings;
        settings.is_out_of_bounds(date)
            || (settings.disable_weekends && is_weekend(date))
            || (self.is_day_disabled)(date)
    }

    fn range_flags(&self, date: NaiveDate) -> (bool, bool, bool) {
        let start = self.settings.start_range;
        let end = self.settings.end_range;
        let is_start = start == Some(date);
        let is_end = end == Some(date);
        let in_range = match (start, end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        };
        (is_start, is_end, in_range)
    }
}

/// Build the week rows for one month panel.
///
/// The grid holds `offset + days_in_month` cells padded up to a multiple of
/// seven, where `offset` is the weekday of the 1st rotated by the configured
/// first day of the week.
pub fn build_month_grid(view: CalendarView, ctx: &GridContext<'_>) -> MonthGrid {
    let Some(first) = view.first_day() else {
        log::warn!("Month {} is outside the supported date range", view);
        return MonthGrid::empty(view);
    };

    let settings = ctx.settings;
    let days = days_in_month(view.year, view.month);
    let before = weekday_offset(view.year, view.month, settings.first_day);
    let total = (before + days).div_ceil(7) * 7;

    let mut rows = Vec::with_capacity((total / 7) as usize);
    let mut row = Vec::with_capacity(7);

    for i in 0..total {
        let date = shift_days(first, i as i64 - before as i64);
        let is_empty = i < before || i >= before + days;
        let (is_start_range, is_end_range, is_in_range) = ctx.range_flags(date);

        row.push(DayCell {
            date,
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            is_empty,
            is_placeholder: is_empty && !settings.show_days_in_next_and_previous_months,
            is_outside_selectable: is_empty
                && settings.show_days_in_next_and_previous_months
                && settings.enable_selection_days_in_next_and_previous_months,
            is_today: date == ctx.today,
            is_selected: ctx.selected == Some(date),
            is_disabled: ctx.is_disabled(date),
            has_event: settings.events.contains(&date),
            is_in_range,
            is_start_range,
            is_end_range,
        });

        if row.len() == 7 {
            rows.push(finish_row(std::mem::take(&mut row), settings));
        }
    }

    MonthGrid { view, rows }
}

fn finish_row(mut cells: Vec<DayCell>, settings: &PickerSettings) -> WeekRow {
    let is_selected = settings.pick_whole_week && cells.iter().any(|cell| cell.is_selected);
    if is_selected {
        for cell in &mut cells {
            cell.is_selected = true;
        }
    }

    let week_number = settings
        .show_week_number
        .then(|| row_week_number(cells[0].date));

    WeekRow {
        cells,
        week_number,
        is_selected,
    }
}

/// One column heading of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HeaderCell {
    /// Blank heading above the week-number column
    WeekNumber,
    Weekday {
        /// Sunday-based weekday index
        weekday: u32,
        name: String,
        abbrev: String,
    },
}

/// Weekday headings rotated by the first day of the week, reversed for
/// right-to-left layouts.
pub fn weekday_header(settings: &PickerSettings) -> Vec<HeaderCell> {
    let mut header = Vec::with_capacity(8);
    if settings.show_week_number {
        header.push(HeaderCell::WeekNumber);
    }

    for column in 0..7u32 {
        let weekday = (column + settings.first_day as u32) % 7;
        let (name, abbrev) = settings.labels.weekday_names(weekday);
        header.push(HeaderCell::Weekday {
            weekday,
            name: name.to_string(),
            abbrev: abbrev.to_string(),
        });
    }

    if settings.is_rtl {
        header.reverse();
    }
    header
}
