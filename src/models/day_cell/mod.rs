// Day cell module
// Derived grid data: cells, week rows and the month grid

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::view::CalendarView;

/// One day slot in a month grid.
///
/// Cells are derived on every draw and never stored. Cells outside the
/// panel's month have `is_empty` set but still carry the real adjoining
/// date in `year`/`month`/`day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub year: i32,
    /// 0-based month
    pub month: u32,
    pub day: u32,
    /// Belongs to the previous or next month
    pub is_empty: bool,
    /// Empty cell drawn blank because adjoining days are hidden
    pub is_placeholder: bool,
    /// Adjoining-month cell that may still be picked
    pub is_outside_selectable: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    pub has_event: bool,
    pub is_in_range: bool,
    pub is_start_range: bool,
    pub is_end_range: bool,
}

impl DayCell {
    /// Whether clicking this cell should select its date.
    pub fn is_selectable(&self) -> bool {
        !self.is_placeholder && !self.is_disabled && (!self.is_empty || self.is_outside_selectable)
    }

    /// Style classes for renderers that style by class name.
    pub fn classes(&self) -> Vec<&'static str> {
        if self.is_placeholder {
            return vec!["is-empty"];
        }

        let mut classes = Vec::new();
        if self.is_empty {
            classes.push("is-outside-current-month");
            if !self.is_outside_selectable {
                classes.push("is-selection-disabled");
            }
        }

        let flags = [
            (self.is_disabled, "is-disabled"),
            (self.is_today, "is-today"),
            (self.is_selected, "is-selected"),
            (self.has_event, "has-event"),
            (self.is_in_range, "is-inrange"),
            (self.is_start_range, "is-startrange"),
            (self.is_end_range, "is-endrange"),
        ];
        classes.extend(flags.into_iter().filter(|(set, _)| *set).map(|(_, class)| class));
        classes
    }
}

/// A grid row of seven cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub cells: Vec<DayCell>,
    /// Present when the week-number column is shown
    pub week_number: Option<u32>,
    /// Whole-week mode: some day in this row is the selected date
    pub is_selected: bool,
}

impl WeekRow {
    /// 7, or 8 with the week-number column.
    pub fn column_count(&self) -> usize {
        self.cells.len() + usize::from(self.week_number.is_some())
    }

    /// Cells in display order (right-to-left layouts reverse the row).
    pub fn display_cells(&self, is_rtl: bool) -> Vec<&DayCell> {
        if is_rtl {
            self.cells.iter().rev().collect()
        } else {
            self.cells.iter().collect()
        }
    }
}

/// Generated grid for one visible month panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub view: CalendarView,
    pub rows: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn empty(view: CalendarView) -> Self {
        Self {
            view,
            rows: Vec::new(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    /// First cell carrying `date`, in-month or adjoining.
    pub fn find(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }
}
