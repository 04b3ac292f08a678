use serde::Serialize;

use crate::models::day_cell::MonthGrid;
use crate::models::view::CalendarView;
use crate::services::grid::HeaderCell;
use crate::services::title::TitleModel;

/// Header text above the calendar: the year and a short weekday/month/day
/// line for the selected date (today when nothing is selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDisplay {
    pub year_text: String,
    /// e.g. `"Wed, Jan 1"`
    pub date_text: String,
}

/// One visible month panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub view: CalendarView,
    pub title: TitleModel,
    pub grid: MonthGrid,
}

/// Everything a renderer needs for one full redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawFrame {
    pub date_display: DateDisplay,
    pub header: Vec<HeaderCell>,
    pub panels: Vec<Panel>,
    pub is_rtl: bool,
}
