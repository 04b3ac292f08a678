//! Panel title model: month/year selectors and prev/next buttons.

use serde::Serialize;

use crate::models::settings::PickerSettings;
use crate::models::view::CalendarView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    /// Lead-panel month that brings this month into the panel; feed it to
    /// `DatePicker::goto_month`
    pub value: i32,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOption {
    pub value: i32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleModel {
    pub panel_index: usize,
    pub view: CalendarView,
    pub month_options: Vec<MonthOption>,
    pub year_options: Vec<YearOption>,
    /// Only the first panel carries a previous button
    pub show_prev: bool,
    /// Only the last panel carries a next button
    pub show_next: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub show_month_after_year: bool,
    /// Year caption including the configured suffix
    pub year_label: String,
}

/// Build the title for panel `panel_index` showing `view`, where
/// `lead_year` is the year of the first visible panel.
pub fn build_title(
    settings: &PickerSettings,
    panel_index: usize,
    view: CalendarView,
    lead_year: i32,
) -> TitleModel {
    let min_year = settings.min_year();
    let max_year = settings.max_year();
    let min_month = settings.min_date.map(|_| settings.min_view().month);
    let max_month = settings.max_date.map(|_| settings.max_view().month);
    let is_min_year = view.year == min_year;
    let is_max_year = view.year == max_year;
    let c = panel_index as i32;

    let month_options = (0..12u32)
        .map(|i| {
            let value = if view.year == lead_year {
                i as i32 - c
            } else {
                12 + i as i32 - c
            };
            let disabled = (is_min_year && min_month.is_some_and(|m| i < m))
                || (is_max_year && max_month.is_some_and(|m| i > m));
            MonthOption {
                value,
                label: settings.labels.month_name(i).to_string(),
                selected: i == view.month,
                disabled,
            }
        })
        .collect();

    let (lower, upper) = settings.year_range.window(view.year);
    let year_options = (lower.max(min_year)..=upper.min(max_year))
        .map(|year| YearOption {
            value: year,
            selected: year == view.year,
        })
        .collect();

    TitleModel {
        panel_index,
        view,
        month_options,
        year_options,
        show_prev: panel_index == 0,
        show_next: panel_index + 1 == settings.number_of_months,
        prev_enabled: view > settings.min_view(),
        next_enabled: view < settings.max_view(),
        show_month_after_year: settings.show_month_after_year,
        year_label: format!("{}{}", view.year, settings.year_suffix),
    }
}
