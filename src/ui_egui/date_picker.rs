//! Date picker popup.
//!
//! Draws a [`DrawFrame`] as a floating egui window and reports the action
//! the user triggered this frame.

use egui::{Color32, RichText};

use crate::models::day_cell::{DayCell, WeekRow};
use crate::models::labels::Labels;
use crate::services::grid::HeaderCell;
use crate::services::picker::{DrawFrame, Panel, PickerAction};
use crate::services::render::GridRenderer;
use crate::services::title::TitleModel;

const TODAY_COLOR: Color32 = Color32::from_rgb(50, 150, 50);
const RANGE_COLOR: Color32 = Color32::from_rgb(205, 225, 245);

type Selector = fn(&mut egui::Ui, &TitleModel) -> Option<PickerAction>;

pub struct DatePickerWindow<'a> {
    ctx: &'a egui::Context,
    labels: &'a Labels,
}

impl<'a> DatePickerWindow<'a> {
    pub fn new(ctx: &'a egui::Context, labels: &'a Labels) -> Self {
        Self { ctx, labels }
    }

    fn render_panel(&self, ui: &mut egui::Ui, panel: &Panel, frame: &DrawFrame) -> Option<PickerAction> {
        let mut action = None;
        let title = &panel.title;

        ui.horizontal(|ui| {
            if title.show_prev {
                let prev = egui::Button::new(self.labels.previous_month.as_str()).small();
                if ui
                    .add_enabled(title.prev_enabled, prev)
                    .on_hover_text("Previous month")
                    .clicked()
                {
                    action = Some(PickerAction::PrevMonth);
                }
            }

            let selectors: [Selector; 2] = if title.show_month_after_year {
                [year_selector, month_selector]
            } else {
                [month_selector, year_selector]
            };
            for selector in selectors {
                if let Some(selected) = selector(ui, title) {
                    action = Some(selected);
                }
            }

            if title.show_next {
                let next = egui::Button::new(self.labels.next_month.as_str()).small();
                if ui
                    .add_enabled(title.next_enabled, next)
                    .on_hover_text("Next month")
                    .clicked()
                {
                    action = Some(PickerAction::NextMonth);
                }
            }
        });

        egui::Grid::new(("date_picker_grid", title.panel_index))
            .num_columns(frame.header.len())
            .spacing([4.0, 2.0])
            .min_col_width(24.0)
            .show(ui, |ui| {
                // Header row
                for cell in &frame.header {
                    match cell {
                        HeaderCell::WeekNumber => {
                            ui.label(RichText::new("Wk").small().weak());
                        }
                        HeaderCell::Weekday { name, abbrev, .. } => {
                            ui.label(RichText::new(abbrev.as_str()).small().strong())
                                .on_hover_text(name.as_str());
                        }
                    }
                }
                ui.end_row();

                for row in &panel.grid.rows {
                    if !frame.is_rtl {
                        week_number_label(ui, row);
                    }
                    for cell in row.display_cells(frame.is_rtl) {
                        if let Some(clicked) = day_button(ui, cell) {
                            action = Some(clicked);
                        }
                    }
                    if frame.is_rtl {
                        week_number_label(ui, row);
                    }
                    ui.end_row();
                }
            });

        action
    }
}

impl GridRenderer for DatePickerWindow<'_> {
    type Output = Option<PickerAction>;

    fn render(&self, frame: &DrawFrame) -> Option<PickerAction> {
        let mut action = None;
        let mut is_open = true;

        egui::Window::new("📅 Pick a date")
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut is_open)
            .show(self.ctx, |ui| {
                ui.label(RichText::new(frame.date_display.year_text.as_str()).weak());
                ui.heading(frame.date_display.date_text.as_str());
                ui.separator();

                ui.horizontal_top(|ui| {
                    for panel in &frame.panels {
                        ui.vertical(|ui| {
                            if let Some(panel_action) = self.render_panel(ui, panel, frame) {
                                action = Some(panel_action);
                            }
                        });
                    }
                });

                ui.separator();

                // Quick actions
                ui.horizontal(|ui| {
                    if ui.button(self.labels.clear.as_str()).clicked() {
                        action = Some(PickerAction::Clear);
                    }
                    if ui.button(self.labels.today.as_str()).clicked() {
                        action = Some(PickerAction::Today);
                    }
                    if ui.button(self.labels.done.as_str()).clicked() {
                        action = Some(PickerAction::Done);
                    }
                });
            });

        if !is_open {
            return Some(PickerAction::Dismiss);
        }
        action
    }
}

fn month_selector(ui: &mut egui::Ui, title: &TitleModel) -> Option<PickerAction> {
    let mut action = None;
    let selected = title
        .month_options
        .iter()
        .find(|option| option.selected)
        .map(|option| option.label.as_str())
        .unwrap_or_default();

    egui::ComboBox::from_id_source(("picker_month", title.panel_index))
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in &title.month_options {
                let label = egui::SelectableLabel::new(option.selected, option.label.as_str());
                if ui.add_enabled(!option.disabled, label).clicked() {
                    action = Some(PickerAction::SelectMonth(option.value));
                }
            }
        });

    action
}

fn year_selector(ui: &mut egui::Ui, title: &TitleModel) -> Option<PickerAction> {
    let mut action = None;

    egui::ComboBox::from_id_source(("picker_year", title.panel_index))
        .selected_text(title.year_label.as_str())
        .show_ui(ui, |ui| {
            for option in &title.year_options {
                if ui
                    .selectable_label(option.selected, option.value.to_string())
                    .clicked()
                {
                    action = Some(PickerAction::SelectYear(option.value));
                }
            }
        });

    action
}

fn week_number_label(ui: &mut egui::Ui, row: &WeekRow) {
    if let Some(week) = row.week_number {
        ui.label(RichText::new(week.to_string()).small().weak());
    }
}

fn day_button(ui: &mut egui::Ui, cell: &DayCell) -> Option<PickerAction> {
    if cell.is_placeholder {
        ui.label("");
        return None;
    }

    let mut text = RichText::new(cell.day.to_string());
    if cell.is_today {
        text = text.strong().color(TODAY_COLOR);
    } else if cell.is_empty {
        text = text.weak();
    }
    if cell.is_disabled {
        text = text.strikethrough();
    }
    if cell.has_event {
        text = text.underline();
    }
    if cell.is_in_range || cell.is_start_range || cell.is_end_range {
        text = text.background_color(RANGE_COLOR);
    }

    let response = ui.add_enabled(
        cell.is_selectable(),
        egui::SelectableLabel::new(cell.is_selected, text),
    );
    response
        .clicked()
        .then_some(PickerAction::SelectDay(cell.date))
}
