use chrono::NaiveDate;

use crate::services::picker::{DatePicker, PickerKey};
use crate::services::render::GridRenderer;
use crate::services::strategy::PickerHooks;
use crate::ui_egui::date_picker::DatePickerWindow;

const KEY_BINDINGS: [(egui::Key, PickerKey); 6] = [
    (egui::Key::Enter, PickerKey::Enter),
    (egui::Key::Escape, PickerKey::Escape),
    (egui::Key::ArrowLeft, PickerKey::Left),
    (egui::Key::ArrowRight, PickerKey::Right),
    (egui::Key::ArrowUp, PickerKey::Up),
    (egui::Key::ArrowDown, PickerKey::Down),
];

/// Hooks that report picker events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHooks;

impl PickerHooks for LoggingHooks {
    fn on_select(&mut self, date: NaiveDate) {
        log::info!("Selected {}", date);
    }

    fn on_open(&mut self) {
        log::debug!("Picker opened");
    }

    fn on_close(&mut self) {
        log::debug!("Picker closed");
    }
}

/// Demo window: a single text input bound to a [`DatePicker`].
pub struct DatePickerApp {
    picker: DatePicker,
    /// Text buffer backing the input field
    input: String,
}

impl DatePickerApp {
    pub fn new(picker: DatePicker) -> Self {
        let input = picker.input_value().to_string();
        Self { picker, input }
    }

    fn pressed_key(ctx: &egui::Context) -> Option<PickerKey> {
        ctx.input(|i| {
            KEY_BINDINGS
                .iter()
                .find(|(key, _)| i.key_pressed(*key))
                .map(|(_, picker_key)| *picker_key)
        })
    }
}

impl eframe::App for DatePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut input_focused = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Date:");
                let response = ui.text_edit_singleline(&mut self.input);
                if response.clicked() {
                    self.picker.open();
                }
                if response.changed() {
                    self.picker.handle_input_change(&self.input);
                }
                input_focused = response.has_focus() || response.lost_focus();
            });

            ui.add_space(8.0);
            match self.picker.date() {
                Some(_) => ui.label(format!("Selected: {}", self.picker)),
                None => ui.weak("No date selected"),
            };
        });

        if let Some(key) = Self::pressed_key(ctx) {
            if self.picker.is_open() || input_focused {
                self.picker.handle_key(key);
            }
        }

        if self.picker.is_open() {
            let frame = self.picker.frame();
            let action =
                DatePickerWindow::new(ctx, &self.picker.settings().labels).render(&frame);
            if let Some(action) = action {
                self.picker.handle_action(action);
            }
        }

        // Today, Clear and Done write back to the input
        if self.input != self.picker.input_value() {
            self.input = self.picker.input_value().to_string();
        }
    }
}
