// Rust Datepicker Library
// Exports all modules for testing and reuse

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::{PickerError, PickerResult};
pub use models::settings::PickerSettings;
pub use services::picker::{DatePicker, DatePickerBuilder, DateValue, DrawFrame, PickerAction, PickerKey};
