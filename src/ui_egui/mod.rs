mod app;
pub mod date_picker;

pub use app::{DatePickerApp, LoggingHooks};
pub use date_picker::DatePickerWindow;
