// Pluggable picker behaviour
// Parsing/formatting, lifecycle hooks and the source of "today"

mod clock;
mod format;
mod hooks;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{DateFormat, PatternFormat};
pub use hooks::{NoHooks, PickerHooks};

#[cfg(test)]
pub use hooks::MockPickerHooks;
