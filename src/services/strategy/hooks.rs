use chrono::NaiveDate;

use crate::services::picker::DrawFrame;

/// Lifecycle callbacks and the caller's disable predicate.
///
/// Every method has a no-op default, so implementors only override what
/// they need. Callbacks run synchronously at the transition that fires them.
#[cfg_attr(test, mockall::automock)]
pub trait PickerHooks {
    /// A date was selected (not fired for silent or clearing updates).
    fn on_select(&mut self, _date: NaiveDate) {}

    fn on_open(&mut self) {}

    fn on_close(&mut self) {}

    /// The visible panels were regenerated.
    fn on_draw(&mut self, _frame: &DrawFrame) {}

    /// Extra days to disable on top of bounds and the weekend policy.
    fn is_day_disabled(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl PickerHooks for NoHooks {}
