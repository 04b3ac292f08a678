use chrono::{NaiveDate, NaiveDateTime};

/// Anything `DatePicker::set_date` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue<'a> {
    /// Clears the selection
    Empty,
    Date(NaiveDate),
    /// Truncated to its calendar date
    DateTime(NaiveDateTime),
    /// Parsed with the configured format; blank text clears
    Text(&'a str),
}

impl From<NaiveDate> for DateValue<'_> {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue<'_> {
    fn from(date_time: NaiveDateTime) -> Self {
        DateValue::DateTime(date_time)
    }
}

impl From<Option<NaiveDate>> for DateValue<'_> {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(DateValue::Empty, DateValue::Date)
    }
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(text: &'a str) -> Self {
        DateValue::Text(text)
    }
}

/// User interactions with the open calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// A day button was clicked
    SelectDay(NaiveDate),
    PrevMonth,
    NextMonth,
    /// Month selector changed; value from `MonthOption::value`
    SelectMonth(i32),
    SelectYear(i32),
    Today,
    Clear,
    Done,
    /// The calendar was dismissed without confirming
    Dismiss,
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
}
