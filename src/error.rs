// Error types for the picker core

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Input text that no configured parser accepts.
    #[error("unparseable date input {0:?}")]
    InvalidDate(String),

    #[error("number_of_months must be between 1 and 12, got {0}")]
    InvalidMonthCount(usize),

    #[error("first_day must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDay(u8),

    #[error("min_date {min} is after max_date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    #[error("invalid year range ({0}, {1})")]
    InvalidYearRange(i32, i32),
}

pub type PickerResult<T> = Result<T, PickerError>;
