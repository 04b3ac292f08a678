// Labels module
// Display strings for the picker; English defaults, overridable from config

use serde::{Deserialize, Serialize};

fn strings<const N: usize>(values: [&str; N]) -> [String; N] {
    values.map(str::to_string)
}

/// Button captions plus month and weekday names.
///
/// Weekday arrays are indexed from Sunday (0) regardless of the configured
/// first day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub clear: String,
    pub today: String,
    pub done: String,
    pub previous_month: String,
    pub next_month: String,
    pub months: [String; 12],
    pub months_short: [String; 12],
    pub weekdays: [String; 7],
    pub weekdays_short: [String; 7],
    pub weekdays_abbrev: [String; 7],
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            clear: "Clear".to_string(),
            today: "Today".to_string(),
            done: "Ok".to_string(),
            previous_month: "‹".to_string(),
            next_month: "›".to_string(),
            months: strings([
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            months_short: strings([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            weekdays: strings([
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            weekdays_short: strings(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            weekdays_abbrev: strings(["S", "M", "T", "W", "T", "F", "S"]),
        }
    }
}

impl Labels {
    /// Full month name for a 0-based month.
    pub fn month_name(&self, month: u32) -> &str {
        &self.months[(month % 12) as usize]
    }

    /// Full and abbreviated weekday names for a Sunday-based index.
    pub fn weekday_names(&self, weekday: u32) -> (&str, &str) {
        let idx = (weekday % 7) as usize;
        (&self.weekdays[idx], &self.weekdays_abbrev[idx])
    }
}
