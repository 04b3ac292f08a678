use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{PickerError, PickerResult};

/// Converts between the bound input's text and a calendar date.
pub trait DateFormat {
    /// Parse input text. `pattern` is the configured moment-style format;
    /// `strict` rejects anything that does not match it exactly.
    fn parse(&self, text: &str, pattern: &str, strict: bool) -> PickerResult<NaiveDate>;

    fn format(&self, date: NaiveDate, pattern: &str) -> String;
}

/// Moment-style tokens and their chrono equivalents, longest first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
];

/// Fallback date shapes accepted in lenient mode.
const LENIENT_DATES: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%a %b %d %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const LENIENT_DATE_TIMES: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Default [`DateFormat`]: moment-style patterns (`YYYY-MM-DD`,
/// `D MMMM YYYY`, ...) translated to chrono. Text inside `[...]` is copied
/// literally.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternFormat;

impl PatternFormat {
    /// Translate a moment-style pattern into a chrono format string.
    pub fn to_chrono(pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut rest = pattern;

        'scan: while let Some(ch) = rest.chars().next() {
            if ch == '[' {
                let literal_end = rest.find(']').unwrap_or(rest.len());
                push_literal(&mut out, &rest[1..literal_end]);
                rest = rest.get(literal_end + 1..).unwrap_or("");
                continue;
            }

            for (token, spec) in TOKENS {
                if let Some(tail) = rest.strip_prefix(token) {
                    out.push_str(spec);
                    rest = tail;
                    continue 'scan;
                }
            }

            push_literal(&mut out, &rest[..ch.len_utf8()]);
            rest = &rest[ch.len_utf8()..];
        }

        out
    }

    fn parse_lenient(text: &str) -> Option<NaiveDate> {
        LENIENT_DATES
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            .or_else(|| {
                LENIENT_DATE_TIMES
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                    .map(|dt| dt.date())
            })
            .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
    }
}

fn push_literal(out: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}

impl DateFormat for PatternFormat {
    fn parse(&self, text: &str, pattern: &str, strict: bool) -> PickerResult<NaiveDate> {
        let text = text.trim();
        let exact = NaiveDate::parse_from_str(text, &Self::to_chrono(pattern)).ok();

        let parsed = if strict {
            exact
        } else {
            exact.or_else(|| Self::parse_lenient(text))
        };

        parsed.ok_or_else(|| PickerError::InvalidDate(text.to_string()))
    }

    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        date.format(&Self::to_chrono(pattern)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn jan_5_2020() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
    }

    #[test_case("YYYY-MM-DD", "%Y-%m-%d")]
    #[test_case("D MMMM YYYY", "%-d %B %Y")]
    #[test_case("ddd, MMM D", "%a, %b %-d")]
    #[test_case("[Week of] D/M/YY", "Week of %-d/%-m/%y")]
    #[test_case("DD%", "%d%%")]
    fn test_to_chrono(pattern: &str, expected: &str) {
        assert_eq!(PatternFormat::to_chrono(pattern), expected);
    }

    #[test_case("YYYY-MM-DD", "2020-01-05")]
    #[test_case("D MMMM YYYY", "5 January 2020")]
    #[test_case("dddd, MMM D", "Sunday, Jan 5")]
    #[test_case("DD/MM/YYYY", "05/01/2020")]
    fn test_format(pattern: &str, expected: &str) {
        assert_eq!(PatternFormat.format(jan_5_2020(), pattern), expected);
    }

    #[test]
    fn test_parse_with_pattern() {
        let parsed = PatternFormat.parse("05/01/2020", "DD/MM/YYYY", true);
        assert_eq!(parsed, Ok(jan_5_2020()));

        let parsed = PatternFormat.parse("  5 January 2020 ", "D MMMM YYYY", true);
        assert_eq!(parsed, Ok(jan_5_2020()));
    }

    #[test]
    fn test_strict_rejects_other_shapes() {
        let parsed = PatternFormat.parse("2020-01-05", "DD/MM/YYYY", true);
        assert_eq!(parsed, Err(PickerError::InvalidDate("2020-01-05".to_string())));

        let parsed = PatternFormat.parse("2020-01-05", "DD/MM/YYYY", false);
        assert_eq!(parsed, Ok(jan_5_2020()));
    }

    #[test_case("Sun Jan 05 2020" ; "date string")]
    #[test_case("2020-01-05T13:45:00" ; "naive date time")]
    #[test_case("2020-01-05T13:45:00+02:00" ; "rfc3339")]
    #[test_case("January 5, 2020" ; "long month")]
    fn test_lenient_shapes(text: &str) {
        assert_eq!(PatternFormat.parse(text, "YYYY-MM-DD", false), Ok(jan_5_2020()));
    }

    #[test_case("" ; "empty")]
    #[test_case("not a date" ; "garbage")]
    #[test_case("2020-13-01" ; "month out of range")]
    #[test_case("2021-02-29" ; "not a leap year")]
    fn test_invalid_input(text: &str) {
        assert!(matches!(
            PatternFormat.parse(text, "YYYY-MM-DD", false),
            Err(PickerError::InvalidDate(_))
        ));
    }
}
