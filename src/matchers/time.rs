use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{self as anyvalue, matcher, Value};

/// Formats of date-times without an explicit offset.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S UTC",
    "%Y/%m/%d %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
    "%d %b %Y %H:%M:%S",
];

/// Formats of date-times with an explicit offset.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%a %b %e %H:%M:%S %z %Y",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%a, %d %b %Y",
    "%a %b %e %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M %p",
    "%I:%M:%S %p",
];

fn is_date_time(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || DATE_TIME_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(s, format).is_ok())
        || NAIVE_DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
}

fn is_date(s: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(s, format).is_ok())
}

fn is_time_of_day(s: &str) -> bool {
    TIME_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(s, format).is_ok())
}

/// Returns whether `value` is a string accepted by `parses`. Anything that
/// fails to parse is simply rejected.
fn parses_as(value: &Value, kind: &str, parses: impl Fn(&str) -> bool) -> bool {
    let s = match value.as_str() {
        Some(s) => s.trim(),
        None => return false,
    };

    if parses(s) {
        return true;
    }

    tracing::trace!(candidate = s, kind, "string does not parse");

    false
}

/// Returns a [`Matcher`](crate::Matcher) that accepts times.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_time};
/// assert_that!(chrono::Utc::now(), any_time());
/// assert_that!(std::time::SystemTime::now(), any_time());
///
/// refute_that!(42, any_time());
/// refute_that!("2024-01-01T10:00:00Z", any_time());
/// ```
#[matcher(expected = ("{} time", switch("is a", "is not a")))]
pub fn any_time(value: &Value) -> bool {
    matches!(value, Value::Time(_))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts dates.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_date};
/// # use chrono::NaiveDate;
/// assert_that!(NaiveDate::from_ymd_opt(2024, 2, 29), any_date());
///
/// refute_that!(42, any_date());
/// ```
#[matcher(expected = ("{} date", switch("is a", "is not a")))]
pub fn any_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings holding a
/// date-time, a date or a time of day.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_time_string};
/// assert_that!("2024-01-01T10:00:00+02:00", any_time_string());
/// assert_that!("2024-01-01 10:00:00 +0000", any_time_string());
/// assert_that!("10:30", any_time_string());
///
/// refute_that!("not a time", any_time_string());
/// refute_that!(42, any_time_string());
/// ```
#[matcher(expected = ("{} time string", switch("is a", "is not a")))]
pub fn any_time_string(value: &Value) -> bool {
    parses_as(value, "time", |s| is_date_time(s) || is_date(s) || is_time_of_day(s))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings holding a date,
/// possibly followed by a time.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_date_string};
/// assert_that!("2024-02-29", any_date_string());
/// assert_that!("Feb 29, 2024", any_date_string());
///
/// refute_that!("2023-02-29", any_date_string());
/// refute_that!("10:30", any_date_string());
/// ```
#[matcher(expected = ("{} date string", switch("is a", "is not a")))]
pub fn any_date_string(value: &Value) -> bool {
    parses_as(value, "date", |s| is_date(s) || is_date_time(s))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings holding a
/// date-time, a date alone or a time of day alone.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_datetime_string};
/// assert_that!("2024-01-01T10:00:00Z", any_datetime_string());
/// assert_that!("Mon, 1 Jan 2024 10:00:00 +0000", any_datetime_string());
/// assert_that!("10:30", any_datetime_string());
///
/// refute_that!("yesterday-ish", any_datetime_string());
/// ```
#[matcher(
    expected = ("{} date-time string", switch("is a", "is not a")),
    name = AnyDateTimeString
)]
pub fn any_datetime_string(value: &Value) -> bool {
    parses_as(value, "date-time", |s| {
        is_date_time(s) || is_date(s) || is_time_of_day(s)
    })
}
