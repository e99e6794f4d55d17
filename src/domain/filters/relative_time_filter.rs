//! Relative time filter implementation.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use super::Filter;

/// Text returned for values that cannot be read as a date.
pub const INVALID_DATE: &str = "Invalid date";

/// Formats a date relative to now ("3 hours ago", "in a day").
#[derive(Debug, Default)]
pub struct RelativeTimeFilter;

impl RelativeTimeFilter {
    /// Create a new RelativeTimeFilter.
    pub fn new() -> Self {
        Self
    }

    /// Format `date` relative to `now`.
    pub fn from_now(date: OffsetDateTime, now: OffsetDateTime) -> String {
        let millis = (date - now).whole_milliseconds();
        let phrase = humanize(millis.unsigned_abs());
        if millis > 0 {
            format!("in {}", phrase)
        } else {
            format!("{} ago", phrase)
        }
    }
}

/// Describe a span of milliseconds in words.
///
/// Each unit is rounded from the previous one, so 90 seconds already reads
/// as "2 minutes".
fn humanize(millis: u128) -> String {
    let round = |value: f64| value.round();
    let seconds = round(millis as f64 / 1000.0);
    let minutes = round(seconds / 60.0);
    let hours = round(minutes / 60.0);
    let days = round(hours / 24.0);
    let years = round(days / 365.0);

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes == 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours == 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days == 1.0 {
        "a day".to_string()
    } else if days <= 25.0 {
        format!("{} days", days)
    } else if days <= 45.0 {
        "a month".to_string()
    } else if days < 345.0 {
        format!("{} months", round(days / 30.0))
    } else if years == 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}

/// Offset applied to dates written without one.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Read a date from epoch milliseconds or ISO 8601 text.
///
/// Text without an offset (`2020-03-10`, `2020-03-10 12:00:00`,
/// `2020-03-10T12:00`, ...) is taken as local time.
pub fn parse_date(value: &Value) -> Option<OffsetDateTime> {
    match value {
        Value::Number(n) => from_epoch_millis(n.as_f64()?),
        Value::String(text) => parse_date_str(text.trim()),
        _ => None,
    }
}

fn parse_date_str(text: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(dt);
    }
    if let Some(local) = parse_local_date_time(text) {
        return Some(local.assume_offset(local_offset()));
    }
    text.parse::<f64>().ok().and_then(from_epoch_millis)
}

fn parse_local_date_time(text: &str) -> Option<PrimitiveDateTime> {
    let day_format = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(text, &day_format) {
        return Some(date.midnight());
    }

    // A space may stand in for the 'T' separator
    let mut normalized = text.to_string();
    if normalized.as_bytes().get(10) == Some(&b' ') {
        normalized.replace_range(10..11, "T");
    }
    // Minutes-only times get zero seconds
    if normalized.len() == 16 {
        normalized.push_str(":00");
    }

    let seconds_format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let fraction_format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    PrimitiveDateTime::parse(&normalized, &seconds_format)
        .or_else(|_| PrimitiveDateTime::parse(&normalized, &fraction_format))
        .ok()
}

fn from_epoch_millis(millis: f64) -> Option<OffsetDateTime> {
    if !millis.is_finite() {
        return None;
    }
    let nanos = (millis.trunc() as i128).checked_mul(1_000_000)?;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

impl Filter for RelativeTimeFilter {
    fn name(&self) -> &'static str {
        "moment"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["relative-time", "fromNow"]
    }

    // The optional mode argument only knows "ago", which is also the
    // fallback, so it does not change the output.
    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        let now = OffsetDateTime::now_utc();
        let text = match input {
            None => Self::from_now(now, now),
            Some(value) => match parse_date(value) {
                Some(date) => Self::from_now(date, now),
                None => INVALID_DATE.to_string(),
            },
        };
        Some(Value::String(text))
    }
}
