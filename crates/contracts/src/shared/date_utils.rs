/// Utilities for calendar date extraction
///
/// All report dates are UTC calendar dates. Timestamps carrying an offset are
/// converted to UTC before the date is taken; naive timestamps are read as UTC.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse an ISO 8601 date or date-time string into its UTC calendar date.
/// Example: "2024-03-15T14:02:26.123Z" -> 2024-03-15
///
/// Returns `None` for empty or unparseable input.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(datetime.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Serde helper: any JSON value into an optional calendar date.
/// Non-string or malformed values become `None` instead of failing the record.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_calendar_date))
}
