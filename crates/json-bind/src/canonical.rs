//! Canonical textual forms of field values.
//!
//! | type     | form                                   |
//! |----------|----------------------------------------|
//! | date     | `YYYY-MM-DD`                           |
//! | instant  | RFC 3339 with offset, `Z` for UTC      |
//! | enum     | declared member name as a JSON string  |
//! | str      | JSON string                            |

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde_json::Value;

use crate::schema::ValueType;
use crate::value::FieldValue;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_instant(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an RFC 3339 timestamp. A single trailing bracketed zone id, as in
/// `1987-08-05T22:00:00Z[UTC]`, is accepted and ignored. The id must be
/// non-empty and may not itself contain brackets.
pub fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    let text = match raw.strip_suffix(']') {
        Some(head) => match head.split_once('[') {
            Some((ts, zone)) if !zone.is_empty() && !zone.contains(['[', ']']) => ts,
            _ => return None,
        },
        None if raw.contains(['[', ']']) => return None,
        None => raw,
    };
    DateTime::parse_from_rfc3339(text).ok()
}

/// Renders `value` as the JSON value declared by `type_`.
pub fn render(type_: &ValueType, value: &FieldValue) -> Result<Value, String> {
    match (type_, value) {
        (ValueType::Str, FieldValue::Str(s)) => Ok(Value::String(s.clone())),
        (ValueType::Date, FieldValue::Date(d)) => Ok(Value::String(format_date(d))),
        (ValueType::Instant, FieldValue::Instant(t)) => Ok(Value::String(format_instant(t))),
        (ValueType::Enum(e), FieldValue::Enum(member)) => {
            if e.has_member(member) {
                Ok(Value::String(member.clone()))
            } else {
                Err(format!("{member:?} is not a member of {}", e.name))
            }
        }
        (t, v) => Err(format!("{} value for {} field", v.kind(), t.kind())),
    }
}

/// Parses a non-null JSON value as `type_`. Returns `None` when the value
/// has no valid reading.
pub fn parse(type_: &ValueType, raw: &Value) -> Option<FieldValue> {
    let text = raw.as_str()?;
    match type_ {
        ValueType::Str => Some(FieldValue::Str(text.to_string())),
        ValueType::Date => parse_date(text).map(FieldValue::Date),
        ValueType::Instant => parse_instant(text).map(FieldValue::Instant),
        ValueType::Enum(e) => e
            .has_member(text)
            .then(|| FieldValue::Enum(text.to_string())),
    }
}
