//! Lenient field decoders for upstream records.
//!
//! The API is loose about scalar types: amounts arrive as numbers or strings,
//! dates as plain days or full timestamps, lists as `null`. Every helper here
//! coerces what it can and yields `None` (or an empty default) for the rest,
//! so a single odd field never fails the whole page.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::Nested;

/// Text field. Numbers and booleans are rendered to text; blanks are `None`.
pub fn string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.and_then(scalar_text))
}

pub(crate) fn scalar_text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Monetary or other fractional amount.
pub fn number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_amount(&s),
        _ => None,
    })
}

fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse().ok()
}

/// Whole-number count (employees, file size, total count).
pub fn integer<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Flag field. Accepts booleans, `"true"`/`"false"`, `"Y"`/`"N"` and `0`/`1`.
pub fn flag<'de, D>(d: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "y" | "yes" | "1" => Some(true),
            "false" | "f" | "n" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Calendar date, reduced to `YYYY-MM-DD`. Unparseable text is kept verbatim.
pub fn date<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?
        .and_then(scalar_text)
        .map(|s| iso_date(&s)))
}

pub(crate) fn iso_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day.format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return ts.date().format("%Y-%m-%d").to_string();
    }
    trimmed.to_string()
}

/// Sequence of nested references. `null` or a missing field is an empty list;
/// a bare scalar or object is treated as a one-element list.
pub fn nested_list<'de, D, T>(d: D) -> Result<Vec<Nested<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => items.into_iter().map(Nested::from_value).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![Nested::from_value(other)],
    })
}

/// Any `Default` value where `null` should behave like a missing field.
pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Result list decoded record by record. Fields inside a record are lenient,
/// but an entry that is not a record at all fails the whole page.
pub fn records<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Value>::deserialize(d)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<T>(item)
                .map_err(|e| D::Error::custom(format!("result {}: {}", index, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_reduces_timestamps() {
        assert_eq!(iso_date("2024-03-05"), "2024-03-05");
        assert_eq!(iso_date("2024-03-05T13:45:00Z"), "2024-03-05");
        assert_eq!(iso_date("2024-03-05T13:45:00.123"), "2024-03-05");
        assert_eq!(iso_date("2024-03-05 08:00:00"), "2024-03-05");
    }

    #[test]
    fn iso_date_keeps_unknown_text() {
        assert_eq!(iso_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn amounts_strip_currency_formatting() {
        assert_eq!(parse_amount("$1,250,000.50"), Some(1_250_000.5));
        assert_eq!(parse_amount("n/a"), None);
    }

    #[test]
    fn scalar_text_drops_blanks_and_structures() {
        assert_eq!(scalar_text(Value::from("  ")), None);
        assert_eq!(scalar_text(Value::from(541512)), Some("541512".to_string()));
        assert_eq!(scalar_text(serde_json::json!({"a": 1})), None);
    }
}
