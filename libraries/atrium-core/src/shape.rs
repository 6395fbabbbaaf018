//! Request shaping: coercion of untyped form data into typed records.
//!
//! Form inputs arrive as loosely typed JSON (numbers as strings, checkboxes
//! as `"on"`, padded text). [`Fields`] reads one field at a time and coerces
//! it to its declared semantic type; missing or unusable values fall back to
//! the type's empty value (`0`, `false`, `""`, `None`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Pure conversion from raw input into a fully-populated record.
pub trait Shape: Sized {
    fn shape(raw: &Value) -> Self;
}

/// Read-only view over the fields of a raw JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self {
            map: raw.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key)).filter(|v| !v.is_null())
    }

    /// Integer field. Accepts numbers and numeric strings; fractions are truncated.
    pub fn int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => parse_int(s),
            Some(Value::Bool(b)) => i64::from(*b),
            _ => 0,
        }
    }

    /// Identifier field. Same coercion as [`Fields::int`], negatives become 0.
    pub fn id(&self, key: &str) -> i64 {
        self.int(key).max(0)
    }

    /// Boolean flag. Accepts booleans, non-zero numbers and the usual
    /// checkbox spellings (`"true"`, `"on"`, `"yes"`, `"1"`).
    pub fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            ),
            _ => false,
        }
    }

    /// Free text, trimmed. Scalars are rendered as text; absent is `""`.
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Calendar date. Accepts `YYYY-MM-DD` or a full timestamp.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        let raw = self.get(key)?.as_str()?.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| parse_timestamp(raw).map(|ts| ts.date_naive()))
    }

    /// Point in time. Accepts RFC 3339 and zone-less `YYYY-MM-DDTHH:MM[:SS]`
    /// (read as UTC).
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.get(key)?.as_str()?.trim();
        parse_timestamp(raw)
    }
}

fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f.trunc() as i64))
        .unwrap_or(0)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
