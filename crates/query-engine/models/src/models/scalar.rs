//! Scalar literals supplied by callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::error::Error;

/// An atomic value used in filters and insert rows.
///
/// In JSON these are plain literals, except for dates (`{"$_date": "2020-01-01T10:00:00Z"}`)
/// and values whose resolution is still outstanding (`{"$_pending": "<reference>"}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawScalar")]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<Utc>),
    /// Not yet resolved; it cannot be bound as a parameter.
    Pending(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Null,
    Bool(bool),
    Int(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Date {
        #[serde(rename = "$_date")]
        date: String,
    },
    Pending {
        #[serde(rename = "$_pending")]
        reference: String,
    },
}

impl TryFrom<RawScalar> for ScalarValue {
    type Error = Error;

    fn try_from(raw: RawScalar) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawScalar::Null => ScalarValue::Null,
            RawScalar::Bool(b) => ScalarValue::Bool(b),
            RawScalar::Int(i) => ScalarValue::Int(i),
            RawScalar::Unsigned(u) => return Err(Error::IntegerOutOfRange(u.to_string())),
            RawScalar::Float(f) => ScalarValue::Float(f),
            RawScalar::String(s) => ScalarValue::String(s),
            RawScalar::Date { date } => ScalarValue::DateTime(parse_date(&date)?),
            RawScalar::Pending { reference } => ScalarValue::Pending(reference),
        })
    }
}

/// Accepts an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| Error::InvalidDate(text.to_string()))
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value.into())
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> Self {
        ScalarValue::DateTime(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}
