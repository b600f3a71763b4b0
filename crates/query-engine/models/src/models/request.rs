//! Projection trees, select requests and insert rows.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::order::Order;
use super::scalar::ScalarValue;
use super::search::{Search, DATE_KEY, PENDING_KEY};

/// Field name to inclusion marker.
pub type Fields = IndexMap<String, FieldSelection>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldSelection {
    Include(bool),
    /// Selection of a related entity's fields. Accepted, but not projected.
    Nested(Fields),
    /// Any other marker, such as `null` or a string. Not projected.
    Other(serde_json::Value),
}

impl FieldSelection {
    pub fn is_included(&self) -> bool {
        matches!(self, FieldSelection::Include(true))
    }
}

/// A paginated, ordered, filtered selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub page: u64,
    /// Absent means no limit.
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub order: Order,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default)]
    pub search: Search,
}

/// One row to insert, keyed by logical field name.
pub type Entity = IndexMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(ScalarValue),
    /// Anything that is not a scalar, such as the payload of a relation field.
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_scalar = match &value {
            serde_json::Value::Array(_) => false,
            serde_json::Value::Object(map) => {
                map.contains_key(DATE_KEY) || map.contains_key(PENDING_KEY)
            }
            _ => true,
        };
        if is_scalar {
            ScalarValue::deserialize(value)
                .map(PropertyValue::Scalar)
                .map_err(serde::de::Error::custom)
        } else {
            Ok(PropertyValue::Other(value))
        }
    }
}

impl From<ScalarValue> for PropertyValue {
    fn from(value: ScalarValue) -> Self {
        PropertyValue::Scalar(value)
    }
}
