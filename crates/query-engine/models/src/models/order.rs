//! Order trees.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Field name to sort strategy, in the order the caller wrote them.
pub type Order = IndexMap<String, OrderField>;

/// One entry of an order tree. Only a [`OrderField::Strategy`] contributes to `ORDER BY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderField {
    Strategy(OrderStrategy),
    /// Ordering by fields of a related entity. Accepted, but not compiled.
    Nested(Order),
    /// Anything without a direction, such as a bare `"DESC"` or `{"priority": 1}`.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStrategy {
    pub direction: OrderDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nulls: Option<NullsOrder>,
    /// Lower priorities sort first; absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NullsOrder {
    First,
    Last,
}

impl OrderStrategy {
    pub fn asc() -> Self {
        OrderStrategy {
            direction: OrderDirection::Asc,
            nulls: None,
            priority: None,
        }
    }

    pub fn desc() -> Self {
        OrderStrategy {
            direction: OrderDirection::Desc,
            nulls: None,
            priority: None,
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

impl<'de> Deserialize<'de> for OrderField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(OrderField::from_json(value))
    }
}

impl OrderField {
    /// Objects carrying `direction` are strategies, objects of objects are nested orders.
    fn from_json(value: serde_json::Value) -> OrderField {
        let has_direction = value
            .as_object()
            .is_some_and(|map| map.contains_key("direction"));
        if has_direction {
            return match OrderStrategy::deserialize(&value) {
                Ok(strategy) => OrderField::Strategy(strategy),
                Err(_) => OrderField::Other(value),
            };
        }
        match value {
            serde_json::Value::Object(map) if map.values().all(serde_json::Value::is_object) => {
                OrderField::Nested(
                    map.into_iter()
                        .map(|(field, entry)| (field, OrderField::from_json(entry)))
                        .collect(),
                )
            }
            other => OrderField::Other(other),
        }
    }
}

impl From<OrderStrategy> for OrderField {
    fn from(strategy: OrderStrategy) -> Self {
        OrderField::Strategy(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn reads_strategies_and_nested_orders() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "age": { "direction": "DESC", "priority": 1 },
            "name": { "direction": "ASC", "nulls": "LAST" },
            "bioMetrics": { "height": { "direction": "ASC" } }
        }))
        .unwrap();

        assert_eq!(
            order["age"],
            OrderField::Strategy(OrderStrategy::desc().priority(1))
        );
        assert_eq!(
            order["name"],
            OrderField::Strategy(OrderStrategy::asc().nulls(NullsOrder::Last))
        );
        assert!(matches!(order["bioMetrics"], OrderField::Nested(_)));
    }

    #[test]
    fn entries_without_a_direction_are_kept_aside() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "age": { "priority": 1 },
            "type": "DESC",
            "description": null,
            "height": { "direction": "UP" },
            "name": { "direction": "ASC" }
        }))
        .unwrap();

        assert_eq!(
            order["age"],
            OrderField::Other(serde_json::json!({ "priority": 1 }))
        );
        assert_eq!(order["type"], OrderField::Other(serde_json::json!("DESC")));
        assert_eq!(order["description"], OrderField::Other(serde_json::Value::Null));
        assert!(matches!(order["height"], OrderField::Other(_)));
        assert_eq!(order["name"], OrderField::Strategy(OrderStrategy::asc()));
    }
}
