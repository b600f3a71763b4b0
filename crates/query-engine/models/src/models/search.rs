//! Filter trees.
//!
//! Reserved keys start with `$_`: `$_eq`, `$_lk`, `$_gt` and `$_lt` select an operator family,
//! and `$_not` negates a condition or, at the level of a [`Search`], the whole group of sibling
//! clauses.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::error::Error;
use super::scalar::ScalarValue;

pub const NOT_KEY: &str = "$_not";
pub const EQUAL_KEY: &str = "$_eq";
pub const LIKE_KEY: &str = "$_lk";
pub const GREATER_KEY: &str = "$_gt";
pub const LESSER_KEY: &str = "$_lt";
pub const DATE_KEY: &str = "$_date";
pub const PENDING_KEY: &str = "$_pending";

const OPERATOR_KEYS: [&str; 4] = [EQUAL_KEY, LIKE_KEY, GREATER_KEY, LESSER_KEY];

/// The filter tree for one entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "IndexMap<String, Where>")]
pub struct Search {
    /// When set, the sibling clauses of this level are combined as "none of these holds".
    pub not: bool,
    pub fields: IndexMap<String, Where>,
}

/// What a single field of a filter tree may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// Implicit equality.
    Value(ScalarValue),
    /// Implicit membership.
    List(Vec<ScalarValue>),
    Condition(Condition),
    /// A filter on the target of a relation field.
    Nested(Search),
}

/// A condition object carrying at most one operator family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCondition")]
pub enum Condition {
    Equal {
        value: EqualValue,
        not: bool,
    },
    Like {
        pattern: ScalarValue,
        not: bool,
    },
    Range {
        greater: Option<ScalarValue>,
        lesser: Option<ScalarValue>,
        not: bool,
    },
    /// No operator given; compiles to nothing.
    Unspecified {
        not: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EqualValue {
    List(Vec<ScalarValue>),
    Single(ScalarValue),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCondition {
    #[serde(rename = "$_eq", default, deserialize_with = "present")]
    eq: Option<EqualValue>,
    #[serde(rename = "$_lk", default, deserialize_with = "present")]
    lk: Option<ScalarValue>,
    #[serde(rename = "$_gt", default)]
    gt: Option<ScalarValue>,
    #[serde(rename = "$_lt", default)]
    lt: Option<ScalarValue>,
    #[serde(rename = "$_not", default)]
    not: bool,
}

/// Keep an explicit `null` as a value rather than as an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TryFrom<RawCondition> for Condition {
    type Error = Error;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        let RawCondition {
            eq,
            lk,
            gt,
            lt,
            not,
        } = raw;
        let is_range = gt.is_some() || lt.is_some();

        match (eq, lk, is_range) {
            (None, None, false) => Ok(Condition::Unspecified { not }),
            (Some(value), None, false) => Ok(Condition::Equal { value, not }),
            (None, Some(pattern), false) => Ok(Condition::Like { pattern, not }),
            (None, None, true) => Ok(Condition::Range {
                greater: gt,
                lesser: lt,
                not,
            }),
            (eq, lk, is_range) => {
                let families: Vec<&str> = [
                    eq.is_some().then_some(EQUAL_KEY),
                    lk.is_some().then_some(LIKE_KEY),
                    is_range.then_some("$_gt/$_lt"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(Error::MixedOperators(families.join(", ")))
            }
        }
    }
}

impl Condition {
    pub fn equal(value: impl Into<ScalarValue>) -> Self {
        Condition::Equal {
            value: EqualValue::Single(value.into()),
            not: false,
        }
    }

    pub fn one_of<T: Into<ScalarValue>>(values: impl IntoIterator<Item = T>) -> Self {
        Condition::Equal {
            value: EqualValue::List(values.into_iter().map(Into::into).collect()),
            not: false,
        }
    }

    pub fn like(pattern: impl Into<ScalarValue>) -> Self {
        Condition::Like {
            pattern: pattern.into(),
            not: false,
        }
    }

    pub fn range(greater: Option<ScalarValue>, lesser: Option<ScalarValue>) -> Self {
        Condition::Range {
            greater,
            lesser,
            not: false,
        }
    }

    pub fn greater_than(value: impl Into<ScalarValue>) -> Self {
        Condition::range(Some(value.into()), None)
    }

    pub fn between(greater: impl Into<ScalarValue>, lesser: impl Into<ScalarValue>) -> Self {
        Condition::range(Some(greater.into()), Some(lesser.into()))
    }

    /// Flip the negation flag.
    #[must_use]
    pub fn negated(mut self) -> Self {
        match &mut self {
            Condition::Equal { not, .. }
            | Condition::Like { not, .. }
            | Condition::Range { not, .. }
            | Condition::Unspecified { not } => *not = !*not,
        }
        self
    }
}

impl TryFrom<IndexMap<String, Where>> for Search {
    type Error = Error;

    fn try_from(entries: IndexMap<String, Where>) -> Result<Self, Self::Error> {
        let mut search = Search::default();
        for (key, value) in entries {
            if key == NOT_KEY {
                match value {
                    Where::Value(ScalarValue::Bool(not)) => search.not = not,
                    _ => return Err(Error::InvalidNot),
                }
            } else if key.starts_with("$_") {
                return Err(Error::ReservedKey(key));
            } else {
                search.fields.insert(key, value);
            }
        }
        Ok(search)
    }
}

impl Search {
    pub fn new() -> Self {
        Search::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Where>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.not = !self.not;
        self
    }
}

impl<'de> Deserialize<'de> for Where {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Where::from_json(value).map_err(serde::de::Error::custom)
    }
}

impl Where {
    /// Objects are scalars when they carry `$_date` or `$_pending`, conditions when they carry
    /// an operator key, and nested filters otherwise.
    fn from_json(value: serde_json::Value) -> Result<Where, serde_json::Error> {
        match value {
            serde_json::Value::Array(_) => Ok(Where::List(serde_json::from_value(value)?)),
            serde_json::Value::Object(map) => {
                if map.contains_key(DATE_KEY) || map.contains_key(PENDING_KEY) {
                    Ok(Where::Value(serde_json::from_value(map.into())?))
                } else if map.keys().any(|key| OPERATOR_KEYS.contains(&key.as_str())) {
                    Ok(Where::Condition(serde_json::from_value(map.into())?))
                } else {
                    Ok(Where::Nested(serde_json::from_value(map.into())?))
                }
            }
            scalar => Ok(Where::Value(serde_json::from_value(scalar)?)),
        }
    }
}

impl From<ScalarValue> for Where {
    fn from(value: ScalarValue) -> Self {
        Where::Value(value)
    }
}

impl From<&str> for Where {
    fn from(value: &str) -> Self {
        Where::Value(value.into())
    }
}

impl From<i64> for Where {
    fn from(value: i64) -> Self {
        Where::Value(value.into())
    }
}

impl From<bool> for Where {
    fn from(value: bool) -> Self {
        Where::Value(value.into())
    }
}

impl From<Vec<ScalarValue>> for Where {
    fn from(values: Vec<ScalarValue>) -> Self {
        Where::List(values)
    }
}

impl From<Condition> for Where {
    fn from(condition: Condition) -> Self {
        Where::Condition(condition)
    }
}

impl From<Search> for Where {
    fn from(search: Search) -> Self {
        Where::Nested(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn parse(json: serde_json::Value) -> Search {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn reads_every_shape() {
        let search = parse(serde_json::json!({
            "name": "Bob",
            "id": [1, 2],
            "age": { "$_gt": 18, "$_lt": 30 },
            "type": { "$_eq": ["A", "B"], "$_not": true },
            "description": { "$_lk": "%tall%" },
            "birthDate": { "$_date": "2000-01-01" },
            "tags": { "name": "tag1", "$_not": true }
        }));

        assert!(!search.not);
        assert_eq!(search.fields["name"], Where::Value("Bob".into()));
        assert_eq!(
            search.fields["id"],
            Where::List(vec![ScalarValue::Int(1), ScalarValue::Int(2)])
        );
        assert_eq!(
            search.fields["age"],
            Where::Condition(Condition::between(18, 30))
        );
        assert_eq!(
            search.fields["type"],
            Where::Condition(Condition::one_of(["A", "B"]).negated())
        );
        assert_eq!(
            search.fields["description"],
            Where::Condition(Condition::like("%tall%"))
        );
        assert!(matches!(
            search.fields["birthDate"],
            Where::Value(ScalarValue::DateTime(_))
        ));
        assert_eq!(
            search.fields["tags"],
            Where::Nested(Search::new().with("name", "tag1").negated())
        );
    }

    #[test]
    fn keeps_field_order() {
        let search = parse(serde_json::json!({ "b": 1, "a": 2, "c": 3 }));
        let keys: Vec<&str> = search.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn explicit_null_equality_is_kept() {
        let search = parse(serde_json::json!({ "name": { "$_eq": null } }));
        assert_eq!(
            search.fields["name"],
            Where::Condition(Condition::Equal {
                value: EqualValue::Single(ScalarValue::Null),
                not: false
            })
        );
    }

    #[test]
    fn negation_only_object_is_a_nested_filter() {
        let search = parse(serde_json::json!({ "bioMetrics": { "$_not": true } }));
        assert_eq!(
            search.fields["bioMetrics"],
            Where::Nested(Search::new().negated())
        );
    }

    #[test]
    fn mixed_operator_families_are_rejected() {
        let error = serde_json::from_value::<Search>(serde_json::json!({
            "age": { "$_eq": 1, "$_gt": 0 }
        }))
        .unwrap_err();
        assert!(error.to_string().contains("mixes operator families"));
    }

    #[test]
    fn unknown_reserved_keys_are_rejected() {
        assert!(serde_json::from_value::<Search>(serde_json::json!({ "$_or": [] })).is_err());
        assert!(
            serde_json::from_value::<Search>(serde_json::json!({ "age": { "$_gt": 1, "$_ge": 2 } }))
                .is_err()
        );
        assert!(serde_json::from_value::<Search>(serde_json::json!({ "$_not": "yes" })).is_err());
    }
}
