//! The serialized form of entity metadata, as it appears in configuration.
//!
//! Relation objects are told apart by which keys they carry. They are classified once, when
//! the [`super::Metadata`] graph is built, and never probed again at query time.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single entity: its table and its field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub table_name: String,
    #[serde(default)]
    pub fields: IndexMap<String, RawField>,
}

/// A field is either a column name or a relation object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawField {
    Column(String),
    Relation(RawRelation),
}

/// An unclassified relation. Which keys are present decides its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RawRelation {
    /// Name of the entity this relation points at.
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_ref_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_source_foreign_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_target_foreign_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_foreign_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_foreign_key: Option<String>,
}
