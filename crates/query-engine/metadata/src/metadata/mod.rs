//! Metadata information regarding the mapping of entities onto tables.

pub mod entities;
pub mod error;
pub mod raw;

// re-export without modules
pub use entities::*;
pub use error::Error;

use std::collections::BTreeMap;

use raw::{RawEntity, RawField, RawRelation};

/// The entity graph, keyed by entity name.
///
/// Relations refer to their target by name, so the graph may contain cycles (an entity linking
/// to itself, or two entities linking to each other) without any shared ownership.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Metadata {
    pub entities: BTreeMap<EntityName, EntityInfo>,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            entities: BTreeMap::new(),
        }
    }

    /// Add (or replace) an entity. Targets are not checked; use [`Metadata::validate`].
    #[must_use]
    pub fn with_entity(mut self, name: impl Into<EntityName>, entity: EntityInfo) -> Self {
        self.entities.insert(name.into(), entity);
        self
    }

    pub fn entity(&self, name: &str) -> Option<&EntityInfo> {
        self.entities.get(name)
    }

    /// Check that every relation points at a known entity.
    pub fn validate(&self) -> Result<(), Error> {
        for (entity_name, entity) in &self.entities {
            for (field, info) in &entity.fields {
                if let FieldInfo::Relation(relation) = info {
                    if !self.entities.contains_key(relation.target()) {
                        return Err(Error::UnknownTargetEntity {
                            entity: entity_name.clone(),
                            field: field.clone(),
                            target: relation.target().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Build and validate the graph from its serialized form.
    pub fn build(raw: &BTreeMap<EntityName, RawEntity>) -> Result<Metadata, Error> {
        let entities = raw
            .iter()
            .map(|(name, raw_entity)| Ok((name.clone(), build_entity(name, raw_entity)?)))
            .collect::<Result<BTreeMap<_, _>, Error>>()?;

        let metadata = Metadata { entities };
        metadata.validate()?;
        tracing::debug!(entities = metadata.entities.len(), "built metadata graph");
        Ok(metadata)
    }
}

fn build_entity(entity_name: &str, raw: &RawEntity) -> Result<EntityInfo, Error> {
    let fields = raw
        .fields
        .iter()
        .map(|(field, raw_field)| {
            let info = match raw_field {
                RawField::Column(column) => FieldInfo::Column(column.clone()),
                RawField::Relation(relation) => {
                    FieldInfo::Relation(classify_relation(relation).ok_or_else(|| {
                        Error::UnsupportedRelation {
                            entity: entity_name.to_string(),
                            field: field.clone(),
                        }
                    })?)
                }
            };
            Ok((field.clone(), info))
        })
        .collect::<Result<_, Error>>()?;

    Ok(EntityInfo {
        table_name: raw.table_name.clone(),
        fields,
    })
}

/// Decide which kind of relation a raw relation object describes.
///
/// A bridge table wins over everything else; then a foreign key on the source side makes an
/// outgoing link, and a foreign key on the target side makes an incoming one.
fn classify_relation(raw: &RawRelation) -> Option<Relation> {
    let target = raw.target.clone();

    if let Some(bridge_table) = &raw.bridge_table {
        return Some(Relation::Bridge(BridgeLink {
            target,
            bridge_table: bridge_table.clone(),
            source_ref_key: raw.source_ref_key.clone()?,
            target_ref_key: raw.target_ref_key.clone()?,
            bridge_source_foreign_key: raw.bridge_source_foreign_key.clone()?,
            bridge_target_foreign_key: raw.bridge_target_foreign_key.clone()?,
        }));
    }

    if let Some(source_foreign_key) = &raw.source_foreign_key {
        return Some(Relation::Outgoing(OutgoingLink {
            target,
            source_foreign_key: source_foreign_key.clone(),
            target_ref_key: raw.target_ref_key.clone()?,
        }));
    }

    if let Some(target_foreign_key) = &raw.target_foreign_key {
        return Some(Relation::Incoming(IncomingLink {
            target,
            source_ref_key: raw.source_ref_key.clone()?,
            target_foreign_key: target_foreign_key.clone(),
        }));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn parse(json: serde_json::Value) -> BTreeMap<EntityName, RawEntity> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn builds_self_referencing_graph() {
        let raw = parse(serde_json::json!({
            "person": {
                "tableName": "person",
                "fields": {
                    "id": "id",
                    "name": "full_name",
                    "father": { "target": "person", "sourceForeignKey": "fatherId", "targetRefKey": "id" },
                    "children": { "target": "person", "sourceRefKey": "id", "targetForeignKey": "fatherId" }
                }
            }
        }));

        let metadata = Metadata::build(&raw).unwrap();
        let person = metadata.entity("person").unwrap();

        assert_eq!(person.column_name("name"), Some("full_name"));
        assert_eq!(person.column_name("unmapped"), Some("unmapped"));
        assert_eq!(person.column_name("father"), None);
        assert_eq!(
            person.field("father"),
            Some(&FieldInfo::Relation(Relation::Outgoing(OutgoingLink {
                target: "person".to_string(),
                source_foreign_key: "fatherId".to_string(),
                target_ref_key: "id".to_string(),
            })))
        );
        assert_eq!(
            person.field("children"),
            Some(&FieldInfo::Relation(Relation::Incoming(IncomingLink {
                target: "person".to_string(),
                source_ref_key: "id".to_string(),
                target_foreign_key: "fatherId".to_string(),
            })))
        );
    }

    #[test]
    fn bridge_table_takes_precedence() {
        let raw = parse(serde_json::json!({
            "person": {
                "tableName": "person",
                "fields": {
                    "tags": {
                        "target": "tag",
                        "bridgeTable": "person_tags",
                        "sourceRefKey": "id",
                        "targetRefKey": "id",
                        "bridgeSourceForeignKey": "person_id",
                        "bridgeTargetForeignKey": "tag_id",
                        "sourceForeignKey": "ignored"
                    }
                }
            },
            "tag": { "tableName": "tags", "fields": { "id": "id" } }
        }));

        let metadata = Metadata::build(&raw).unwrap();
        assert!(matches!(
            metadata.entity("person").unwrap().field("tags"),
            Some(FieldInfo::Relation(Relation::Bridge(BridgeLink { bridge_table, .. }))) if bridge_table == "person_tags"
        ));
    }

    #[test]
    fn relation_without_a_recognized_shape_is_rejected() {
        let raw = parse(serde_json::json!({
            "person": {
                "tableName": "person",
                "fields": { "friends": { "target": "person", "targetRefKey": "id" } }
            }
        }));

        assert_eq!(
            Metadata::build(&raw),
            Err(Error::UnsupportedRelation {
                entity: "person".to_string(),
                field: "friends".to_string(),
            })
        );
    }

    #[test]
    fn incomplete_bridge_is_rejected() {
        let raw = parse(serde_json::json!({
            "person": {
                "tableName": "person",
                "fields": { "tags": { "target": "person", "bridgeTable": "person_tags", "sourceRefKey": "id" } }
            }
        }));

        assert!(matches!(
            Metadata::build(&raw),
            Err(Error::UnsupportedRelation { field, .. }) if field == "tags"
        ));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let raw = parse(serde_json::json!({
            "person": {
                "tableName": "person",
                "fields": { "car": { "target": "vehicle", "sourceForeignKey": "carId", "targetRefKey": "id" } }
            }
        }));

        assert_eq!(
            Metadata::build(&raw),
            Err(Error::UnknownTargetEntity {
                entity: "person".to_string(),
                field: "car".to_string(),
                target: "vehicle".to_string(),
            })
        );
    }

    #[test]
    fn columns_keep_declaration_order() {
        let entity = EntityInfo::new("person")
            .column("id", "id")
            .outgoing(
                "bioMetrics",
                OutgoingLink {
                    target: "bio".to_string(),
                    source_foreign_key: "bioMetricsId".to_string(),
                    target_ref_key: "id".to_string(),
                },
            )
            .column("name", "name")
            .column("birthDate", "birth_date");

        let columns: Vec<_> = entity.columns().collect();
        assert_eq!(
            columns,
            vec![("id", "id"), ("name", "name"), ("birthDate", "birth_date")]
        );
    }
}
