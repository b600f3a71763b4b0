//! The entity graph most tests run against: people with tags, bio metrics, vehicles and
//! parents. It matches `static/configuration/configuration.json`.

use query_engine_metadata::metadata::{
    BridgeLink, EntityInfo, IncomingLink, Metadata, OutgoingLink,
};

pub fn tag() -> EntityInfo {
    EntityInfo::new("tags").column("id", "id").column("name", "name")
}

pub fn bio_metrics() -> EntityInfo {
    EntityInfo::new("bio_metrics")
        .column("id", "id")
        .column("height", "height")
        .column("hairColor", "hair_color")
        .column("eyeColor", "eye_color")
}

pub fn vehicle() -> EntityInfo {
    EntityInfo::new("vehicles")
        .column("id", "id")
        .column("type", "type")
        .column("brand", "brand")
        .column("model", "model")
        .column("year", "year")
        .bridge(
            "tags",
            BridgeLink {
                target: "tag".to_string(),
                bridge_table: "vehicle_tags".to_string(),
                source_ref_key: "id".to_string(),
                target_ref_key: "id".to_string(),
                bridge_source_foreign_key: "vehicleId".to_string(),
                bridge_target_foreign_key: "tagId".to_string(),
            },
        )
        .outgoing("owner", outgoing("person", "ownerId"))
}

pub fn person() -> EntityInfo {
    EntityInfo::new("person")
        .column("id", "id")
        .column("name", "name")
        .column("birthDate", "birthDate")
        .column("description", "description")
        .column("age", "age")
        .column("type", "type")
        .column("isActive", "isActive")
        .bridge(
            "tags",
            BridgeLink {
                target: "tag".to_string(),
                bridge_table: "person_tags".to_string(),
                source_ref_key: "id".to_string(),
                target_ref_key: "id".to_string(),
                bridge_source_foreign_key: "person_id".to_string(),
                bridge_target_foreign_key: "tag_id".to_string(),
            },
        )
        .outgoing("bioMetrics", outgoing("bioMetrics", "bioMetricsId"))
        .incoming(
            "vehicles",
            IncomingLink {
                target: "vehicle".to_string(),
                source_ref_key: "id".to_string(),
                target_foreign_key: "ownerId".to_string(),
            },
        )
        .outgoing("father", outgoing("person", "fatherId"))
        .outgoing("mother", outgoing("person", "motherId"))
}

fn outgoing(target: &str, source_foreign_key: &str) -> OutgoingLink {
    OutgoingLink {
        target: target.to_string(),
        source_foreign_key: source_foreign_key.to_string(),
        target_ref_key: "id".to_string(),
    }
}

/// The whole graph, built in code.
pub fn people_metadata() -> Metadata {
    Metadata::empty()
        .with_entity("person", person())
        .with_entity("tag", tag())
        .with_entity("bioMetrics", bio_metrics())
        .with_entity("vehicle", vehicle())
}
