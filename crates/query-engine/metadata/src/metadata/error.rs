//! Errors raised while building the metadata graph.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("relation '{field}' of entity '{entity}' is not a bridge, outgoing or incoming link")]
    UnsupportedRelation { entity: String, field: String },
    #[error("relation '{field}' of entity '{entity}' points at unknown entity '{target}'")]
    UnknownTargetEntity {
        entity: String,
        field: String,
        target: String,
    },
}
