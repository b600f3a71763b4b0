//! Errors for translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Entity '{0}' not found.")]
    EntityNotFound(String),
    #[error("Value '{0}' is still pending and cannot be used as a parameter.")]
    InvalidScalar(String),
    #[error("{0} is not supported.")]
    NotSupported(String),
    #[error("No rows to insert into entity '{0}'.")]
    EmptyInsert(String),
    #[error("Entity '{0}' has no columns to insert into.")]
    NoInsertColumns(String),
}
