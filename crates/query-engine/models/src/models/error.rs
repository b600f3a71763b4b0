//! Errors raised while reading request data.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("condition mixes operator families: {0}")]
    MixedOperators(String),
    #[error("'{0}' is not a recognized date or timestamp")]
    InvalidDate(String),
    #[error("integer {0} does not fit in 64 signed bits")]
    IntegerOutOfRange(String),
    #[error("unknown reserved key '{0}'")]
    ReservedKey(String),
    #[error("'$_not' must be a boolean")]
    InvalidNot,
}
