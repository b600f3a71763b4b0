//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {}:{line}:{column}: {message}", .file_path.display())]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version: {0}")]
    UnsupportedVersion(String),
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid entity metadata: {0}")]
    InvalidMetadata(#[from] query_engine_metadata::metadata::Error),
}
