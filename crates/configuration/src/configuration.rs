//! Configuration for the compiler.

use std::sync::Arc;

use query_engine_metadata::metadata;
use query_engine_sql::sql::dialect::Dialect;
use schemars::{gen::SchemaSettings, schema::RootSchema};

use crate::version1::ParsedConfiguration;

/// The 'Configuration' type collects all the information necessary to compile requests at
/// runtime.
///
/// 'ParsedConfiguration' is the serialized format, where relations are still untyped objects.
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which classifies and checks every relation once.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: Arc<metadata::Metadata>,
    pub dialect: Dialect,
}

/// The JSON schema of the current configuration format.
pub fn generate_latest_schema() -> RootSchema {
    SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<ParsedConfiguration>()
}
