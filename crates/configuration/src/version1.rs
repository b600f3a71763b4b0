//! Version 1 of the configuration format.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use query_engine_metadata::metadata::{self, raw::RawEntity};
use query_engine_sql::sql::dialect::Dialect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::configuration::{generate_latest_schema, Configuration};
use crate::error::{
    MakeRuntimeConfigurationError, ParseConfigurationError, WriteParsedConfigurationError,
};

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
const CURRENT_VERSION: &str = "1";

/// The configuration as it is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using
    pub version: Version,
    /// Placeholder and boolean conventions of the target database
    #[serde(default)]
    pub dialect: Dialect,
    /// Entities by logical name
    #[serde(default)]
    pub entities: BTreeMap<metadata::EntityName, RawEntity>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub enum Version {
    #[serde(rename = "1")]
    This,
}

impl ParsedConfiguration {
    pub fn empty() -> Self {
        ParsedConfiguration {
            version: Version::This,
            dialect: Dialect::default(),
            entities: BTreeMap::new(),
        }
    }
}

/// Parse the configuration found in `configuration_dir`.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let to_parse_error = |error: serde_json::Error| ParseConfigurationError::ParseError {
        file_path: configuration_file.clone(),
        line: error.line(),
        column: error.column(),
        message: error.to_string(),
    };

    // check the version first so an old or future format gets a clear error
    let value: serde_json::Value =
        serde_json::from_str(&configuration_file_contents).map_err(to_parse_error)?;
    match value.get("version") {
        Some(serde_json::Value::String(version)) if version == CURRENT_VERSION => {}
        Some(other) => {
            return Err(ParseConfigurationError::UnsupportedVersion(
                other.to_string(),
            ))
        }
        None => {
            return Err(ParseConfigurationError::UnsupportedVersion(
                "<missing>".to_string(),
            ))
        }
    }

    let parsed_config: ParsedConfiguration =
        serde_json::from_str(&configuration_file_contents).map_err(to_parse_error)?;

    tracing::debug!(
        entities = parsed_config.entities.len(),
        path = %configuration_file.display(),
        "parsed configuration"
    );
    Ok(parsed_config)
}

/// Write the parsed configuration, and the schema it follows, into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)? + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = generate_latest_schema();
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)? + "\n",
    )
    .await?;

    Ok(())
}

/// Build the runtime configuration. This is where every relation gets classified, so a
/// malformed relation or a dangling target is reported here.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let metadata = metadata::Metadata::build(&parsed_config.entities)?;
    Ok(Configuration {
        metadata: Arc::new(metadata),
        dialect: parsed_config.dialect,
    })
}
