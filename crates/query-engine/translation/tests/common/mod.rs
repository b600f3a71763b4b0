use std::fs;
use std::path::PathBuf;

use entity_sql_configuration::Configuration;
use query_engine_sql::sql;
use query_engine_translation::translation;
use tests_common::deployment::helpers::{get_path_from_project_root, FIXTURE_CONFIGURATION_PATH};

/// Load the shared fixture configuration.
pub async fn fixture_configuration() -> anyhow::Result<Configuration> {
    let parsed_configuration = entity_sql_configuration::parse_configuration(
        get_path_from_project_root(FIXTURE_CONFIGURATION_PATH),
    )
    .await?;
    Ok(entity_sql_configuration::make_runtime_configuration(
        parsed_configuration,
    )?)
}

/// Compile `tests/goldenfiles/<testname>/request.json` as a select on `entity`.
pub async fn test_translation(entity: &str, testname: &str) -> anyhow::Result<sql::string::SQL> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let configuration = fixture_configuration().await?;
    let env = translation::helpers::Env::new(&configuration.metadata, configuration.dialect);

    let request = serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    Ok(translation::compile_select(&request, &env, entity)?)
}

/// Count the placeholders of either style in a compiled statement.
pub fn placeholder_count(sql: &str) -> usize {
    sql.chars().filter(|c| *c == '?' || *c == '$').count()
}
