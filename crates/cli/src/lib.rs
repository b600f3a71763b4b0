//! The CLI can compile requests against a configuration directory, and initialize or describe
//! that configuration.
//!
//! The whole CLI is exposed as a library so it can be driven from tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use entity_sql_configuration as configuration;
use query_engine_models::models;
use query_engine_sql::sql;
use query_engine_translation::translation;

/// The various contextual bits and bobs we need to run.
pub struct Context {
    pub configuration_dir: PathBuf,
    /// Overrides the dialect of the configuration.
    pub dialect: Option<DialectPreset>,
}

/// The command invoked by the user.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compile a select request.
    Select {
        #[arg(long)]
        entity: String,
        /// JSON file holding the request.
        #[arg(long)]
        request: PathBuf,
        /// Format the SQL over several lines.
        #[arg(long)]
        pretty: bool,
    },
    /// Compile only the condition of a filter tree.
    Where {
        #[arg(long)]
        entity: String,
        /// JSON file holding the filter tree.
        #[arg(long)]
        search: PathBuf,
    },
    /// Compile an order tree.
    OrderBy {
        #[arg(long)]
        entity: String,
        /// JSON file holding the order tree.
        #[arg(long)]
        order: PathBuf,
    },
    /// Compile a multi-row insert.
    Insert {
        #[arg(long)]
        entity: String,
        /// JSON file holding an array of rows.
        #[arg(long)]
        rows: PathBuf,
        /// Format the SQL over several lines.
        #[arg(long)]
        pretty: bool,
    },
    /// Write an empty configuration, and its JSON schema, to the configuration directory.
    Initialize,
    /// Print the JSON schema of the configuration.
    PrintSchema,
}

/// Dialects selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DialectPreset {
    Generic,
    Sqlite,
    Postgres,
}

impl From<DialectPreset> for sql::dialect::Dialect {
    fn from(preset: DialectPreset) -> Self {
        match preset {
            DialectPreset::Generic => sql::dialect::Dialect::generic(),
            DialectPreset::Sqlite => sql::dialect::Dialect::sqlite(),
            DialectPreset::Postgres => sql::dialect::Dialect::postgres(),
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    sql: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a [sql::string::Param]>,
}

/// Run a command in a given directory, writing its result to `out`.
pub async fn run(command: Command, context: &Context, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Select {
            entity,
            request,
            pretty,
        } => {
            let request: models::Request = read_json(&request).await?;
            let configuration = load(context).await?;
            let env = env_for(&configuration, context);
            let compiled = translation::compile_select(&request, &env, &entity)?;
            print_sql(out, &compiled, pretty)?;
        }
        Command::Where { entity, search } => {
            let search: models::Search = read_json(&search).await?;
            let configuration = load(context).await?;
            let env = env_for(&configuration, context);
            let compiled = translation::compile_where(&search, &env, &entity)?;
            print_sql(out, &compiled, false)?;
        }
        Command::OrderBy { entity, order } => {
            let order: models::Order = read_json(&order).await?;
            let configuration = load(context).await?;
            let env = env_for(&configuration, context);
            let compiled = translation::compile_order_by(&order, &env, &entity)?;
            print_json(
                out,
                &Output {
                    sql: &compiled,
                    params: None,
                },
            )?;
        }
        Command::Insert {
            entity,
            rows,
            pretty,
        } => {
            let rows: Vec<models::Entity> = read_json(&rows).await?;
            let configuration = load(context).await?;
            let env = env_for(&configuration, context);
            let compiled = translation::compile_insert(&rows, &env, &entity)?;
            print_sql(out, &compiled, pretty)?;
        }
        Command::Initialize => initialize(context).await?,
        Command::PrintSchema => print_json(out, &configuration::generate_latest_schema())?,
    };
    Ok(())
}

/// Initialize an empty configuration in the configuration directory.
///
/// An existing configuration is never overwritten.
async fn initialize(context: &Context) -> anyhow::Result<()> {
    let configuration_file = context
        .configuration_dir
        .join(configuration::version1::CONFIGURATION_FILENAME);
    if configuration_file.exists() {
        anyhow::bail!(
            "A configuration already exists in {}",
            context.configuration_dir.display()
        );
    }

    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::empty(),
        &context.configuration_dir,
    )
    .await?;
    log::info!(
        "Wrote an empty configuration to {}",
        context.configuration_dir.display()
    );
    Ok(())
}

async fn load(context: &Context) -> anyhow::Result<configuration::Configuration> {
    let parsed = configuration::parse_configuration(&context.configuration_dir).await?;
    let configuration = configuration::make_runtime_configuration(parsed)?;
    log::debug!(
        "Loaded {} entities from {}",
        configuration.metadata.entities.len(),
        context.configuration_dir.display()
    );
    Ok(configuration)
}

fn env_for<'a>(
    configuration: &'a configuration::Configuration,
    context: &Context,
) -> translation::helpers::Env<'a> {
    let dialect = context
        .dialect
        .map_or(configuration.dialect, sql::dialect::Dialect::from);
    translation::helpers::Env::new(&configuration.metadata, dialect)
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Could not parse {}", path.display()))
}

fn print_sql(out: &mut impl Write, compiled: &sql::string::SQL, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        sqlformat::format(
            &compiled.sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        )
    } else {
        compiled.sql.clone()
    };
    print_json(
        out,
        &Output {
            sql: &text,
            params: Some(&compiled.params),
        },
    )
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
