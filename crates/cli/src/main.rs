//! The entry point for the `entity-sql` CLI.
//!
//! It compiles requests against a configuration directory and prints the SQL and its
//! parameters as JSON.

use std::path::PathBuf;

use clap::Parser;

use entity_sql_cli::{run, Command, Context, DialectPreset};

/// The release version specified at build time.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "entity-sql", version = VERSION)]
pub struct Args {
    /// The configuration directory.
    #[arg(
        long = "configuration",
        value_name = "DIRECTORY",
        env = "ENTITY_SQL_CONFIGURATION",
        default_value = "."
    )]
    pub configuration_dir: PathBuf,

    /// Override the dialect set in the configuration.
    #[arg(long, value_enum)]
    pub dialect: Option<DialectPreset>,

    /// The command to invoke.
    #[command(subcommand)]
    pub subcommand: Command,
}

/// The application entrypoint. It pulls information from the environment and then calls the
/// [run] function.
#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let context = Context {
        configuration_dir: args.configuration_dir,
        dialect: args.dialect,
    };

    let mut stdout = std::io::stdout().lock();
    run(args.subcommand, &context, &mut stdout).await?;
    Ok(())
}
