pub mod configuration;
pub mod error;
pub mod version1;

pub use configuration::{generate_latest_schema, Configuration};
pub use version1::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};
