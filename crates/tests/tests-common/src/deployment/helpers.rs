//! Locating shared test files.

use std::path::{Path, PathBuf};

/// The directory holding the shared fixture configuration, relative to the project root.
pub const FIXTURE_CONFIGURATION_PATH: &str = "static/configuration";

/// Resolve a path relative to the root of the workspace.
pub fn get_path_from_project_root(path: impl AsRef<Path>) -> PathBuf {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("../../../");
    d.push(path);
    d
}
