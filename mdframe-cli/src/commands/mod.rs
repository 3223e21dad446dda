//! CLI command implementations.

pub mod build;
pub mod convert;
pub mod init;

pub use build::build_dir;
pub use convert::convert_file;
pub use init::init_project;

use anyhow::{Context, Result};
use mdframe_core::Config;
use std::path::Path;

/// Load the config file, or defaults when it does not exist
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {:?}", config_path);
    Config::load_or_default(config_path).context("Failed to load configuration")
}
