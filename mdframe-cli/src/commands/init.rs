//! Init command implementation.

use anyhow::{Context, Result};
use mdframe_core::Config;
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "mdframe.yml";

/// Write a default mdframe.yml and create the input directory
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config = Config::default();
    write_config(root, &config)?;

    let input_dir = root.join(&config.input_dir);
    fs::create_dir_all(&input_dir)
        .with_context(|| format!("Failed to create {:?}", input_dir))?;

    tracing::info!("✓ mdframe initialized in {:?}", root);
    tracing::info!("  - Put articles in {:?}", input_dir);
    Ok(())
}

fn write_config(root: &Path, config: &Config) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("{} already exists at {:?}", CONFIG_FILE, config_path);
        return Ok(());
    }

    let yaml = config.to_yaml().context("Failed to serialize default config")?;
    fs::write(&config_path, yaml).with_context(|| format!("Failed to write {:?}", config_path))?;
    tracing::info!("Created {:?}", config_path);
    Ok(())
}
