//! Single-file conversion.

use super::{build::write_article, load_config};
use anyhow::{bail, Result};
use mdframe_core::ArticleBuilder;
use mdframe_render::PageRenderer;
use std::path::Path;

/// Convert one Markdown file into its sibling `.html` page
pub fn convert_file(config_path: &Path, file: &Path) -> Result<()> {
    if !mdframe_core::models::is_markdown(file) {
        bail!("{:?} is not a .md file", file);
    }

    let config = load_config(config_path)?;
    let builder = ArticleBuilder::new(&config);
    let renderer = PageRenderer::new(&config);

    let output = write_article(&builder, &renderer, file)?;
    tracing::info!("✓ {:?} -> {:?}", file, output);
    Ok(())
}
