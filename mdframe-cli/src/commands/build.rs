//! Build command implementation.

use super::load_config;
use anyhow::{Context, Result};
use mdframe_core::{ArticleBuilder, Config};
use mdframe_render::PageRenderer;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of converting one directory
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

/// Convert every Markdown file in `dir` (or the configured input directory)
pub fn build_dir(config_path: &Path, dir: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(|| config.input_dir());

    let summary = convert_dir(&config, &dir)?;

    tracing::info!("✓ Converted {} articles in {:?}", summary.written.len(), dir);
    if !summary.failed.is_empty() {
        tracing::warn!("{} articles failed to convert", summary.failed.len());
    }

    Ok(())
}

/// Convert all articles in `dir`.
///
/// Only a directory that cannot be listed is an error; a file that fails is
/// logged, recorded in the summary and skipped.
pub fn convert_dir(config: &Config, dir: &Path) -> Result<BuildSummary> {
    let builder = ArticleBuilder::new(config);
    let renderer = PageRenderer::new(config);

    let files = builder
        .discover(dir)
        .with_context(|| format!("Failed to list articles in {:?}", dir))?;

    tracing::info!("Found {} markdown files", files.len());

    let mut summary = BuildSummary::default();
    for path in files {
        match write_article(&builder, &renderer, &path) {
            Ok(output) => summary.written.push(output),
            Err(err) => {
                tracing::error!("Failed to convert {:?}: {:#}", path, err);
                summary.failed.push((path, err));
            }
        }
    }

    Ok(summary)
}

/// Convert one file and write its page next to it
pub(crate) fn write_article(
    builder: &ArticleBuilder,
    renderer: &PageRenderer,
    path: &Path,
) -> Result<PathBuf> {
    let article = builder.build_article(path)?;
    let html = renderer
        .render(&article)
        .with_context(|| format!("Failed to render {:?}", path))?;

    fs::write(&article.output_path, html)
        .with_context(|| format!("Failed to write {:?}", article.output_path))?;

    tracing::debug!("{:?} -> {:?}", path, article.output_path);
    Ok(article.output_path)
}
