//! # mdframe-render
//!
//! Page rendering for mdframe.
//!
//! Wraps converted articles in the page shell (askama) and runs the
//! rewrite pipeline over the result.

pub mod templates;

use askama::Template;
use mdframe_core::{Article, Config, PageConfig, RewritePipeline};
use thiserror::Error;

pub use templates::ArticleTemplate;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render page template: {0}")]
    Template(#[from] askama::Error),
}

/// Produces finished pages. Holds only configuration, so a single instance
/// serves every article in a run.
#[derive(Debug)]
pub struct PageRenderer {
    page: PageConfig,
    rewrites: RewritePipeline,
}

impl PageRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            page: config.page.clone(),
            rewrites: RewritePipeline::standard(&config.anchor_target),
        }
    }

    /// Render the page shell around `article`, then apply the rewrites
    pub fn render(&self, article: &Article) -> Result<String, RenderError> {
        let shell = ArticleTemplate::new(article, &self.page).render()?;
        Ok(self.rewrites.apply(&shell))
    }
}
