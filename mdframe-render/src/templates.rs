//! Askama template definitions.

use askama::Template;
use mdframe_core::{Article, PageConfig};

/// Standalone article page embedded by the hosting site's iframe
#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate<'a> {
    // Page metadata
    pub title: &'a str,

    // Content (already rendered markdown)
    pub content: &'a str,

    // Assets
    pub stylesheet: &'a str,
    pub math_script: &'a str,
    pub copy_icon: &'a str,

    // Raw CSS value, inserted unescaped
    pub font_family: &'a str,
}

impl<'a> ArticleTemplate<'a> {
    pub fn new(article: &'a Article, page: &'a PageConfig) -> Self {
        Self {
            title: &article.title,
            content: &article.content_html,
            stylesheet: &page.stylesheet,
            math_script: &page.math_script,
            copy_icon: &page.copy_icon,
            font_family: &page.font_family,
        }
    }
}
