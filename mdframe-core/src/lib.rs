//! # mdframe-core
//!
//! Core library for mdframe.
//!
//! This crate turns Markdown articles into HTML fragments (highlighted code
//! blocks, heading anchors, table of contents), loads configuration, and
//! provides the ordered rewrite rules applied to finished pages.

pub mod builder;
pub mod config;
pub mod markdown;
pub mod models;
pub mod rewrite;
pub mod slug;

pub use builder::{ArticleBuilder, BuildError};
pub use config::{Config, ConfigError, HighlightConfig, PageConfig, TocConfig};
pub use markdown::{CodeBlockRenderer, MarkdownProcessor, RenderedMarkdown, SyntectCodeRenderer};
pub use models::{output_path_for, Article, SourceDocument};
pub use rewrite::{RewritePipeline, RewriteRule};
pub use slug::slugify;
