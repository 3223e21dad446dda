//! Data model: source documents and their rendered articles.

use std::path::{Path, PathBuf};

/// Extension that marks a file as a Markdown article
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension of the generated pages
pub const HTML_EXTENSION: &str = "html";

/// A Markdown file read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    /// Sibling path of the generated page
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.path)
    }

    /// File name without its extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A converted article, ready to be wrapped in the page shell
#[derive(Debug, Clone)]
pub struct Article {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    /// First top-level heading, or the file stem when there is none
    pub title: String,
    pub content_html: String,
}

/// Same directory, same base name, `.html` extension
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(HTML_EXTENSION)
}

/// Whether `path` names a Markdown article
pub fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(MARKDOWN_EXTENSION)
}
