//! Article discovery and conversion.

use crate::{
    config::Config,
    markdown::MarkdownProcessor,
    models::{is_markdown, Article, SourceDocument},
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Converts Markdown articles into HTML fragments.
///
/// Built once per run and shared across files.
pub struct ArticleBuilder {
    processor: MarkdownProcessor,
}

impl ArticleBuilder {
    pub fn new(config: &Config) -> Self {
        Self::with_processor(MarkdownProcessor::from_config(config))
    }

    pub fn with_processor(processor: MarkdownProcessor) -> Self {
        Self { processor }
    }

    /// List the Markdown files directly inside `dir`, sorted by file name.
    ///
    /// Subdirectories are not descended into. Symlinks count when their
    /// target is a regular file.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
        // walkdir yields a lone file root without complaint
        if dir.exists() && !dir.is_dir() {
            return Err(BuildError::DirectoryRead {
                path: dir.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(BuildError::DirectoryRead {
                        path: dir.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, err);
                    continue;
                }
            };

            if entry.path().is_file() && is_markdown(entry.path()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!("Found {} markdown files in {:?}", files.len(), dir);
        Ok(files)
    }

    /// Read a Markdown file from disk
    pub fn read_source(&self, path: &Path) -> Result<SourceDocument, BuildError> {
        let text = fs::read_to_string(path).map_err(|source| BuildError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SourceDocument {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Convert an already loaded document
    pub fn build_source(&self, source: &SourceDocument) -> Article {
        let rendered = self.processor.convert(&source.text);
        let title = rendered
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| source.stem());

        Article {
            source_path: source.path.clone(),
            output_path: source.output_path(),
            title,
            content_html: rendered.html,
        }
    }

    /// Read and convert a single Markdown file
    pub fn build_article(&self, path: &Path) -> Result<Article, BuildError> {
        let source = self.read_source(path)?;
        Ok(self.build_source(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "# B").unwrap();
        fs::write(dir.path().join("a.md"), "# A").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("a.html"), "old").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.md"), "# C").unwrap();

        let builder = ArticleBuilder::new(&Config::default());
        let files = builder.discover(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.md"), dir.path().join("b.md")]
        );
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("blogarticles");

        let builder = ArticleBuilder::new(&Config::default());
        let err = builder.discover(&missing).unwrap_err();
        assert!(matches!(err, BuildError::DirectoryRead { .. }));
    }

    #[test]
    fn test_discover_file_instead_of_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("blogarticles");
        fs::write(&file, "not a directory").unwrap();

        let builder = ArticleBuilder::new(&Config::default());
        let err = builder.discover(&file).unwrap_err();
        assert!(matches!(err, BuildError::DirectoryRead { .. }));
        assert!(err.to_string().contains("not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_file_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let other = tempdir().unwrap();
        fs::write(other.path().join("real.md"), "# Real").unwrap();
        fs::create_dir(other.path().join("folder.md")).unwrap();
        symlink(other.path().join("real.md"), dir.path().join("linked.md")).unwrap();
        symlink(other.path().join("folder.md"), dir.path().join("dir-link.md")).unwrap();
        symlink(other.path().join("gone.md"), dir.path().join("dangling.md")).unwrap();

        let builder = ArticleBuilder::new(&Config::default());
        let files = builder.discover(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("linked.md")]);
    }

    #[test]
    fn test_build_article_title() {
        let dir = tempdir().unwrap();
        let with_heading = dir.path().join("post.md");
        let without_heading = dir.path().join("plain-notes.md");
        fs::write(&with_heading, "intro\n\n# Real Title\n").unwrap();
        fs::write(&without_heading, "just text").unwrap();

        let builder = ArticleBuilder::new(&Config::default());
        let article = builder.build_article(&with_heading).unwrap();
        assert_eq!(article.title, "Real Title");
        assert_eq!(article.output_path, dir.path().join("post.html"));
        assert!(article.content_html.contains("<p>intro</p>"));

        let article = builder.build_article(&without_heading).unwrap();
        assert_eq!(article.title, "plain-notes");
    }

    #[test]
    fn test_build_article_unreadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.md");

        let builder = ArticleBuilder::new(&Config::default());
        let err = builder.build_article(&path).unwrap_err();
        assert!(matches!(err, BuildError::FileRead { .. }));
        assert!(err.to_string().contains("gone.md"));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let builder = ArticleBuilder::new(&Config::default());
        assert!(matches!(
            builder.build_article(&path),
            Err(BuildError::FileRead { .. })
        ));
    }
}
