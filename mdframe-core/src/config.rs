//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the mdframe.yml schema
///
/// Every field has a default, so a missing or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the Markdown articles
    pub input_dir: PathBuf,

    /// Page that same-document anchors are repointed at
    pub anchor_target: String,

    pub toc: TocConfig,
    pub page: PageConfig,
    pub highlight: HighlightConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

/// Table of contents and heading anchor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Class placed on the outermost TOC list
    pub class_name: String,

    /// Render a link inside every heading pointing at its own id
    pub anchor_link: bool,

    /// Text of the heading anchor link (may be empty)
    pub anchor_symbol: String,
}

/// Fixed parts of the generated page shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub stylesheet: String,
    pub copy_icon: String,
    pub math_script: String,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a syntect default theme
    pub theme: String,
}

pub const DEFAULT_INPUT_DIR: &str = "blogarticles";
pub const DEFAULT_ANCHOR_TARGET: &str = "readme.html";

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            anchor_target: DEFAULT_ANCHOR_TARGET.to_string(),
            toc: TocConfig::default(),
            page: PageConfig::default(),
            highlight: HighlightConfig::default(),
            config_path: None,
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            class_name: "toc".to_string(),
            anchor_link: true,
            anchor_symbol: String::new(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            stylesheet: "../assets/css/default.min.css".to_string(),
            copy_icon: "../assets/images/copy-24.png".to_string(),
            math_script: "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"
                .to_string(),
            font_family: "\"Calibri\", sans-serif".to_string(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "InspiredGitHub".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Serialize to YAML in the same shape `from_file` reads
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get the input directory, resolved relative to config file
    pub fn input_dir(&self) -> PathBuf {
        self.resolve_path(&self.input_dir)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}
