use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults bundled with the binary, validated by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory mirrored verbatim into the output directory.
    pub static_dir: PathBuf,
    /// Directory searched recursively for `.md` pages.
    pub content_dir: PathBuf,
    /// Directory that receives the generated site. Deleted before each build.
    pub output_dir: PathBuf,
    /// HTML template containing `{{ Title }}` and `{{ Content }}`.
    pub template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("docs"),
            template: PathBuf::from("template.html"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// URL prefix for root-relative links, e.g. `/my-repo/` when hosted under a sub-path.
    pub basepath: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            basepath: "/".to_string(),
        }
    }
}

impl Config {
    /// Config parsed from the bundled `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return compiled defaults if not found.
    ///
    /// A file that fails to parse is logged and ignored.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
                return Self::compiled_default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Self::compiled_default()
            }
        }
    }

    /// Override the base path, e.g. from the command line.
    pub fn with_basepath(mut self, basepath: Option<String>) -> Self {
        if let Some(basepath) = basepath {
            self.site.basepath = basepath;
        }
        self
    }
}
