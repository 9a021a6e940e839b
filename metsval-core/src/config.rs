//! Configuration for schema lookup and validation policy.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Media type reserved for PAGE descriptors inside a manifest.
pub const PAGE_MEDIA_TYPE: &str = "application/vnd.prima.page+xml";

/// Error returned when a configuration file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the schema registry and the workspace validator.
///
/// # Examples
/// ```rust
/// use metsval_core::config::Config;
///
/// let config = Config::default().with_schema_dir("schemas").with_check_pages(true);
/// assert!(config.check_pages());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    schema_dir: Option<PathBuf>,
    page_media_type: String,
    check_pages: bool,
    warn_optional_fields: bool,
}

impl Config {
    /// Load a configuration from a TOML file. Missing keys fall back to defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = Some(dir.into());
        self
    }

    pub fn with_page_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.page_media_type = media_type.into();
        self
    }

    pub fn with_check_pages(mut self, enabled: bool) -> Self {
        self.check_pages = enabled;
        self
    }

    pub fn with_warn_optional_fields(mut self, enabled: bool) -> Self {
        self.warn_optional_fields = enabled;
        self
    }

    /// Directory with extra `*.xsd` files registered after the bundled schemas.
    pub fn schema_dir(&self) -> Option<&Path> {
        self.schema_dir.as_deref()
    }

    pub fn page_media_type(&self) -> &str {
        &self.page_media_type
    }

    pub fn check_pages(&self) -> bool {
        self.check_pages
    }

    pub fn warn_optional_fields(&self) -> bool {
        self.warn_optional_fields
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_dir: None,
            page_media_type: PAGE_MEDIA_TYPE.to_string(),
            check_pages: false,
            warn_optional_fields: true,
        }
    }
}
