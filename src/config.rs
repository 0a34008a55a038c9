//! Configuration loaded from `~/.config/doctab/config.toml`.
//!
//! ```toml
//! credentials = "/path/to/service-account.json"
//! document_id = "1abc..."
//! api_base = "https://docs.googleapis.com"
//! ```
//!
//! Every field is optional. Command-line arguments take precedence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::doc_id::DEFAULT_DOCUMENT_ID;
use crate::http_client::DEFAULT_API_BASE;

/// Key file used when nothing else names one.
pub const DEFAULT_CREDENTIALS: &str = "credentials.json";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub credentials: Option<PathBuf>,
    pub document_id: Option<String>,
    pub api_base: Option<String>,
}

impl Config {
    /// Load the config file.
    ///
    /// With `path == None` the default location is used and a missing file
    /// yields defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    pub fn credentials_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.credentials.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS))
    }

    pub fn document(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.document_id.clone())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_ID.to_string())
    }

    pub fn api_base(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
}

/// Return the path to the default config file.
fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("doctab")
        .join("config.toml")
}
