//! Library configuration module.
//!
//! Handles loading and validating `config.toml` from the library root.
//! All settings have stock defaults; a user config file is sparse and only
//! overrides the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [repository]
//! owner = "policingcs-ethos"   # GitHub account serving the raw files
//! repo = "Buku-Polisi"         # Repository name
//! branch = "main"              # Branch spliced into the raw URLs
//!
//! [library]
//! ebook_dir = "Ebook Booklet"  # Document directory, relative to the root
//! cover_dir = "Cover Booklet"  # Cover directory, relative to the root
//! author = "CSP Team"          # Author label stamped on every record
//! output = "books.json"        # Manifest filename, written under the root
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Library configuration loaded from `config.toml`.
///
/// User config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Where the raw content URLs point.
    pub repository: RepositoryConfig,
    /// Directory names, author label, and output filename.
    pub library: LibraryConfig,
}

impl ShelfConfig {
    /// Validate config values before they reach URL construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repository.owner.is_empty() || self.repository.repo.is_empty() {
            return Err(ConfigError::Validation(
                "repository.owner and repository.repo must be set".into(),
            ));
        }
        if self.repository.branch.is_empty() || self.repository.branch.contains('/') {
            // The branch is spliced into the URL path unencoded; a slash
            // would silently address a different ref.
            return Err(ConfigError::Validation(
                "repository.branch must be a single path segment".into(),
            ));
        }
        if self.library.ebook_dir.is_empty() {
            return Err(ConfigError::Validation(
                "library.ebook_dir must not be empty".into(),
            ));
        }
        if self.library.output.is_empty() {
            return Err(ConfigError::Validation(
                "library.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// GitHub coordinates the raw content URLs are built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: "policingcs-ethos".to_string(),
            repo: "Buku-Polisi".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Library layout and record settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Document directory, relative to the library root.
    pub ebook_dir: String,
    /// Cover directory, relative to the library root.
    pub cover_dir: String,
    /// Author label stamped on every record.
    pub author: String,
    /// Manifest filename, written under the library root.
    pub output: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            ebook_dir: "Ebook Booklet".to_string(),
            cover_dir: "Cover Booklet".to_string(),
            author: "CSP Team".to_string(),
            output: "books.json".to_string(),
        }
    }
}

/// Load config from `config.toml` in the library root.
///
/// Stock defaults apply when the file is absent. Rejects unknown keys and
/// validates the result.
pub fn load_config(root: &Path) -> Result<ShelfConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: ShelfConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        ShelfConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Shelfgen Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in the library root (the directory the
# ebook and cover folders live in). Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Repository - where the raw content URLs point
# ---------------------------------------------------------------------------
[repository]
# GitHub account and repository serving the files.
owner = "policingcs-ethos"
repo = "Buku-Polisi"

# Branch spliced into every raw URL. Must be a single path segment.
branch = "main"

# ---------------------------------------------------------------------------
# Library - directory layout and record settings
# ---------------------------------------------------------------------------
[library]
# Document directory, relative to the library root. One record per .pdf.
ebook_dir = "Ebook Booklet"

# Cover directory, relative to the library root. Covers are paired to
# documents by basename; if the directory is missing, records get a null
# cover.
cover_dir = "Cover Booklet"

# Author label stamped on every record.
author = "CSP Team"

# Manifest filename, written under the library root. Overwritten each run.
output = "books.json"
"##
}
