//! Configuration for datadir.
//!
//! A data directory can be described by a small TOML file so that scripts and
//! the `datadir` binary agree on where the data lives and how tables are
//! written:
//!
//! ```toml
//! base_path = "/srv/data"
//! exist_ok = true
//! confine_paths = true
//!
//! [tabular]
//! include_index = false
//! delimiter = ","
//! sheet_name = "Sheet1"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above, except
//! `base_path` which has none.
//!
//! # Location
//!
//! [`DataDirConfig::load_with_optional`] looks for the file in this order:
//!
//! 1. An explicit path (the `--config` flag of the binary)
//! 2. The `DATADIR_CONFIG` environment variable
//! 3. `datadir.toml` in the current directory
//!
//! A missing file is not an error: defaults are used instead.

use crate::core::file_error::{FileOperation, FileResultExt};
use crate::data_dir::DataDirOptions;
use crate::tabular::WriteOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "DATADIR_CONFIG";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "datadir.toml";

/// Persisted settings for a [`DataDirectory`](crate::DataDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataDirConfig {
    /// Base path of the managed directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Accept an existing base directory
    pub exist_ok: bool,

    /// Reject relative paths escaping the base directory
    pub confine_paths: bool,

    /// Default tabular write options
    pub tabular: WriteOptions,
}

impl Default for DataDirConfig {
    fn default() -> Self {
        let options = DataDirOptions::default();
        Self {
            base_path: None,
            exist_ok: options.exist_ok,
            confine_paths: options.confine_paths,
            tabular: options.write_options,
        }
    }
}

impl DataDirConfig {
    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_file_context(
                FileOperation::Read,
                path,
                "reading configuration",
                "DataDirConfig::load_from",
            )
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration from the first location that applies.
    ///
    /// See the [module documentation](self) for the lookup order. Defaults are
    /// returned when the chosen file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file exists but cannot be loaded.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = config_path(path, std::env::var_os(CONFIG_ENV_VAR));
        if path.exists() {
            tracing::debug!(target: "datadir::config", "Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            tracing::debug!(target: "datadir::config", "No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty TOML, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_file_context(
                FileOperation::Write,
                path,
                "writing configuration",
                "DataDirConfig::save_to",
            )
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Construction options for [`DataDirectory::with_options`](crate::DataDirectory::with_options)
    #[must_use]
    pub fn options(&self) -> DataDirOptions {
        DataDirOptions {
            exist_ok: self.exist_ok,
            confine_paths: self.confine_paths,
            write_options: self.tabular.clone(),
        }
    }
}

fn config_path(explicit: Option<PathBuf>, from_env: Option<OsString>) -> PathBuf {
    explicit
        .or_else(|| from_env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
