//! Command-line interface for datadir.
//!
//! Each subcommand maps onto one [`DataDirectory`] operation and lives in a
//! module grouped by concern:
//!
//! - [`entries`] - `tree`, `mkdir`, `exists`, `rmdir`, `rm`
//! - [`text`] - `cat`, `write`
//! - [`table`] - `show`, `convert`
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Enable debug logging
//! - `--quiet` / `-q` - Only log errors
//! - `--config` / `-c` - Configuration file (see [`crate::config`])
//! - `--base` / `-b` - Base directory, overriding the configured one
//!
//! # Examples
//!
//! ```bash
//! datadir --base ./data mkdir reports/2024
//! datadir --base ./data write reports/2024/notes.txt "first line" --mode a
//! datadir --base ./data convert raw.csv clean.parquet
//! datadir --base ./data show clean.parquet --limit 5
//! datadir --base ./data tree --json
//! ```
//!
//! # Exit Status
//!
//! `0` on success, `1` on any error. `exists` also exits with `1` when the path
//! does not exist, so it can drive shell conditionals.

pub mod entries;
pub mod table;
pub mod text;

use crate::config::DataDirConfig;
use crate::data_dir::DataDirectory;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Base directory used when neither `--base` nor the configuration sets one
pub const DEFAULT_BASE: &str = ".";

/// Logging settings derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the subscriber, `None` to defer to `RUST_LOG`
    pub log_level: Option<String>,
    /// Configuration file passed with `--config`
    pub config_path: Option<PathBuf>,
    /// Base directory passed with `--base`
    pub base_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install a stderr `tracing` subscriber for this configuration.
    ///
    /// Without an explicit level, `RUST_LOG` is honoured and `info` is the
    /// fallback. Safe to call more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the configuration file and open the data directory it describes.
    ///
    /// # Errors
    ///
    /// Fails if the configuration cannot be loaded or the directory cannot be
    /// opened.
    pub fn open_directory(&self) -> Result<DataDirectory> {
        let mut config = DataDirConfig::load_with_optional(self.config_path.clone())?;
        if let Some(base) = &self.base_path {
            config.base_path = Some(base.clone());
        }
        if config.base_path.is_none() {
            config.base_path = Some(PathBuf::from(DEFAULT_BASE));
        }

        let dir = DataDirectory::from_config(&config)
            .with_context(|| format!("Failed to open data directory {}", display_base(&config)))?;
        tracing::debug!("Using data directory {dir}");
        Ok(dir)
    }
}

fn display_base(config: &DataDirConfig) -> String {
    config.base_path.as_deref().map_or_else(|| DEFAULT_BASE.to_string(), |p| p.display().to_string())
}

/// Manage a data directory from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "datadir",
    about = "Manage a data directory: files, text, tables and serialized objects",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a datadir.toml configuration file
    #[arg(short, long, global = true, env = "DATADIR_CONFIG")]
    config: Option<PathBuf>,

    /// Base directory of the data directory (created if missing)
    #[arg(short, long, global = true)]
    base: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every directory and file under the base directory
    Tree(entries::TreeCommand),
    /// Create a subdirectory and its missing parents
    Mkdir(entries::MkdirCommand),
    /// Test whether a path exists (exit status 1 if not)
    Exists(entries::ExistsCommand),
    /// Remove a subdirectory
    Rmdir(entries::RmdirCommand),
    /// Remove a file
    Rm(entries::RmCommand),
    /// Print a text file
    Cat(text::CatCommand),
    /// Write or append text to a file
    Write(text::WriteCommand),
    /// Print a table read from a csv/txt/xlsx/parquet file
    Show(table::ShowCommand),
    /// Convert a table between formats
    Convert(table::ConvertCommand),
}

impl Cli {
    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            base_path: self.base.clone(),
        }
    }

    /// Run the parsed command.
    ///
    /// # Errors
    ///
    /// Returns any error raised while opening the directory or running the
    /// command; `main` renders it with
    /// [`user_friendly_error`](crate::core::user_friendly_error).
    pub fn execute(self) -> Result<ExitCode> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    /// Run the parsed command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Cli::execute`].
    pub fn execute_with_config(self, config: &CliConfig) -> Result<ExitCode> {
        let dir = config.open_directory()?;

        match self.command {
            Commands::Tree(cmd) => cmd.execute(&dir),
            Commands::Mkdir(cmd) => cmd.execute(&dir),
            Commands::Exists(cmd) => {
                return Ok(if cmd.execute(&dir) {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                });
            }
            Commands::Rmdir(cmd) => cmd.execute(&dir),
            Commands::Rm(cmd) => cmd.execute(&dir),
            Commands::Cat(cmd) => cmd.execute(&dir),
            Commands::Write(cmd) => cmd.execute(&dir),
            Commands::Show(cmd) => cmd.execute(&dir),
            Commands::Convert(cmd) => cmd.execute(&dir),
        }?;
        Ok(ExitCode::SUCCESS)
    }
}
