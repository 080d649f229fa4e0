//! The managed data directory.
//!
//! A [`DataDirectory`] is rooted at a base path that it creates on
//! construction. Every operation takes a path *relative* to that base, resolves
//! it with [`DataDirectory::resolve`], and performs one filesystem action:
//!
//! - [`entries`] - existence predicates, subdirectory creation and removal, file removal
//! - [`tree`] - recursive enumeration into a [`DirectoryTree`]
//! - [`text`] - line-oriented text reads and overwrite/append writes
//! - [`tables`] - extension-dispatched [`Table`](crate::tabular::Table) reads and writes
//! - [`objects`] - arbitrary values persisted with `borsh`
//!
//! Operations are synchronous and hold no state besides the base path and
//! options, so a directory can be shared freely between threads. Nothing is
//! locked: concurrent writers to the same file race at the filesystem level.
//!
//! # Examples
//!
//! ```rust,no_run
//! use datadir::{DataDirectory, WriteMode};
//!
//! # fn example() -> datadir::core::Result<()> {
//! let dir = DataDirectory::new("/tmp/datadir-demo")?;
//! dir.create_subdir("notes", true)?;
//! dir.write_text("notes/today.txt", ["first\n", "second\n"], WriteMode::Overwrite)?;
//! assert_eq!(dir.read_lines("notes/today.txt")?, vec!["first", "second"]);
//! # Ok(())
//! # }
//! ```

pub mod entries;
pub mod objects;
pub mod tables;
pub mod text;
pub mod tree;

pub use text::{TextContent, WriteMode};
pub use tree::DirectoryTree;

use crate::config::DataDirConfig;
use crate::core::{DataDirError, Result};
use crate::tabular::WriteOptions;
use crate::utils::paths::{escapes_base, normalize_path};
use std::fmt;
use std::path::{Path, PathBuf};

/// Construction options for a [`DataDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirOptions {
    /// Accept an already existing base directory instead of failing with
    /// [`DataDirError::AlreadyExists`].
    pub exist_ok: bool,
    /// Reject relative paths that are absolute or climb out of the base with `..`.
    pub confine_paths: bool,
    /// Default options for [`DataDirectory::write_table`].
    pub write_options: WriteOptions,
}

impl Default for DataDirOptions {
    fn default() -> Self {
        Self {
            exist_ok: true,
            confine_paths: true,
            write_options: WriteOptions::default(),
        }
    }
}

/// A directory on disk that owns every path resolved under it.
#[derive(Debug, Clone)]
pub struct DataDirectory {
    base_path: PathBuf,
    options: DataDirOptions,
}

impl DataDirectory {
    /// Open `base_path`, creating it and any missing ancestors.
    ///
    /// An existing directory is accepted.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created, or with
    /// [`DataDirError::AlreadyExists`] when `base_path` is an existing file.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_options(base_path, DataDirOptions::default())
    }

    /// Open `base_path`, creating it and any missing ancestors.
    ///
    /// # Errors
    ///
    /// With `exist_ok` set to `false`, an existing `base_path` fails with
    /// [`DataDirError::AlreadyExists`].
    pub fn create(base_path: impl Into<PathBuf>, exist_ok: bool) -> Result<Self> {
        Self::with_options(
            base_path,
            DataDirOptions {
                exist_ok,
                ..DataDirOptions::default()
            },
        )
    }

    /// Open `base_path` with explicit options.
    ///
    /// # Errors
    ///
    /// See [`DataDirectory::create`].
    pub fn with_options(base_path: impl Into<PathBuf>, options: DataDirOptions) -> Result<Self> {
        let base_path = base_path.into();
        entries::ensure_directory(&base_path, options.exist_ok, "DataDirectory::with_options")?;
        tracing::debug!(target: "datadir", "Opened data directory {}", base_path.display());
        Ok(Self {
            base_path,
            options,
        })
    }

    /// Open the directory described by a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::InvalidArgument`] when the configuration has no
    /// `base_path`, otherwise see [`DataDirectory::create`].
    pub fn from_config(config: &DataDirConfig) -> Result<Self> {
        let base_path = config.base_path.clone().ok_or_else(|| {
            DataDirError::invalid_argument("configuration does not set a base_path")
        })?;
        Self::with_options(base_path, config.options())
    }

    /// The base path exactly as given at construction
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Default write options for tabular output
    #[must_use]
    pub fn write_options(&self) -> &WriteOptions {
        &self.options.write_options
    }

    #[must_use]
    pub fn options(&self) -> &DataDirOptions {
        &self.options
    }

    /// Join a relative path onto the base path.
    ///
    /// With path confinement enabled (the default), `.` and `..` components are
    /// resolved logically and any path that would land outside the base is
    /// rejected. Without it, the path is joined verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::InvalidArgument`] for an escaping path while
    /// confinement is enabled.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let relative = relative.as_ref();
        if !self.options.confine_paths {
            return Ok(self.base_path.join(relative));
        }

        if escapes_base(relative) {
            return Err(DataDirError::invalid_argument(format!(
                "path '{}' escapes the data directory {}",
                relative.display(),
                self.base_path.display()
            )));
        }
        Ok(self.base_path.join(normalize_path(relative)))
    }
}

/// Renders the base path verbatim.
impl fmt::Display for DataDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_path.display())
    }
}
