//! Existence checks, directory creation and removal, file removal.

use super::DataDirectory;
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use crate::utils::paths::normalize_path;
use std::fs;
use std::path::Path;

/// Create `path` and its ancestors, honouring `exist_ok` for an existing directory.
pub(crate) fn ensure_directory(path: &Path, exist_ok: bool, caller: &str) -> Result<()> {
    if path.is_dir() {
        if exist_ok {
            return Ok(());
        }
        return Err(DataDirError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    fs::create_dir_all(path).map_err(|e| {
        DataDirError::from_io(
            e,
            FileOperationContext::new(FileOperation::CreateDir, path, "creating directory", caller),
        )
    })
}

impl DataDirectory {
    /// `true` iff `relative` resolves to an existing directory.
    ///
    /// Never fails: a path rejected by [`DataDirectory::resolve`] does not exist.
    pub fn subdir_exists(&self, relative: impl AsRef<Path>) -> bool {
        self.resolve(relative).is_ok_and(|path| path.is_dir())
    }

    /// `true` iff `relative` resolves to an existing regular file.
    pub fn file_exists(&self, relative: impl AsRef<Path>) -> bool {
        self.resolve(relative).is_ok_and(|path| path.is_file())
    }

    /// Create a subdirectory and any missing intermediate directories.
    ///
    /// # Errors
    ///
    /// With `exist_ok` set to `false`, an existing directory fails with
    /// [`DataDirError::AlreadyExists`]. A regular file at the target path always
    /// fails with [`DataDirError::AlreadyExists`].
    pub fn create_subdir(&self, relative: impl AsRef<Path>, exist_ok: bool) -> Result<()> {
        let path = self.resolve(relative)?;
        ensure_directory(&path, exist_ok, "DataDirectory::create_subdir")?;
        tracing::debug!(target: "datadir", "Created directory {}", path.display());
        Ok(())
    }

    /// Remove a subdirectory.
    ///
    /// Without `force` the directory must be empty. With `force` it is removed
    /// together with everything beneath it.
    ///
    /// # Errors
    ///
    /// - [`DataDirError::NotFound`] if the target is missing or not a directory
    /// - [`DataDirError::NotEmpty`] for a non-empty directory without `force`
    /// - [`DataDirError::InvalidArgument`] for the base directory itself while
    ///   path confinement is enabled
    pub fn remove_subdir(&self, relative: impl AsRef<Path>, force: bool) -> Result<()> {
        let relative = relative.as_ref();
        if self.options.confine_paths && normalize_path(relative).as_os_str().is_empty() {
            return Err(DataDirError::invalid_argument(format!(
                "refusing to remove the data directory {} itself",
                self.base_path.display()
            )));
        }

        let path = self.resolve(relative)?;
        if !path.is_dir() {
            return Err(DataDirError::NotFound {
                path,
            });
        }

        let result = if force {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_dir(&path)
        };
        result.map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(
                    FileOperation::Remove,
                    &path,
                    "removing directory",
                    "DataDirectory::remove_subdir",
                ),
            )
        })?;

        tracing::debug!(target: "datadir", "Removed directory {} (force: {force})", path.display());
        Ok(())
    }

    /// Remove a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::NotFound`] if the target is missing or is not a
    /// regular file (directories are never removed here).
    pub fn remove_file(&self, relative: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(relative)?;
        if !path.is_file() {
            return Err(DataDirError::NotFound {
                path,
            });
        }

        fs::remove_file(&path).map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(
                    FileOperation::Remove,
                    &path,
                    "removing file",
                    "DataDirectory::remove_file",
                ),
            )
        })?;

        tracing::debug!(target: "datadir", "Removed file {}", path.display());
        Ok(())
    }
}
