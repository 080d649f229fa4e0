//! Recursive enumeration of the data directory.

use super::DataDirectory;
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use crate::utils::paths::normalize_path_for_storage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every directory and file beneath a base path, excluding the base itself.
///
/// Paths are absolute-or-base-relative exactly as the base path was given,
/// listed in the order the walk discovered them (a parent before its
/// children, siblings in filesystem order). Symbolic links are listed but
/// not followed; a link to a directory counts as a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryTree {
    pub root: PathBuf,
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl DirectoryTree {
    /// Directory paths relative to the root, with `/` separators
    #[must_use]
    pub fn relative_dirs(&self) -> Vec<String> {
        self.relative(&self.dirs)
    }

    /// File paths relative to the root, with `/` separators
    #[must_use]
    pub fn relative_files(&self) -> Vec<String> {
        self.relative(&self.files)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|path| normalize_path_for_storage(path.strip_prefix(&self.root).unwrap_or(path)))
            .collect()
    }
}

impl DataDirectory {
    /// Enumerate every directory and file beneath the base path.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::NotFound`] when the base directory has been
    /// removed, or an I/O error when part of the tree cannot be read.
    pub fn enumerate_tree(&self) -> Result<DirectoryTree> {
        let mut tree = DirectoryTree {
            root: self.base_path.clone(),
            ..DirectoryTree::default()
        };

        for entry in WalkDir::new(&self.base_path).min_depth(1) {
            let entry = entry.map_err(|e| walk_error(e, &self.base_path))?;
            tracing::trace!(target: "datadir", "Visited {} at depth {}", entry.path().display(), entry.depth());
            if entry.path().is_dir() {
                tree.dirs.push(entry.into_path());
            } else {
                tree.files.push(entry.into_path());
            }
        }

        tracing::debug!(
            target: "datadir",
            "Enumerated {} directories and {} files under {}",
            tree.dirs.len(),
            tree.files.len(),
            self.base_path.display()
        );
        Ok(tree)
    }
}

fn walk_error(error: walkdir::Error, base: &Path) -> DataDirError {
    let path = error.path().unwrap_or(base).to_path_buf();
    match error.into_io_error() {
        Some(io_error) => DataDirError::from_io(
            io_error,
            FileOperationContext::new(
                FileOperation::Walk,
                path,
                "enumerating directory tree",
                "DataDirectory::enumerate_tree",
            ),
        ),
        None => DataDirError::Other {
            message: format!("Filesystem loop detected at {}", path.display()),
        },
    }
}
