//! Structured I/O errors for datadir
//!
//! Every filesystem call records what it was doing at the call site in a
//! [`FileOperationContext`]. When the resulting [`std::io::Error`] does not
//! map onto a dedicated [`DataDirError`](crate::core::DataDirError) variant,
//! the context travels with it as a [`FileOperationError`].

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The filesystem action that was being attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    /// Writing, appending or creating a file
    Write,
    CreateDir,
    /// Removing a file or a directory
    Remove,
    /// Enumerating the directory tree
    Walk,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::CreateDir => "create directory",
            Self::Remove => "remove",
            Self::Walk => "walk",
        };
        f.write_str(verb)
    }
}

/// Where and why a filesystem call happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperationContext {
    pub operation: FileOperation,
    /// Absolute path that was touched
    pub file_path: PathBuf,
    /// Human description, e.g. "reading text lines"
    pub purpose: String,
    /// Operation name that issued the call, e.g. "read_lines"
    pub caller: String,
}

impl FileOperationContext {
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        caller: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            caller: caller.into(),
        }
    }
}

/// An I/O failure together with the [`FileOperationContext`] it happened in
#[derive(Error, Debug)]
#[error("Failed to {} {}", .context.operation, .context.file_path.display())]
pub struct FileOperationError {
    pub context: FileOperationContext,
    #[source]
    pub source: io::Error,
}

impl FileOperationError {
    pub const fn new(context: FileOperationContext, source: io::Error) -> Self {
        Self {
            context,
            source,
        }
    }

    /// The path the failed call touched
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.context.file_path
    }

    #[must_use]
    pub const fn operation(&self) -> FileOperation {
        self.context.operation
    }

    /// Multi-line explanation for terminal output.
    ///
    /// Starts with the purpose and caller, then a hint chosen from the I/O
    /// error kind.
    #[must_use]
    pub fn user_message(&self) -> String {
        let hint = match self.source.kind() {
            io::ErrorKind::NotFound => "The path does not exist.".to_string(),
            io::ErrorKind::PermissionDenied => {
                format!("Permission denied for {}.", self.path().display())
            }
            io::ErrorKind::InvalidData if self.operation() == FileOperation::Read => {
                "The file is not valid UTF-8 text.".to_string()
            }
            io::ErrorKind::NotADirectory => {
                "A parent component of the path is a file, not a directory.".to_string()
            }
            _ => format!("Cause: {}", self.source),
        };

        format!("While {} ({}): {hint}", self.context.purpose, self.context.caller)
    }
}

/// Attach a [`FileOperationContext`] to a raw I/O result
pub trait FileResultExt<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        caller: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for io::Result<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        caller: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|source| {
            FileOperationError::new(
                FileOperationContext::new(operation, file_path, purpose, caller),
                source,
            )
        })
    }
}
