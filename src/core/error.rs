//! Error handling for datadir
//!
//! This module provides the error taxonomy of the crate and user-friendly error
//! reporting for the command-line front end. The error system is designed
//! around two core principles:
//! 1. **Strongly-typed errors** for precise error handling in library code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DataDirError`] - Enumerated error types for every failure of a
//!   [`DataDirectory`](crate::data_dir::DataDirectory) operation
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//! - [`user_friendly_error`] - Converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Error Categories
//!
//! - **Existence**: [`DataDirError::AlreadyExists`], [`DataDirError::NotFound`],
//!   [`DataDirError::NotEmpty`]
//! - **Caller input**: [`DataDirError::InvalidArgument`], [`DataDirError::UnsupportedFormat`]
//! - **Object serialization**: [`DataDirError::NotSerializable`], [`DataDirError::CorruptData`]
//! - **Everything else**: [`DataDirError::Tabular`] for codec library failures and
//!   [`DataDirError::FileOperation`] for I/O failures outside the taxonomy
//!
//! Raw [`std::io::Error`]s are classified by kind through [`DataDirError::from_io`]
//! so that "not found", "already exists" and "directory not empty" always surface
//! as their dedicated variants regardless of which operation hit them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use datadir::core::{DataDirError, user_friendly_error};
//! use datadir::DataDirectory;
//!
//! # fn example() -> anyhow::Result<()> {
//! let dir = DataDirectory::new("data")?;
//! match dir.read_lines("missing.txt") {
//!     Ok(lines) => println!("{} lines", lines.len()),
//!     Err(DataDirError::NotFound { path }) => println!("no file at {}", path.display()),
//!     Err(e) => user_friendly_error(e.into()).display(),
//! }
//! # Ok(())
//! # }
//! ```

use crate::core::file_error::{FileOperationContext, FileOperationError};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Crate-wide result alias defaulting to [`DataDirError`]
pub type Result<T, E = DataDirError> = std::result::Result<T, E>;

/// The main error type for datadir operations
///
/// Each variant represents one failure mode of the managed directory. Variants
/// that concern a filesystem location carry the resolved path so callers can
/// report it without re-deriving it.
///
/// No operation catches or recovers from these errors internally, except the
/// exist-ok suppression paths of directory creation.
#[derive(Error, Debug)]
pub enum DataDirError {
    /// Creation was requested with exist-ok disabled and the target already exists
    #[error("Path already exists: {}", .path.display())]
    AlreadyExists {
        /// The path that already exists
        path: PathBuf,
    },

    /// Removal, read, or object load targeting a path that does not exist
    ///
    /// Also returned by file removal when the target is not a regular file and by
    /// directory removal when the target is not a directory.
    #[error("Path not found: {}", .path.display())]
    NotFound {
        /// The path that could not be found
        path: PathBuf,
    },

    /// Non-forced removal of a directory that still has entries
    #[error("Directory is not empty: {}", .path.display())]
    NotEmpty {
        /// Path to the directory that is not empty
        path: PathBuf,
    },

    /// Invalid caller input
    ///
    /// Raised for an unknown text write mode, a tabular row of the wrong width,
    /// or a relative path that escapes the base directory while path
    /// confinement is enabled.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong with the input
        message: String,
    },

    /// Tabular read/write against an unrecognized file extension
    #[error("Unsupported tabular format '.{extension}' for {}", .path.display())]
    UnsupportedFormat {
        /// The path whose extension was not recognized
        path: PathBuf,
        /// The unrecognized extension, without the leading dot
        extension: String,
    },

    /// Object content the serialization mechanism cannot encode
    #[error("Value cannot be serialized to {}: {reason}", .path.display())]
    NotSerializable {
        /// The target path of the failed write
        path: PathBuf,
        /// Reason reported by the encoder
        reason: String,
    },

    /// Object content that fails to decode
    #[error("Corrupt or foreign object data in {}: {reason}", .path.display())]
    CorruptData {
        /// The path of the undecodable file
        path: PathBuf,
        /// Reason reported by the decoder
        reason: String,
    },

    /// A tabular codec library reported an error
    #[error("{format} error for {}: {source}", .path.display())]
    Tabular {
        /// The file being read or written
        path: PathBuf,
        /// Name of the format whose codec failed (e.g. "csv", "xlsx", "parquet")
        format: &'static str,
        /// The error reported by the codec library
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O failure outside the taxonomy above, with operation context
    #[error(transparent)]
    FileOperation(#[from] FileOperationError),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl DataDirError {
    /// Classify an I/O error into the taxonomy.
    ///
    /// `NotFound`, `AlreadyExists` and `DirectoryNotEmpty` kinds map onto their
    /// dedicated variants using the context's path; every other kind is kept as
    /// a [`FileOperationError`] carrying the full context.
    pub fn from_io(source: std::io::Error, context: FileOperationContext) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: context.file_path,
            },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                path: context.file_path,
            },
            std::io::ErrorKind::DirectoryNotEmpty => Self::NotEmpty {
                path: context.file_path,
            },
            _ => Self::FileOperation(FileOperationError::new(context, source)),
        }
    }

    /// Build an [`InvalidArgument`](Self::InvalidArgument) error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build a [`Tabular`](Self::Tabular) error from any codec error
    pub fn tabular(
        path: impl Into<PathBuf>,
        format: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Tabular {
            path: path.into(),
            format,
            source: source.into(),
        }
    }

    /// The filesystem path this error refers to, when there is one
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::AlreadyExists {
                path,
            }
            | Self::NotFound {
                path,
            }
            | Self::NotEmpty {
                path,
            }
            | Self::UnsupportedFormat {
                path,
                ..
            }
            | Self::NotSerializable {
                path,
                ..
            }
            | Self::CorruptData {
                path,
                ..
            }
            | Self::Tabular {
                path,
                ..
            } => Some(path),
            Self::FileOperation(e) => Some(e.path()),
            Self::InvalidArgument {
                ..
            }
            | Self::Other {
                ..
            } => None,
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`DataDirError`] and adds an optional suggestion for
/// resolution and additional details. This is how the `datadir` binary presents
/// errors.
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DataDirError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: DataDirError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// [`DataDirError`]s get a suggestion tailored to their variant. Bare I/O and
/// TOML errors (typically from configuration loading) are mapped onto
/// [`DataDirError::Other`] with a generic hint. Anything else keeps its full
/// cause chain in the message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<DataDirError>() {
        Ok(datadir_error) => return create_error_context(datadir_error),
        Err(error) => error,
    };

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DataDirError::Other {
            message: format!("Invalid configuration file: {toml_error}"),
        })
        .with_suggestion("Check the TOML syntax of your datadir.toml file")
        .with_details("Configuration is read from --config, $DATADIR_CONFIG, or ./datadir.toml");
    }

    let permission_denied = error
        .downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);
    if permission_denied {
        return ErrorContext::new(DataDirError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check file ownership and permissions of the data directory");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DataDirError::Other {
        message,
    })
}

fn create_error_context(error: DataDirError) -> ErrorContext {
    match &error {
        DataDirError::AlreadyExists {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove the existing path or allow existing directories"),
        DataDirError::NotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the relative path; it is resolved against the base directory"),
        DataDirError::NotEmpty {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove the directory contents first or use --force"),
        DataDirError::UnsupportedFormat {
            ..
        } => ErrorContext::new(error)
            .with_details("Supported tabular extensions: .csv, .txt, .xlsx, .parquet")
            .with_suggestion("Rename the file or pick one of the supported extensions"),
        DataDirError::CorruptData {
            ..
        } => ErrorContext::new(error)
            .with_details("The file was not written by datadir or was written for another type"),
        DataDirError::FileOperation(file_error) => {
            let details = file_error.user_message();
            ErrorContext::new(error).with_details(details)
        }
        _ => ErrorContext::new(error),
    }
}
