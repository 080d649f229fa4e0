//! Core types for datadir
//!
//! This module holds the error taxonomy shared by every operation of the crate:
//!
//! - [`error`] - [`DataDirError`], the crate [`Result`] alias, and
//!   [`ErrorContext`]/[`user_friendly_error`] for presenting failures to users
//! - [`file_error`] - [`FileOperationError`] and the [`FileResultExt`] extension
//!   trait that attach operation, path and caller context to raw I/O errors

pub mod error;
pub mod file_error;

pub use error::{DataDirError, ErrorContext, Result, user_friendly_error};
pub use file_error::{FileOperation, FileOperationContext, FileOperationError, FileResultExt};
