//! Arbitrary values persisted as `borsh` bytes.
//!
//! The byte layout is only meaningful to the same Rust type that wrote it;
//! reading it back as another type either fails with
//! [`DataDirError::CorruptData`] or yields a meaningless value.

use super::DataDirectory;
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use std::fs;
use std::path::Path;

impl DataDirectory {
    /// Serialize `value` and write it to `relative`, replacing any existing file.
    ///
    /// The value is encoded before the file is opened, so an unserializable
    /// value leaves the filesystem untouched.
    ///
    /// # Errors
    ///
    /// - [`DataDirError::NotSerializable`] when the encoder rejects the value
    ///   (for instance a NaN float)
    /// - [`DataDirError::NotFound`] when the parent directory does not exist
    pub fn write_object<T>(&self, relative: impl AsRef<Path>, value: &T) -> Result<()>
    where
        T: BorshSerialize + ?Sized,
    {
        let path = self.resolve(relative)?;
        let bytes = borsh::to_vec(value).map_err(|e| DataDirError::NotSerializable {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        fs::write(&path, &bytes).map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(
                    FileOperation::Write,
                    &path,
                    "writing object",
                    "DataDirectory::write_object",
                ),
            )
        })?;

        tracing::debug!(target: "datadir", "Wrote {} byte object to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Read and deserialize a value previously written with [`DataDirectory::write_object`].
    ///
    /// # Errors
    ///
    /// - [`DataDirError::NotFound`] when the file does not exist
    /// - [`DataDirError::CorruptData`] when the bytes do not decode as `T`,
    ///   including truncated files and trailing bytes
    pub fn read_object<T: BorshDeserialize>(&self, relative: impl AsRef<Path>) -> Result<T> {
        let path = self.resolve(relative)?;
        let bytes = fs::read(&path).map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(
                    FileOperation::Read,
                    &path,
                    "reading object",
                    "DataDirectory::read_object",
                ),
            )
        })?;

        T::try_from_slice(&bytes).map_err(|e| DataDirError::CorruptData {
            path,
            reason: e.to_string(),
        })
    }
}
