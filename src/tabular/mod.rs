//! Tabular content and its on-disk formats.
//!
//! A [`Table`] is an in-memory grid of typed [`Cell`]s with named columns. Its
//! persisted representation is chosen solely by the target path's extension:
//!
//! | Extension          | Format                 | Codec                          |
//! |--------------------|------------------------|--------------------------------|
//! | `.csv`, `.txt`     | delimited text, header | [`csv`]                        |
//! | `.xlsx`            | spreadsheet            | [`calamine`] / [`rust_xlsxwriter`] |
//! | `.parquet`         | columnar               | [`parquet`]                    |
//! | *(none)*           | delimited text         | read as-is, written to `<name>.csv` |
//!
//! Any other extension fails with [`DataDirError::UnsupportedFormat`] before the
//! filesystem is touched. Extension matching is ASCII case-insensitive.
//!
//! # Examples
//!
//! ```rust,no_run
//! use datadir::tabular::{Cell, Table, WriteOptions, read_table, write_table};
//! use std::path::Path;
//!
//! # fn example() -> datadir::core::Result<()> {
//! let mut table = Table::new(["name", "score"]);
//! table.push_row([Cell::from("ada"), Cell::from(91)])?;
//!
//! let written = write_table(Path::new("scores.parquet"), &table, &WriteOptions::default())?;
//! assert_eq!(read_table(&written)?, table);
//! # Ok(())
//! # }
//! ```

mod cell;
mod columnar;
mod delimited;
mod spreadsheet;
mod table;

pub use cell::Cell;
pub use table::Table;

use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Extension given to extension-less paths on write
pub const DEFAULT_EXTENSION: &str = "csv";

/// Default worksheet name for spreadsheet output
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Format-specific write parameters.
///
/// The managed directory forwards these to the codec untouched; each codec
/// uses the fields that apply to it and ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Prepend a zero-based row index column.
    pub include_index: bool,
    /// Field delimiter for delimited text. Must be an ASCII character.
    pub delimiter: char,
    /// Worksheet name for spreadsheet output.
    pub sheet_name: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            include_index: false,
            delimiter: ',',
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl WriteOptions {
    /// Set whether a row index column is written
    #[must_use]
    pub fn with_index(mut self, include_index: bool) -> Self {
        self.include_index = include_index;
        self
    }

    /// Set the delimiter used for delimited text
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the worksheet name used for spreadsheets
    #[must_use]
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }
}

/// The closed set of recognized tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabularFormat {
    /// Comma (or other single-byte) delimited text with a header row
    Csv,
    /// Office Open XML spreadsheet
    Xlsx,
    /// Apache Parquet columnar file
    Parquet,
}

impl TabularFormat {
    /// Map a file extension (without the dot) onto a format.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        const MAPPING: [(&str, TabularFormat); 4] = [
            ("csv", TabularFormat::Csv),
            ("txt", TabularFormat::Csv),
            ("xlsx", TabularFormat::Xlsx),
            ("parquet", TabularFormat::Parquet),
        ];

        MAPPING
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map(|(_, format)| *format)
    }

    /// Short name used in logs and error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Parquet => "parquet",
        }
    }

    fn codec(self) -> &'static dyn TableCodec {
        match self {
            Self::Csv => &delimited::DelimitedCodec,
            Self::Xlsx => &spreadsheet::SpreadsheetCodec,
            Self::Parquet => &columnar::ColumnarCodec,
        }
    }

    /// Resolve the format used to read `path`.
    ///
    /// A path without an extension is read as delimited text.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::UnsupportedFormat`] for any unmapped extension.
    pub fn for_read(path: &Path) -> Result<Self> {
        match path.extension() {
            None => Ok(Self::Csv),
            Some(ext) => Self::lookup(path, &ext.to_string_lossy()),
        }
    }

    /// Resolve the format and the actual target path used to write `path`.
    ///
    /// A path without an extension is redirected to `<path>.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::UnsupportedFormat`] for any unmapped extension.
    pub fn for_write(path: &Path) -> Result<(Self, PathBuf)> {
        match path.extension() {
            None => {
                let mut redirected = path.as_os_str().to_owned();
                redirected.push(".");
                redirected.push(DEFAULT_EXTENSION);
                let redirected = PathBuf::from(redirected);
                tracing::warn!(
                    target: "datadir::tabular",
                    "No file extension on {}, writing delimited text to {}",
                    path.display(),
                    redirected.display()
                );
                Ok((Self::Csv, redirected))
            }
            Some(ext) => Ok((Self::lookup(path, &ext.to_string_lossy())?, path.to_path_buf())),
        }
    }

    fn lookup(path: &Path, extension: &str) -> Result<Self> {
        Self::from_extension(extension).ok_or_else(|| DataDirError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

impl std::fmt::Display for TabularFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reader/writer pair for one on-disk tabular format.
trait TableCodec: Sync {
    fn read(&self, path: &Path) -> Result<Table>;

    fn write(&self, path: &Path, table: &Table, options: &WriteOptions) -> Result<()>;
}

/// Read a tabular file, dispatching on its extension.
///
/// # Errors
///
/// - [`DataDirError::UnsupportedFormat`] for an unrecognized extension
/// - [`DataDirError::NotFound`] when the file does not exist
/// - [`DataDirError::Tabular`] when the codec cannot decode the content
pub fn read_table(path: &Path) -> Result<Table> {
    let format = TabularFormat::for_read(path)?;
    tracing::debug!(target: "datadir::tabular", "Reading {format} table from {}", path.display());
    format.codec().read(path)
}

/// Write a tabular file, dispatching on its extension.
///
/// Returns the path actually written, which differs from `path` only when
/// `path` has no extension (see [`TabularFormat::for_write`]).
///
/// # Errors
///
/// - [`DataDirError::UnsupportedFormat`] for an unrecognized extension (nothing is written)
/// - [`DataDirError::InvalidArgument`] for options the codec cannot honour
/// - [`DataDirError::NotFound`] when the parent directory does not exist
/// - [`DataDirError::Tabular`] when the codec fails to encode the table
pub fn write_table(path: &Path, table: &Table, options: &WriteOptions) -> Result<PathBuf> {
    let (format, target) = TabularFormat::for_write(path)?;
    if table.width() == 0 {
        return Err(DataDirError::invalid_argument(format!(
            "cannot write a table without columns to {}",
            target.display()
        )));
    }
    tracing::debug!(
        target: "datadir::tabular",
        "Writing {format} table ({} rows x {} columns) to {}",
        table.len(),
        table.width(),
        target.display()
    );
    format.codec().write(&target, table, options)?;
    Ok(target)
}

fn open_for_read(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        DataDirError::from_io(
            e,
            FileOperationContext::new(FileOperation::Read, path, "reading table", "read_table"),
        )
    })
}

fn create_for_write(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        DataDirError::from_io(
            e,
            FileOperationContext::new(FileOperation::Write, path, "writing table", "write_table"),
        )
    })
}
