//! Tabular reads and writes relative to the data directory.

use super::DataDirectory;
use crate::core::Result;
use crate::tabular::{self, Table, WriteOptions};
use std::path::{Path, PathBuf};

impl DataDirectory {
    /// Read a table, choosing the codec from the file extension.
    ///
    /// See [`tabular::read_table`] for the extension mapping and errors.
    ///
    /// # Errors
    ///
    /// Propagates [`tabular::read_table`] failures.
    pub fn read_table(&self, relative: impl AsRef<Path>) -> Result<Table> {
        let path = self.resolve(relative)?;
        tabular::read_table(&path)
    }

    /// Write a table with the directory's default [`WriteOptions`].
    ///
    /// Returns the path actually written: `relative` without an extension is
    /// written as `relative.csv`.
    ///
    /// # Errors
    ///
    /// Propagates [`tabular::write_table`] failures.
    pub fn write_table(&self, relative: impl AsRef<Path>, table: &Table) -> Result<PathBuf> {
        self.write_table_with(relative, table, &self.options.write_options)
    }

    /// Write a table with explicit [`WriteOptions`].
    ///
    /// # Errors
    ///
    /// Propagates [`tabular::write_table`] failures.
    pub fn write_table_with(
        &self,
        relative: impl AsRef<Path>,
        table: &Table,
        options: &WriteOptions,
    ) -> Result<PathBuf> {
        let path = self.resolve(relative)?;
        tabular::write_table(&path, table, options)
    }
}
