//! Tabular commands.

use crate::data_dir::DataDirectory;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Print a table.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Path relative to the base directory (.csv, .txt, .xlsx, .parquet)
    path: PathBuf,

    /// Maximum number of rows to print
    #[arg(short, long, default_value_t = 20)]
    limit: usize,
}

impl ShowCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        let table = dir.read_table(&self.path)?;
        print!("{}", table.head(self.limit));
        println!("{}", format!("({} rows x {} columns)", table.len(), table.width()).dimmed());
        Ok(())
    }
}

/// Read a table in one format and write it in another.
#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Source path relative to the base directory
    source: PathBuf,

    /// Destination path relative to the base directory; the extension picks the format
    destination: PathBuf,

    /// Write a row index column
    #[arg(long)]
    index: bool,

    /// Delimiter for csv/txt output
    #[arg(long)]
    delimiter: Option<char>,

    /// Worksheet name for xlsx output
    #[arg(long)]
    sheet: Option<String>,
}

impl ConvertCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        let table = dir
            .read_table(&self.source)
            .with_context(|| format!("Failed to read {}", self.source.display()))?;

        let mut options = dir.write_options().clone();
        if self.index {
            options.include_index = true;
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(sheet) = self.sheet {
            options.sheet_name = sheet;
        }

        let written = dir.write_table_with(&self.destination, &table, &options)?;
        println!("{}", written.display());
        tracing::info!("Converted {} rows to {}", table.len(), written.display());
        Ok(())
    }
}
