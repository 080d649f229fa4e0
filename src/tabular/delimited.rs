//! Delimited text (`.csv`, `.txt`, extension-less) codec.
//!
//! The first record is the header. Values carry no type, so every field is
//! inferred with [`Cell::parse`] on read.

use super::{Cell, Table, TableCodec, WriteOptions, create_for_write, open_for_read};
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use std::path::Path;

const FORMAT: &str = "csv";

/// Header written above the row index column
const INDEX_HEADER: &str = "";

pub(super) struct DelimitedCodec;

impl TableCodec for DelimitedCodec {
    fn read(&self, path: &Path) -> Result<Table> {
        let file = open_for_read(path)?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| DataDirError::tabular(path, FORMAT, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Table::new(columns);
        for record in reader.records() {
            let record = record.map_err(|e| DataDirError::tabular(path, FORMAT, e))?;
            table.push_row(record.iter().map(Cell::parse))?;
        }
        Ok(table)
    }

    fn write(&self, path: &Path, table: &Table, options: &WriteOptions) -> Result<()> {
        let delimiter = delimiter_byte(options.delimiter)?;

        let indexed;
        let table = if options.include_index {
            indexed = table.with_index_column(INDEX_HEADER);
            &indexed
        } else {
            table
        };

        let file = create_for_write(path)?;
        let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(file);

        writer.write_record(table.columns()).map_err(|e| DataDirError::tabular(path, FORMAT, e))?;
        for row in table.rows() {
            writer
                .write_record(row.iter().map(ToString::to_string))
                .map_err(|e| DataDirError::tabular(path, FORMAT, e))?;
        }

        writer.flush().map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(FileOperation::Write, path, "flushing table", "write_table"),
            )
        })
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter).ok().filter(u8::is_ascii).ok_or_else(|| {
        DataDirError::invalid_argument(format!(
            "delimiter '{delimiter}' is not a single-byte ASCII character"
        ))
    })
}
