//! Spreadsheet (`.xlsx`) codec.
//!
//! Reads the first worksheet with `calamine` and writes a single worksheet
//! with `rust_xlsxwriter`. Row 0 holds the column names.
//!
//! Spreadsheets store every number as a float, so integral numbers read back
//! as [`Cell::Int`]. Trailing rows whose cells are all empty are not
//! recoverable on read.

use super::{Cell, Table, TableCodec, WriteOptions, open_for_read};
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::io::BufReader;
use std::path::Path;

const FORMAT: &str = "xlsx";

const INDEX_HEADER: &str = "";

/// Largest integer a spreadsheet float represents exactly (2^53)
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

static EMPTY: Data = Data::Empty;

pub(super) struct SpreadsheetCodec;

impl TableCodec for SpreadsheetCodec {
    fn read(&self, path: &Path) -> Result<Table> {
        let file = open_for_read(path)?;
        let mut workbook: Xlsx<_> =
            Xlsx::new(BufReader::new(file)).map_err(|e| DataDirError::tabular(path, FORMAT, e))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| DataDirError::tabular(path, FORMAT, e))?,
            None => return Ok(Table::default()),
        };
        let Some((last_row, last_col)) = range.end() else {
            return Ok(Table::default());
        };

        // Positions are absolute so leading blank rows and columns survive.
        let value_at = |row: u32, col: u32| range.get_value((row, col)).unwrap_or(&EMPTY);

        let columns: Vec<String> = (0..=last_col).map(|col| value_at(0, col).to_string()).collect();
        let mut table = Table::new(columns);
        for row in 1..=last_row {
            table.push_row((0..=last_col).map(|col| cell_from_data(value_at(row, col))))?;
        }
        Ok(table)
    }

    fn write(&self, path: &Path, table: &Table, options: &WriteOptions) -> Result<()> {
        let indexed;
        let table = if options.include_index {
            indexed = table.with_index_column(INDEX_HEADER);
            &indexed
        } else {
            table
        };

        let xlsx_error = |e: XlsxError| DataDirError::tabular(path, FORMAT, e);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(options.sheet_name.as_str()).map_err(xlsx_error)?;

        for (col, name) in table.columns().iter().enumerate() {
            worksheet.write_string(0, col_num(col)?, name.as_str()).map_err(xlsx_error)?;
        }

        for (index, row) in table.rows().iter().enumerate() {
            let row_index = row_num(index + 1)?;
            for (col, cell) in row.iter().enumerate() {
                let col = col_num(col)?;
                match cell {
                    Cell::Null => {}
                    Cell::Bool(value) => {
                        worksheet.write_boolean(row_index, col, *value).map_err(xlsx_error)?;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    Cell::Int(value) => {
                        worksheet.write_number(row_index, col, *value as f64).map_err(xlsx_error)?;
                    }
                    Cell::Float(value) => {
                        worksheet.write_number(row_index, col, *value).map_err(xlsx_error)?;
                    }
                    Cell::Text(value) => {
                        worksheet.write_string(row_index, col, value.as_str()).map_err(xlsx_error)?;
                    }
                }
            }
        }

        let buffer = workbook.save_to_buffer().map_err(xlsx_error)?;
        std::fs::write(path, buffer).map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(FileOperation::Write, path, "writing table", "write_table"),
            )
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Null,
        Data::Bool(value) => Cell::Bool(*value),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_INT => {
            Cell::Int(*value as i64)
        }
        Data::Float(value) => Cell::Float(*value),
        Data::String(value) => Cell::Text(value.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn col_num(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| {
        DataDirError::invalid_argument(format!("column {index} is beyond the spreadsheet limit"))
    })
}

fn row_num(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| {
        DataDirError::invalid_argument(format!("row {index} is beyond the spreadsheet limit"))
    })
}
