//! Columnar (`.parquet`) codec.
//!
//! Each column is stored as a single OPTIONAL leaf whose physical type is
//! inferred from its non-null cells:
//!
//! - only booleans: `BOOLEAN`
//! - only integers: `INT64`
//! - integers and floats: `DOUBLE`
//! - anything else, or no values at all: UTF-8 `BYTE_ARRAY`

use super::{Cell, Table, TableCodec, WriteOptions, create_for_write, open_for_read};
use crate::core::{DataDirError, Result};
use parquet::basic::{ConvertedType, Repetition, Type as PhysicalType};
use parquet::data_type::{BoolType, ByteArray, ByteArrayType, DoubleType, Int64Type};
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::file::writer::SerializedFileWriter;
use parquet::record::Field;
use parquet::schema::types::Type;
use std::path::Path;
use std::sync::Arc;

const FORMAT: &str = "parquet";

/// Index column name, matching the one pandas writes
const INDEX_HEADER: &str = "__index_level_0__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Boolean,
    Integer,
    Double,
    Text,
}

impl ColumnKind {
    fn infer<'a>(cells: impl Iterator<Item = &'a Cell>) -> Self {
        let mut kind = None;
        for cell in cells {
            kind = match (cell, kind) {
                (Cell::Null, _) => kind,
                (Cell::Bool(_), None | Some(Self::Boolean)) => Some(Self::Boolean),
                (Cell::Int(_), None | Some(Self::Integer)) => Some(Self::Integer),
                (Cell::Float(_), None) | (Cell::Int(_) | Cell::Float(_), Some(Self::Integer | Self::Double)) => {
                    Some(Self::Double)
                }
                _ => return Self::Text,
            };
        }
        kind.unwrap_or(Self::Text)
    }

    const fn physical_type(self) -> PhysicalType {
        match self {
            Self::Boolean => PhysicalType::BOOLEAN,
            Self::Integer => PhysicalType::INT64,
            Self::Double => PhysicalType::DOUBLE,
            Self::Text => PhysicalType::BYTE_ARRAY,
        }
    }
}

pub(super) struct ColumnarCodec;

impl TableCodec for ColumnarCodec {
    fn read(&self, path: &Path) -> Result<Table> {
        let parquet_error = |e: ParquetError| DataDirError::tabular(path, FORMAT, e);

        let file = open_for_read(path)?;
        let reader = SerializedFileReader::new(file).map_err(parquet_error)?;

        let columns: Vec<String> = reader
            .metadata()
            .file_metadata()
            .schema_descr()
            .root_schema()
            .get_fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();

        let mut table = Table::new(columns);
        for row in reader.get_row_iter(None).map_err(parquet_error)? {
            let row = row.map_err(parquet_error)?;
            table.push_row(row.get_column_iter().map(|(_, field)| cell_from_field(field)))?;
        }
        Ok(table)
    }

    fn write(&self, path: &Path, table: &Table, options: &WriteOptions) -> Result<()> {
        let parquet_error = |e: ParquetError| DataDirError::tabular(path, FORMAT, e);

        let indexed;
        let table = if options.include_index {
            indexed = table.with_index_column(INDEX_HEADER);
            &indexed
        } else {
            table
        };

        let kinds: Vec<ColumnKind> = (0..table.width())
            .map(|col| ColumnKind::infer(table.rows().iter().map(|row| &row[col])))
            .collect();

        let fields = table
            .columns()
            .iter()
            .zip(&kinds)
            .map(|(name, kind)| {
                let builder = Type::primitive_type_builder(name, kind.physical_type())
                    .with_repetition(Repetition::OPTIONAL);
                let builder = if *kind == ColumnKind::Text {
                    builder.with_converted_type(ConvertedType::UTF8)
                } else {
                    builder
                };
                builder.build().map(Arc::new)
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(parquet_error)?;
        let schema = Type::group_type_builder("schema").with_fields(fields).build().map_err(parquet_error)?;

        let file = create_for_write(path)?;
        let properties = Arc::new(WriterProperties::builder().build());
        let mut writer =
            SerializedFileWriter::new(file, Arc::new(schema), properties).map_err(parquet_error)?;

        let mut row_group = writer.next_row_group().map_err(parquet_error)?;
        for (col, kind) in kinds.iter().enumerate() {
            let Some(mut column) = row_group.next_column().map_err(parquet_error)? else {
                break;
            };

            let cells: Vec<&Cell> = table.rows().iter().map(|row| &row[col]).collect();
            let definition_levels: Vec<i16> = cells.iter().map(|cell| i16::from(!cell.is_null())).collect();

            match kind {
                ColumnKind::Boolean => {
                    let values: Vec<bool> = cells
                        .iter()
                        .filter_map(|cell| match cell {
                            Cell::Bool(value) => Some(*value),
                            _ => None,
                        })
                        .collect();
                    column
                        .typed::<BoolType>()
                        .write_batch(&values, Some(&definition_levels), None)
                        .map_err(parquet_error)?;
                }
                ColumnKind::Integer => {
                    let values: Vec<i64> = cells
                        .iter()
                        .filter_map(|cell| match cell {
                            Cell::Int(value) => Some(*value),
                            _ => None,
                        })
                        .collect();
                    column
                        .typed::<Int64Type>()
                        .write_batch(&values, Some(&definition_levels), None)
                        .map_err(parquet_error)?;
                }
                ColumnKind::Double => {
                    #[allow(clippy::cast_precision_loss)]
                    let values: Vec<f64> = cells
                        .iter()
                        .filter_map(|cell| match cell {
                            Cell::Int(value) => Some(*value as f64),
                            Cell::Float(value) => Some(*value),
                            _ => None,
                        })
                        .collect();
                    column
                        .typed::<DoubleType>()
                        .write_batch(&values, Some(&definition_levels), None)
                        .map_err(parquet_error)?;
                }
                ColumnKind::Text => {
                    let values: Vec<ByteArray> = cells
                        .iter()
                        .filter(|cell| !cell.is_null())
                        .map(|cell| ByteArray::from(cell.to_string().into_bytes()))
                        .collect();
                    column
                        .typed::<ByteArrayType>()
                        .write_batch(&values, Some(&definition_levels), None)
                        .map_err(parquet_error)?;
                }
            }

            column.close().map_err(parquet_error)?;
        }
        row_group.close().map_err(parquet_error)?;
        writer.close().map_err(parquet_error)?;
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn cell_from_field(field: &Field) -> Cell {
    match field {
        Field::Null => Cell::Null,
        Field::Bool(value) => Cell::Bool(*value),
        Field::Byte(value) => Cell::Int(i64::from(*value)),
        Field::Short(value) => Cell::Int(i64::from(*value)),
        Field::Int(value) => Cell::Int(i64::from(*value)),
        Field::Long(value) => Cell::Int(*value),
        Field::UByte(value) => Cell::Int(i64::from(*value)),
        Field::UShort(value) => Cell::Int(i64::from(*value)),
        Field::UInt(value) => Cell::Int(i64::from(*value)),
        Field::ULong(value) => i64::try_from(*value).map_or(Cell::Float(*value as f64), Cell::Int),
        Field::Float(value) => Cell::Float(f64::from(*value)),
        Field::Double(value) => Cell::Float(*value),
        Field::Str(value) => Cell::Text(value.clone()),
        other => Cell::Text(other.to_string()),
    }
}
