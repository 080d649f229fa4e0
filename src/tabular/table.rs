use super::Cell;
use crate::core::{DataDirError, Result};
use std::fmt;

/// An in-memory table: named columns and rows of [`Cell`]s.
///
/// Every row has exactly one cell per column; [`Table::push_row`] enforces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append every row of `rows`, consuming and returning the table.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::InvalidArgument`] on the first row whose width
    /// differs from the column count.
    pub fn with_rows<R>(mut self, rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = Cell>,
    {
        for row in rows {
            self.push_row(row)?;
        }
        Ok(self)
    }

    /// Append one row.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::InvalidArgument`] when the row width differs from
    /// the column count. The table is left unchanged.
    pub fn push_row(&mut self, row: impl IntoIterator<Item = Cell>) -> Result<()> {
        let row: Vec<Cell> = row.into_iter().collect();
        if row.len() != self.columns.len() {
            return Err(DataDirError::invalid_argument(format!(
                "row {} has {} cells but the table has {} columns",
                self.rows.len(),
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Position of the first column named `name`
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All values of the first column named `name`, top to bottom
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Copy of this table with a leading zero-based row index column.
    pub(crate) fn with_index_column(&self, name: &str) -> Self {
        let columns = std::iter::once(name.to_string()).chain(self.columns.iter().cloned()).collect();
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let index = i64::try_from(i).map_or(Cell::Null, Cell::Int);
                std::iter::once(index).chain(row.iter().cloned()).collect()
            })
            .collect();
        Self {
            columns,
            rows,
        }
    }

    /// The first `limit` rows as a new table
    #[must_use]
    pub fn head(&self, limit: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
        }
    }
}

/// Left-aligned text grid with a header separator.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> =
            self.rows.iter().map(|row| row.iter().map(ToString::to_string).collect()).collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rendered
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let write_line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())
        };

        write_line(f, &self.columns)?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", separator.join("-+-"))?;
        for row in &rendered {
            write_line(f, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::new(["name", "age"])
            .with_rows([
                vec![Cell::from("ada"), Cell::Int(36)],
                vec![Cell::from("grace"), Cell::Null],
            ])
            .unwrap()
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = Table::new(["a", "b"]);
        let err = table.push_row([Cell::Int(1)]).unwrap_err();
        assert!(matches!(err, DataDirError::InvalidArgument { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_accessors() {
        let table = people();
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.columns(), ["name".to_string(), "age".to_string()]);
        assert_eq!(table.column("age"), Some(vec![&Cell::Int(36), &Cell::Null]));
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn test_with_index_column() {
        let indexed = people().with_index_column("");
        assert_eq!(indexed.columns()[0], "");
        assert_eq!(indexed.column(""), Some(vec![&Cell::Int(0), &Cell::Int(1)]));
        assert_eq!(indexed.width(), 3);
    }

    #[test]
    fn test_head() {
        assert_eq!(people().head(1).len(), 1);
        assert_eq!(people().head(10).len(), 2);
    }

    #[test]
    fn test_display_grid() {
        let text = people().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name  | age");
        assert_eq!(lines[1], "------+----");
        assert_eq!(lines[2], "ada   | 36");
        assert_eq!(lines[3], "grace |");
    }
}
