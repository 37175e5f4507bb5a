use anyhow::{Error, bail};

use super::is_header::is_header_row;

fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

fn synthetic_column_name(index: usize) -> String {
    format!("column_{}", index + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDataGrid {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StringDataGrid {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, Error> {
        // Check that all rows have the same length
        let row_length = column_names.len();
        if let Some(index) = rows.iter().position(|row| row.len() != row_length) {
            bail!(
                "All rows must have the same length: row {} has {} cells, expected {}",
                index + 1,
                rows[index].len(),
                row_length
            );
        }
        Ok(Self { column_names, rows })
    }

    /// Builds a grid from the raw rows of a sheet or a CSV file.
    ///
    /// Fully blank rows are dropped, a header row is detected when present,
    /// and columns without any value below the header are dropped. Short rows
    /// are padded with blank cells.
    pub fn from_raw_rows(rows: Vec<Vec<String>>) -> Result<Self, Error> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows: Vec<Vec<String>> = rows
            .into_iter()
            .filter(|row| !row.iter().all(|cell| is_blank(cell)))
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        let has_header = match rows.as_slice() {
            [first, rest @ ..] => is_header_row(first, rest.first().map(Vec::as_slice)),
            [] => false,
        };
        let column_names: Vec<String> = if has_header {
            rows.remove(0)
                .into_iter()
                .enumerate()
                .map(|(index, name)| {
                    if is_blank(&name) {
                        synthetic_column_name(index)
                    } else {
                        name
                    }
                })
                .collect()
        } else {
            (0..width).map(synthetic_column_name).collect()
        };
        let grid = Self::new(column_names, rows)?;
        Ok(grid.without_blank_columns())
    }

    fn without_blank_columns(self) -> Self {
        let kept: Vec<usize> = (0..self.column_count())
            .filter(|&index| self.rows.iter().any(|row| !is_blank(&row[index])))
            .collect();
        if kept.len() == self.column_count() {
            return self;
        }

        let project =
            |row: &[String]| -> Vec<String> { kept.iter().map(|&index| row[index].clone()).collect() };
        Self {
            column_names: project(&self.column_names),
            rows: self.rows.iter().map(|row| project(row)).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }
}
