use std::collections::BTreeSet;

use super::datagrid::StringDataGrid;
use super::parsing::{InferedValue, infer_cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InferedColumn {
    Integer,
    Float,
    DateTime,
    String,
    /// Only blank cells.
    Blank,
}

impl InferedColumn {
    pub fn is_numeric(self) -> bool {
        matches!(self, InferedColumn::Integer | InferedColumn::Float)
    }
}

/// Infers the type of a column. Blank cells are treated as missing values
/// and do not change the type of the column.
pub fn infer_column<'a, I>(cells: I) -> InferedColumn
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_integers = false;
    let mut has_floats = false;
    let mut has_datetime = false;

    for cell in cells {
        match infer_cell(cell) {
            InferedValue::Blank => {}
            InferedValue::Integer(_) => has_integers = true,
            InferedValue::Float(_) => has_floats = true,
            InferedValue::DateTime(_) => has_datetime = true,
            // If we have at least a string, everything is a string
            InferedValue::String(_) => return InferedColumn::String,
        }
    }

    if has_datetime {
        // If we don't have only datetimes, we use string instead
        if has_integers || has_floats {
            return InferedColumn::String;
        }
        return InferedColumn::DateTime;
    }

    // If we have floats, integers are also floats
    if has_floats {
        return InferedColumn::Float;
    }
    if has_integers {
        return InferedColumn::Integer;
    }
    InferedColumn::Blank
}

/// Column types of a grid, computed once per classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    columns: Vec<InferedColumn>,
}

impl ColumnProfile {
    pub fn from_grid(grid: &StringDataGrid) -> Self {
        let columns = (0..grid.column_count())
            .map(|index| infer_column(grid.column(index)))
            .collect();
        Self { columns }
    }

    /// Indices of the numeric columns after the timestamp column.
    pub fn numeric_measurement_columns(&self) -> BTreeSet<usize> {
        self.columns
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, column)| column.is_numeric())
            .map(|(index, _)| index)
            .collect()
    }
}
