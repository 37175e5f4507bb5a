use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use tracing::debug;

use super::error::ImportError;

pub fn sheet_names(path: &Path) -> Result<Vec<String>, ImportError> {
    let workbook = open_workbook_auto(path)?;
    Ok(workbook.sheet_names())
}

/// Picks the requested sheet, or the first one when none is requested.
pub fn select_sheet(available: &[String], requested: Option<&str>) -> Result<String, ImportError> {
    match requested {
        Some(name) if available.iter().any(|sheet| sheet == name) => Ok(name.to_string()),
        Some(name) => Err(ImportError::SheetNotFound {
            name: name.to_string(),
            available: available.to_vec(),
        }),
        None => available.first().cloned().ok_or(ImportError::NoSheet),
    }
}

/// Reads the rows of a sheet, returning the name of the sheet that was read.
pub fn read_sheet_rows(
    path: &Path,
    requested_sheet: Option<&str>,
) -> Result<(String, Vec<Vec<String>>), ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = select_sheet(&workbook.sheet_names(), requested_sheet)?;
    debug!(sheet = %sheet, path = %path.display(), "Reading sheet");

    let range = workbook.worksheet_range(&sheet)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok((sheet, rows))
}

fn format_datetime(datetime: chrono::NaiveDateTime) -> String {
    // Spreadsheet times are stored as fractions of a day and rarely land
    // exactly on the second.
    let rounded = datetime + chrono::TimeDelta::milliseconds(500);
    rounded.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(format_datetime)
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}
