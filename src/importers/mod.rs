//! Table providers: turn CSV files and spreadsheets into data grids.

pub mod csv;
pub mod error;
pub mod spreadsheet;

pub use error::ImportError;

use futures::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LoadProfileConfig;
use crate::infer::datagrid::StringDataGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv { delimiter: Option<u8> },
    Spreadsheet,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "txt" => Ok(FileKind::Csv { delimiter: None }),
            "tsv" => Ok(FileKind::Csv {
                delimiter: Some(b'\t'),
            }),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(FileKind::Spreadsheet),
            _ => Err(ImportError::UnsupportedExtension { extension }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Sheet to read from a workbook, the first one when `None`.
    pub sheet: Option<String>,
    pub csv_delimiter: u8,
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            csv_delimiter: b',',
            max_file_size: 64_000_000,
        }
    }
}

impl LoadOptions {
    pub fn from_config(config: &LoadProfileConfig) -> anyhow::Result<Self> {
        Ok(Self {
            sheet: None,
            csv_delimiter: config.parse_csv_delimiter()?,
            max_file_size: config.parse_max_file_size()?,
        })
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }
}

async fn check_file_size(path: &Path, limit: u64) -> Result<(), ImportError> {
    let size = tokio::fs::metadata(path).await?.len();
    if size > limit {
        return Err(ImportError::TooLarge { size, limit });
    }
    Ok(())
}

/// A table read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub grid: StringDataGrid,
    /// Sheet the table was read from, `None` for CSV files.
    pub sheet: Option<String>,
}

/// Loads the table of a file, with blank rows and columns removed.
pub async fn load_grid(path: &Path, options: &LoadOptions) -> Result<LoadedTable, ImportError> {
    let kind = FileKind::from_path(path)?;
    check_file_size(path, options.max_file_size).await?;

    let (sheet, rows) = match kind {
        FileKind::Csv { delimiter } => {
            let bytes = tokio::fs::read(path).await?;
            let delimiter = delimiter.unwrap_or(options.csv_delimiter);
            (None, csv::read_csv_rows(Cursor::new(bytes), delimiter).await?)
        }
        FileKind::Spreadsheet => {
            let path: PathBuf = path.to_path_buf();
            let sheet = options.sheet.clone();
            let (sheet, rows) = tokio::task::spawn_blocking(move || {
                spreadsheet::read_sheet_rows(&path, sheet.as_deref())
            })
            .await??;
            (Some(sheet), rows)
        }
    };

    let grid = StringDataGrid::from_raw_rows(rows)
        .map_err(|err| ImportError::InvalidTable(format!("{:#}", err)))?;
    info!(
        path = %path.display(),
        sheet = sheet.as_deref().unwrap_or("-"),
        rows = grid.row_count(),
        columns = grid.column_count(),
        "Loaded table"
    );
    Ok(LoadedTable { grid, sheet })
}

/// Names of the sheets of a workbook. CSV files have a single unnamed sheet.
pub async fn list_sheets(path: &Path) -> Result<Vec<String>, ImportError> {
    match FileKind::from_path(path)? {
        FileKind::Csv { .. } => Ok(Vec::new()),
        FileKind::Spreadsheet => {
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || spreadsheet::sheet_names(&path)).await?
        }
    }
}
