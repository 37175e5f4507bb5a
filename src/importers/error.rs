use thiserror::Error;

/// Errors raised while turning a file into a data grid.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Unsupported file extension: {extension:?}, expected csv, tsv, txt, xlsx, xlsm, xlsb, xls or ods")]
    UnsupportedExtension { extension: String },

    #[error("File is too large: {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("Sheet {name:?} not found, available sheets: {}", .available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("Workbook contains no sheet")]
    NoSheet,

    #[error("Background import task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid table: {0}")]
    InvalidTable(String),
}
