//! Recognition of yearly electricity load diagrams.
//!
//! A load diagram is a table whose first column holds timestamps and whose
//! other columns hold consumption values. Four layouts are recognized:
//!
//! - `1D hourly` and `1D 15-minute`: one row per interval, stamped with the
//!   end of the interval.
//! - `2D hourly` and `2D 15-minute`: one row per day, stamped at midnight,
//!   with one column per interval of the day.
//!
//! Classification is a pure function of the table and never panics on
//! malformed input: every mismatch is returned as a [`Failure`].

mod one_dimensional;
mod result;
mod two_dimensional;

pub use result::{
    Classification, ClassificationResult, Failure, FailureKind, is_success_label,
    label_and_detail,
};

use tracing::{debug, info};

use crate::datamodel::{LoadDateTime, LoadDateTimeExt};
use crate::infer::columns::ColumnProfile;
use crate::infer::datagrid::StringDataGrid;
use crate::infer::parsing::parse_timestamp;

/// Classifies a table as one of the four load diagram layouts.
///
/// The table is expected without fully blank rows and columns, see
/// [`StringDataGrid::from_raw_rows`].
pub fn classify(grid: &StringDataGrid) -> ClassificationResult {
    if grid.row_count() == 0 || grid.column_count() < 2 {
        return Err(Failure::new(
            FailureKind::UnrecognizedFormat,
            format!(
                "Expected a timestamp column followed by measurement columns, found {} rows and {} columns",
                grid.row_count(),
                grid.column_count()
            ),
        ));
    }

    let timestamps = coerce_timestamps(grid)?;
    let numeric_columns = ColumnProfile::from_grid(grid).numeric_measurement_columns();

    let result = if timestamps.iter().any(|timestamp| timestamp.has_time_of_day()) {
        debug!("Timestamps carry a time of day, checking one-dimensional layouts");
        one_dimensional::classify(&timestamps, &numeric_columns)
    } else {
        debug!("Timestamps are dates only, checking two-dimensional layouts");
        two_dimensional::classify(&timestamps, &numeric_columns)
    };

    match &result {
        Ok(classification) => info!(format = %classification.format, "Recognized load diagram"),
        Err(failure) => info!(kind = %failure.kind, "Load diagram not recognized"),
    }
    result
}

/// Same as [`classify`], flattened into a `(label, detail)` pair.
pub fn classify_labelled(grid: &StringDataGrid) -> (String, String) {
    label_and_detail(&classify(grid))
}

fn coerce_timestamps(grid: &StringDataGrid) -> Result<Vec<LoadDateTime>, Failure> {
    let mut timestamps = Vec::with_capacity(grid.row_count());
    let mut first_failure: Option<(usize, &str)> = None;
    let mut failures = 0_usize;

    for (index, value) in grid.column(0).enumerate() {
        match parse_timestamp(value) {
            Some(timestamp) => timestamps.push(timestamp),
            None => {
                failures += 1;
                first_failure.get_or_insert((index + 1, value));
            }
        }
    }

    match first_failure {
        None => Ok(timestamps),
        Some((row, value)) => Err(Failure::new(
            FailureKind::TimestampParseError,
            format!(
                "Row {} of column '{}': {:?} is not a timestamp ({} of {} values could not be parsed)",
                row,
                grid.column_names[0],
                value,
                failures,
                grid.row_count()
            ),
        )),
    }
}
