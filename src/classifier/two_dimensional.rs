use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::result::{Classification, ClassificationResult, Failure, FailureKind};
use crate::datamodel::{
    DiagramFormat, Granularity, Layout, LoadDateTime, LoadDateTimeExt,
    diagram::MIN_DAYS_PER_YEAR,
};

pub(super) fn classify(
    timestamps: &[LoadDateTime],
    numeric_columns: &BTreeSet<usize>,
) -> ClassificationResult {
    if let Some((index, timestamp)) = timestamps
        .iter()
        .enumerate()
        .find(|(_, timestamp)| !timestamp.is_midnight())
    {
        return Err(Failure::new(
            FailureKind::NonMidnightTimestamp,
            format!(
                "2D layout expects one date per row, but row {} is stamped {}",
                index + 1,
                timestamp.calendar()
            ),
        ));
    }

    let found = numeric_columns.len();
    let hourly = Granularity::Hourly.intervals_per_day();
    let quarter_hourly = Granularity::QuarterHourly.intervals_per_day();
    if found < hourly {
        return Err(Failure::new(
            FailureKind::InsufficientIntervalColumns,
            format!(
                "2D layout detected but found {} numeric columns; expected {} (hourly) or {} (15-minute)",
                found, hourly, quarter_hourly
            ),
        ));
    }
    let granularity = if found < quarter_hourly {
        Granularity::Hourly
    } else {
        Granularity::QuarterHourly
    };
    let expected = granularity.intervals_per_day();

    let mut rows_per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for timestamp in timestamps {
        *rows_per_year.entry(timestamp.calendar().year).or_default() += 1;
    }
    debug!(?rows_per_year, found, "Counted daily rows");

    match rows_per_year
        .iter()
        .find(|(_, rows)| **rows >= MIN_DAYS_PER_YEAR)
    {
        Some((year, rows)) => {
            let mut detail = format!(
                "{} daily rows for {} with {} numeric interval columns",
                rows, year, found
            );
            if found > expected {
                detail.push_str(&format!(
                    "; {} extra columns beyond the expected {} are present but unused",
                    found - expected,
                    expected
                ));
            }
            Ok(Classification {
                format: DiagramFormat::new(Layout::TwoDimensional, granularity),
                detail,
            })
        }
        None => {
            let per_year = rows_per_year
                .iter()
                .map(|(year, rows)| format!("{}: {} rows", year, rows))
                .collect::<Vec<_>>()
                .join(", ");
            Err(Failure::new(
                FailureKind::NoCompleteYear,
                format!(
                    "2D layout detected but no year has at least {} daily rows ({})",
                    MIN_DAYS_PER_YEAR, per_year
                ),
            ))
        }
    }
}
