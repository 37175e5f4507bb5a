use std::collections::BTreeSet;

use tracing::debug;

use super::result::{Classification, ClassificationResult, Failure, FailureKind};
use crate::datamodel::{
    DiagramFormat, Granularity, Layout, LoadDateTime, LoadDateTimeExt, is_leap_year,
};

const GRANULARITIES: [Granularity; 2] = [Granularity::Hourly, Granularity::QuarterHourly];

struct YearCounts {
    year: i32,
    hourly: usize,
    quarter_hourly: usize,
}

/// Counts the rows inside the yearly window of `year`.
///
/// The window is shifted by one interval since a row is stamped with the end
/// of its interval: the hourly window of 2023 runs from 2023-01-01 01:00 up
/// to, but excluding, 2024-01-01 01:00. `sorted` must be in ascending order.
fn count_in_window(sorted: &[LoadDateTime], granularity: Granularity, year: i32) -> usize {
    let (hour, minute) = granularity.window_opening();
    let start = LoadDateTime::start_of_year_at(year, hour, minute);
    let end = LoadDateTime::start_of_year_at(year + 1, hour, minute);
    let first = sorted.partition_point(|timestamp| *timestamp < start);
    let last = sorted.partition_point(|timestamp| *timestamp < end);
    last - first
}

fn success_detail(
    granularity: Granularity,
    year: i32,
    count: usize,
    full: usize,
    numeric_columns: &BTreeSet<usize>,
) -> String {
    let mut detail = format!(
        "{} rows in the {} window of {}",
        count,
        granularity.label(),
        year
    );
    if count == full {
        detail.push_str(", complete year");
    } else {
        detail.push_str(&format!(
            ", the final row ({}-01-01 00:00) is missing",
            year + 1
        ));
    }
    match numeric_columns.len() {
        0 => detail.push_str("; no numeric measurement column was found"),
        1 => {}
        found => detail.push_str(&format!(
            "; {} extra numeric columns are ignored",
            found - 1
        )),
    }
    detail
}

fn no_complete_year_detail(observed: &[YearCounts]) -> String {
    let per_year = observed
        .iter()
        .map(|counts| {
            let leap = is_leap_year(counts.year);
            format!(
                "{}: {} rows in the hourly window (expected {}), {} rows in the 15-minute window (expected {})",
                counts.year,
                counts.hourly,
                Granularity::Hourly.full_year_rows(leap),
                counts.quarter_hourly,
                Granularity::QuarterHourly.full_year_rows(leap)
            )
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("1D layout detected but no complete year was found. {}", per_year)
}

pub(super) fn classify(
    timestamps: &[LoadDateTime],
    numeric_columns: &BTreeSet<usize>,
) -> ClassificationResult {
    let years: BTreeSet<i32> = timestamps
        .iter()
        .map(|timestamp| timestamp.calendar().year)
        .collect();
    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let mut observed = Vec::with_capacity(years.len());
    for year in years {
        let leap = is_leap_year(year);
        let mut counts = [0_usize; GRANULARITIES.len()];

        for (slot, granularity) in counts.iter_mut().zip(GRANULARITIES) {
            let count = count_in_window(&sorted, granularity, year);
            let full = granularity.full_year_rows(leap);
            debug!(year, granularity = granularity.label(), count, full, "Counted window rows");

            // The closing midnight row is often missing from exports.
            if count == full || count + 1 == full {
                return Ok(Classification {
                    format: DiagramFormat::new(Layout::OneDimensional, granularity),
                    detail: success_detail(granularity, year, count, full, numeric_columns),
                });
            }
            *slot = count;
        }

        observed.push(YearCounts {
            year,
            hourly: counts[0],
            quarter_hourly: counts[1],
        });
    }

    Err(Failure::new(
        FailureKind::NoCompleteYear,
        no_complete_year_detail(&observed),
    ))
}
