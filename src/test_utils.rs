//! Test utilities for loadprofile tests
//!
//! Generators for synthetic load diagrams in the layouts recognized by the
//! classifier. Values are formatted the way spreadsheet exports usually
//! render them.

use crate::datamodel::{Granularity, is_leap_year};
use crate::infer::datagrid::StringDataGrid;

/// Every date of `year`, in order.
pub fn dates_of_year(year: i32) -> Vec<(i32, u8, u8)> {
    let mut dates = Vec::with_capacity(366);
    for month in 1..=12_u8 {
        let days = match month {
            2 if is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        for day in 1..=days {
            dates.push((year, month, day));
        }
    }
    dates
}

fn format_stamp((year, month, day): (i32, u8, u8), minutes: u32) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:00",
        year,
        month,
        day,
        minutes / 60,
        minutes % 60
    )
}

/// Interval end stamps of a complete year, from `YYYY-01-01 01:00` (or
/// `00:15`) up to and including the closing midnight of the next year.
pub fn interval_stamps(year: i32, granularity: Granularity) -> Vec<String> {
    let mut dates = dates_of_year(year);
    dates.push((year + 1, 1, 1));
    let per_day = granularity.intervals_per_day() as u32;
    let step = granularity.interval_minutes() as u32;

    let mut stamps = Vec::with_capacity(dates.len() * per_day as usize);
    for window in dates.windows(2) {
        for interval in 1..per_day {
            stamps.push(format_stamp(window[0], interval * step));
        }
        stamps.push(format_stamp(window[1], 0));
    }
    stamps
}

/// A one-dimensional diagram: a timestamp column and a load column.
pub fn one_dimensional_rows(year: i32, granularity: Granularity) -> Vec<Vec<String>> {
    interval_stamps(year, granularity)
        .into_iter()
        .enumerate()
        .map(|(index, stamp)| vec![stamp, format!("{:.3}", 0.5 + (index % 7) as f64 * 0.125)])
        .collect()
}

pub fn one_dimensional_grid(year: i32, granularity: Granularity) -> StringDataGrid {
    grid(&["timestamp", "load_kwh"], one_dimensional_rows(year, granularity))
}

/// A two-dimensional diagram: one row per day and `interval_columns`
/// numeric columns.
pub fn two_dimensional_rows(year: i32, interval_columns: usize) -> Vec<Vec<String>> {
    dates_of_year(year)
        .into_iter()
        .map(|(year, month, day)| {
            let mut row = Vec::with_capacity(interval_columns + 1);
            row.push(format!("{:04}-{:02}-{:02}", year, month, day));
            row.extend((0..interval_columns).map(|interval| format!("{}", interval % 10)));
            row
        })
        .collect()
}

pub fn two_dimensional_grid(year: i32, interval_columns: usize) -> StringDataGrid {
    let mut column_names = vec!["date".to_string()];
    column_names.extend((1..=interval_columns).map(|interval| interval.to_string()));
    StringDataGrid {
        column_names,
        rows: two_dimensional_rows(year, interval_columns),
    }
}

/// Builds a grid from rows that are known to be rectangular.
pub fn grid(column_names: &[&str], rows: Vec<Vec<String>>) -> StringDataGrid {
    StringDataGrid {
        column_names: column_names.iter().map(|name| name.to_string()).collect(),
        rows,
    }
}
