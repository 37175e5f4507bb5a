use super::parsing::{InferedValue, infer_cell, parse_timestamp};

fn is_label(cell: &str) -> bool {
    match infer_cell(cell) {
        InferedValue::String(string_value) => !string_value.trim().is_empty(),
        _ => false,
    }
}

pub fn is_header(cells: &[String]) -> bool {
    if cells.is_empty() {
        return false;
    }
    cells.iter().all(|cell| is_label(cell))
}

/// Detects a header row above a load diagram.
///
/// Two-dimensional diagrams often number their interval columns (`1`, `2`,
/// ... `24`) and leave the top-left cell empty, so a row also counts as a
/// header when its first cell is a label or blank and the first cell of the
/// next row is a timestamp.
pub fn is_header_row(first: &[String], next: Option<&[String]>) -> bool {
    if is_header(first) {
        return true;
    }
    match (first.first(), next.and_then(|row| row.first())) {
        (Some(corner), Some(value)) => {
            (is_label(corner) || corner.trim().is_empty()) && parse_timestamp(value).is_some()
        }
        _ => false,
    }
}
