use serde::Serialize;

use crate::classifier::{ClassificationResult, label_and_detail};
use crate::infer::datagrid::StringDataGrid;

/// Columns shown in a preview before the remaining ones are summarized.
const PREVIEW_MAX_COLUMNS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub success: bool,
    pub label: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl Report {
    pub fn new(result: &ClassificationResult, sheet: Option<String>) -> Self {
        let (label, detail) = label_and_detail(result);
        Self {
            success: result.is_ok(),
            label,
            detail,
            sheet,
        }
    }

    pub fn to_text(&self) -> String {
        if self.success {
            format!("✅ Detected format: **{}**\n{}", self.label, self.detail)
        } else {
            format!("❌ {}\n{}", self.label, self.detail)
        }
    }
}

/// Renders the first `rows` rows of a grid as an aligned text table.
pub fn render_preview(grid: &StringDataGrid, rows: usize) -> String {
    let shown_columns = grid.column_count().min(PREVIEW_MAX_COLUMNS);
    let shown_rows = &grid.rows[..grid.row_count().min(rows)];

    let mut widths: Vec<usize> = grid.column_names[..shown_columns]
        .iter()
        .map(|name| name.chars().count())
        .collect();
    for row in shown_rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let hidden_columns = grid.column_count() - shown_columns;
    let format_line = |cells: &[String]| {
        let mut line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        if hidden_columns > 0 {
            line.push_str(" | …");
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(shown_rows.len() + 3);
    lines.push(format_line(&grid.column_names[..shown_columns]));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in shown_rows {
        lines.push(format_line(&row[..shown_columns]));
    }
    if hidden_columns > 0 {
        lines.push(format!("({} more columns not shown)", hidden_columns));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classification, Failure, FailureKind};
    use crate::datamodel::{DiagramFormat, Granularity, Layout};

    #[test]
    fn test_report_success() {
        let result: ClassificationResult = Ok(Classification {
            format: DiagramFormat::new(Layout::TwoDimensional, Granularity::Hourly),
            detail: "365 daily rows for 2023 with 24 numeric interval columns".to_string(),
        });
        let report = Report::new(&result, Some("Sheet1".to_string()));
        assert!(report.success);
        assert_eq!(report.label, "2D hourly");
        assert_eq!(
            report.to_text(),
            "✅ Detected format: **2D hourly**\n365 daily rows for 2023 with 24 numeric interval columns"
        );
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "success": true,
                "label": "2D hourly",
                "detail": "365 daily rows for 2023 with 24 numeric interval columns",
                "sheet": "Sheet1",
            })
        );
    }

    #[test]
    fn test_report_failure() {
        let result: ClassificationResult = Err(Failure::new(
            FailureKind::InsufficientIntervalColumns,
            "found 23",
        ));
        let report = Report::new(&result, None);
        assert!(!report.success);
        assert_eq!(
            report.to_text(),
            "❌ Error - insufficient interval columns\nfound 23"
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("sheet").is_none());
    }

    #[test]
    fn test_render_preview() {
        let grid = StringDataGrid::new(
            vec!["timestamp".to_string(), "kWh".to_string()],
            vec![
                vec!["2024-01-01 01:00".to_string(), "1.5".to_string()],
                vec!["2024-01-01 02:00".to_string(), "12.25".to_string()],
                vec!["2024-01-01 03:00".to_string(), "0".to_string()],
            ],
        )
        .unwrap();

        assert_eq!(
            render_preview(&grid, 2),
            "timestamp        | kWh\n\
             -----------------+------\n\
             2024-01-01 01:00 | 1.5\n\
             2024-01-01 02:00 | 12.25"
        );
    }

    #[test]
    fn test_render_preview_hides_extra_columns() {
        let column_names: Vec<String> = (0..10).map(|index| format!("c{}", index)).collect();
        let rows = vec![(0..10).map(|index| index.to_string()).collect::<Vec<_>>()];
        let grid = StringDataGrid::new(column_names, rows).unwrap();

        let preview = render_preview(&grid, 5);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "c0 | c1 | c2 | c3 | c4 | c5 | c6 | c7 | …");
        assert_eq!(lines[2], "0  | 1  | 2  | 3  | 4  | 5  | 6  | 7  | …");
        assert_eq!(lines[3], "(2 more columns not shown)");
    }
}
