use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::datamodel::DiagramFormat;

/// Why a table does not match any of the known load diagram layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// A value of the first column is not a timestamp.
    TimestampParseError,
    /// A daily table has a row that is not stamped at midnight.
    NonMidnightTimestamp,
    /// No calendar year holds a complete diagram.
    NoCompleteYear,
    /// A daily table has fewer than 24 numeric interval columns.
    InsufficientIntervalColumns,
    /// The table is empty or has no measurement column at all.
    UnrecognizedFormat,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::TimestampParseError => "Error - unparsable timestamp",
            FailureKind::NonMidnightTimestamp => "Error - non-midnight timestamp in 2D layout",
            FailureKind::NoCompleteYear => "Error - no complete year",
            FailureKind::InsufficientIntervalColumns => "Error - insufficient interval columns",
            FailureKind::UnrecognizedFormat => "Error - unrecognized format",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {detail}")]
pub struct Failure {
    pub kind: FailureKind,
    pub detail: String,
}

impl Failure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub format: DiagramFormat,
    pub detail: String,
}

pub type ClassificationResult = Result<Classification, Failure>;

/// Flattens a classification into the `(label, detail)` pair shown to users.
pub fn label_and_detail(result: &ClassificationResult) -> (String, String) {
    match result {
        Ok(classification) => (
            classification.format.label(),
            classification.detail.clone(),
        ),
        Err(failure) => (failure.kind.label().to_string(), failure.detail.clone()),
    }
}

/// Only the four canonical layout labels are successes.
pub fn is_success_label(label: &str) -> bool {
    DiagramFormat::from_label(label).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::{Granularity, Layout};

    #[test]
    fn test_label_and_detail() {
        let success: ClassificationResult = Ok(Classification {
            format: DiagramFormat::new(Layout::OneDimensional, Granularity::QuarterHourly),
            detail: "complete".to_string(),
        });
        assert_eq!(
            label_and_detail(&success),
            ("1D 15-minute".to_string(), "complete".to_string())
        );

        let failure: ClassificationResult = Err(Failure::new(
            FailureKind::InsufficientIntervalColumns,
            "found 23",
        ));
        let (label, detail) = label_and_detail(&failure);
        assert_eq!(label, "Error - insufficient interval columns");
        assert_eq!(detail, "found 23");
        assert!(!is_success_label(&label));
    }

    #[test]
    fn test_failure_labels_are_not_success_labels() {
        for kind in [
            FailureKind::TimestampParseError,
            FailureKind::NonMidnightTimestamp,
            FailureKind::NoCompleteYear,
            FailureKind::InsufficientIntervalColumns,
            FailureKind::UnrecognizedFormat,
        ] {
            assert!(kind.label().starts_with("Error - "));
            assert!(!is_success_label(kind.label()));
        }
        for format in DiagramFormat::ALL {
            assert!(is_success_label(&format.label()));
        }
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure::new(FailureKind::NoCompleteYear, "no year has enough rows");
        assert_eq!(
            failure.to_string(),
            "Error - no complete year: no year has enough rows"
        );
    }
}
