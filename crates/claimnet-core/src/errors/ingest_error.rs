//! Boundary validation errors for edge-table rows.

use crate::constants::MAX_REJECTIONS_DISPLAYED;

/// Why a single row was refused. `row` is the zero-based input position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowRejection {
    #[error("row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: weight {value:?} is not numeric")]
    NonNumericWeight { row: usize, value: String },

    #[error("row {row}: weight {value} is not finite")]
    NonFiniteWeight { row: usize, value: f64 },

    #[error("row {row}: negative weight {value}")]
    NegativeWeight { row: usize, value: f64 },

    #[error("row {row}: label {label:?} is not in the allowed label set")]
    UnknownLabel { row: usize, label: String },
}

impl RowRejection {
    pub fn row(&self) -> usize {
        match self {
            Self::MissingField { row, .. }
            | Self::NonNumericWeight { row, .. }
            | Self::NonFiniteWeight { row, .. }
            | Self::NegativeWeight { row, .. }
            | Self::UnknownLabel { row, .. } => *row,
        }
    }
}

/// Edge-table ingestion errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    #[error(
        "edge table rejected: {} malformed row(s): {}",
        .rejections.len(),
        summarize(.rejections)
    )]
    Rejected { rejections: Vec<RowRejection> },
}

impl IngestError {
    pub fn rejections(&self) -> &[RowRejection] {
        match self {
            Self::Rejected { rejections } => rejections,
        }
    }
}

fn summarize(rejections: &[RowRejection]) -> String {
    let mut shown: Vec<String> = rejections
        .iter()
        .take(MAX_REJECTIONS_DISPLAYED)
        .map(ToString::to_string)
        .collect();
    if rejections.len() > MAX_REJECTIONS_DISPLAYED {
        shown.push(format!(
            "and {} more",
            rejections.len() - MAX_REJECTIONS_DISPLAYED
        ));
    }
    shown.join("; ")
}
