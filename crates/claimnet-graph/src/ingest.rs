//! Ingestion boundary: turns raw tabular rows into validated `EdgeRow`s.
//!
//! Every row is checked; a single bad row refuses the whole table so nothing
//! is dropped silently.

use tracing::{info, warn};

use claimnet_core::config::IngestConfig;
use claimnet_core::errors::{IngestError, RowRejection};
use claimnet_core::models::{EdgeRow, Label, RawEdgeRow, RawWeight};

/// Validate an edge table.
pub fn validate_rows(
    rows: &[RawEdgeRow],
    config: &IngestConfig,
) -> Result<Vec<EdgeRow>, IngestError> {
    let mut accepted = Vec::with_capacity(rows.len());
    let mut rejections = Vec::new();

    for (row, raw) in rows.iter().enumerate() {
        match validate_row(row, raw, config) {
            Ok(edge) => accepted.push(edge),
            Err(rejection) => rejections.push(rejection),
        }
    }

    if !rejections.is_empty() {
        warn!(
            rows = rows.len(),
            rejected = rejections.len(),
            "edge table rejected"
        );
        return Err(IngestError::Rejected { rejections });
    }

    info!(rows = accepted.len(), "edge table validated");
    Ok(accepted)
}

/// Validate one row. Only the first problem found is reported.
pub fn validate_row(
    row: usize,
    raw: &RawEdgeRow,
    config: &IngestConfig,
) -> Result<EdgeRow, RowRejection> {
    let source = required(row, "source", raw.source.as_deref())?;
    let target = required(row, "target", raw.target.as_deref())?;
    let label = required(row, "label", raw.label.as_deref())?;
    let weight = parse_weight(row, raw.weight.as_ref())?;

    if !config.allows(label) {
        return Err(RowRejection::UnknownLabel {
            row,
            label: label.to_string(),
        });
    }

    Ok(EdgeRow {
        source: source.to_string(),
        target: target.to_string(),
        label: Label::new(label),
        weight,
    })
}

fn required<'a>(
    row: usize,
    field: &'static str,
    cell: Option<&'a str>,
) -> Result<&'a str, RowRejection> {
    match cell {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RowRejection::MissingField { row, field }),
    }
}

fn parse_weight(row: usize, cell: Option<&RawWeight>) -> Result<f64, RowRejection> {
    let value = match cell {
        None => {
            return Err(RowRejection::MissingField {
                row,
                field: "weight",
            })
        }
        Some(RawWeight::Number(value)) => *value,
        Some(RawWeight::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(RowRejection::MissingField {
                    row,
                    field: "weight",
                });
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| RowRejection::NonNumericWeight {
                    row,
                    value: text.clone(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(RowRejection::NonFiniteWeight { row, value });
    }
    if value < 0.0 {
        return Err(RowRejection::NegativeWeight { row, value });
    }
    Ok(value)
}
