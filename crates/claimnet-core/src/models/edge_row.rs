//! Edge-table rows, before and after boundary validation.

use serde::{Deserialize, Serialize};

use super::label::Label;

/// A validated row of the edge table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    /// Source entity id.
    pub source: String,
    /// Target entity id.
    pub target: String,
    /// Relationship label, routed to the graph of the same name.
    pub label: Label,
    /// Non-negative, finite edge weight.
    pub weight: f64,
}

impl EdgeRow {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<Label>,
        weight: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            weight,
        }
    }
}

/// A weight cell as handed over by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawWeight {
    Number(f64),
    Text(String),
}

/// An unvalidated row: any cell may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEdgeRow {
    pub source: Option<String>,
    pub target: Option<String>,
    pub label: Option<String>,
    pub weight: Option<RawWeight>,
}

impl RawEdgeRow {
    /// Row with every cell present and a numeric weight.
    pub fn complete(source: &str, target: &str, label: &str, weight: f64) -> Self {
        Self {
            source: Some(source.to_string()),
            target: Some(target.to_string()),
            label: Some(label.to_string()),
            weight: Some(RawWeight::Number(weight)),
        }
    }
}

impl From<EdgeRow> for RawEdgeRow {
    fn from(row: EdgeRow) -> Self {
        Self {
            source: Some(row.source),
            target: Some(row.target),
            label: Some(row.label.as_str().to_string()),
            weight: Some(RawWeight::Number(row.weight)),
        }
    }
}
