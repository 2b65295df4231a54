use serde::{Deserialize, Serialize};

use super::defaults;

/// How repeated (source, target, label) rows are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Last row wins.
    #[default]
    Overwrite,
    /// Weights of repeated rows are summed.
    Accumulate,
}

/// Ingestion boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Closed-world label set. Empty accepts any label.
    pub allowed_labels: Vec<String>,
    /// Handling of repeated edges.
    pub duplicate_edges: DuplicatePolicy,
}

impl IngestConfig {
    /// Whether `label` passes the allowed-label check.
    pub fn allows(&self, label: &str) -> bool {
        self.allowed_labels.is_empty() || self.allowed_labels.iter().any(|l| l == label)
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            allowed_labels: defaults::DEFAULT_ALLOWED_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            duplicate_edges: DuplicatePolicy::default(),
        }
    }
}
