use serde::{Deserialize, Serialize};

use super::defaults;

/// Contested-node resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Tie-break order. Listed labels win ties in list order; unlisted labels
    /// follow in order of first appearance in the edge table.
    pub label_priority: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            label_priority: defaults::DEFAULT_LABEL_PRIORITY
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}
