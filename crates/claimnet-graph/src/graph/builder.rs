//! Label graph builder: partitions the edge table by label.

use std::collections::HashSet;

use tracing::{debug, info};

use claimnet_core::config::DuplicatePolicy;
use claimnet_core::models::EdgeRow;

use super::{EdgeSlot, LabelGraphSet};

/// Build one graph per distinct label, consuming rows in input order.
///
/// Labels are not checked against any closed set; an unexpected label string
/// simply becomes its own graph. Repeated (source, target, label) rows are
/// combined per `policy` (last write wins under `Overwrite`).
pub fn build(rows: &[EdgeRow], policy: DuplicatePolicy) -> LabelGraphSet {
    let mut set = LabelGraphSet::default();
    let mut seen_entities: HashSet<&str> = HashSet::new();
    let mut duplicates = 0usize;

    for row in rows {
        for entity in [row.source.as_str(), row.target.as_str()] {
            if seen_entities.insert(entity) {
                set.entity_order.push(entity.to_string());
            }
        }

        let graph_idx = set.graph_index_or_insert(&row.label);
        let (edge, inserted) =
            set.graphs[graph_idx].upsert_edge(&row.source, &row.target, row.weight, policy);

        if inserted {
            set.edge_order.push(EdgeSlot {
                graph: graph_idx,
                edge,
            });
        } else {
            duplicates += 1;
            debug!(
                source = %row.source,
                target = %row.target,
                label = %row.label,
                ?policy,
                "duplicate edge row"
            );
        }
    }

    info!(
        rows = rows.len(),
        labels = set.len(),
        entities = set.entity_order.len(),
        edges = set.edge_order.len(),
        duplicates,
        "label graphs built"
    );

    set
}
