//! Property tests for claimnet-graph: node presence, derivation idempotence,
//! scale monotonicity, size floor, assignment totality, tie determinism.

use proptest::prelude::*;

use claimnet_core::config::{DuplicatePolicy, Normalization, RenderConfig};
use claimnet_core::models::{EdgeRow, Label};
use claimnet_graph::graph::{self, LabelGraphSet};
use claimnet_graph::resolver::{self, Assignment};
use claimnet_graph::visual::VisualDeriver;

const LABELS: [&str; 3] = ["SUPPORTS", "REFUTES", "NOT_ENOUGH_INFO"];

fn priority() -> Vec<String> {
    vec![Label::SUPPORTS.to_string(), Label::REFUTES.to_string()]
}

// Strategy for edge tables over `n` entities and the first `labels` labels.
fn table_strategy(n: usize, labels: usize) -> impl Strategy<Value = Vec<EdgeRow>> {
    prop::collection::vec((0..n, 0..n, 0..labels, 0.0_f64..50.0_f64), 0..n * 3).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(src, tgt, label, weight)| {
                    EdgeRow::new(format!("e{src}"), format!("e{tgt}"), LABELS[label], weight)
                })
                .collect()
        },
    )
}

fn normalization_strategy() -> impl Strategy<Value = Normalization> {
    prop_oneof![Just(Normalization::Linear), Just(Normalization::Compressed)]
}

fn pipeline(rows: &[EdgeRow]) -> (LabelGraphSet, Assignment) {
    let set = graph::build(rows, DuplicatePolicy::Overwrite);
    let assignment = resolver::resolve(&set, &priority());
    (set, assignment)
}

// =============================================================================
// Every endpoint is a node of its label's graph
// =============================================================================
proptest! {
    #[test]
    fn endpoints_are_nodes_of_their_label_graph(rows in table_strategy(12, 3)) {
        let (set, _) = pipeline(&rows);
        for row in &rows {
            let graph = set.get(row.label.as_str());
            prop_assert!(graph.is_some(), "missing graph for {}", row.label);
            let graph = graph.unwrap();
            prop_assert!(graph.contains(&row.source));
            prop_assert!(graph.contains(&row.target));
        }
    }
}

// =============================================================================
// Derivation is idempotent
// =============================================================================
proptest! {
    #[test]
    fn derivation_is_idempotent(
        rows in table_strategy(10, 2),
        scale in 0.01_f64..10.0,
        normalization in normalization_strategy(),
    ) {
        let (set, assignment) = pipeline(&rows);
        let deriver = VisualDeriver::new(RenderConfig {
            normalization,
            ..Default::default()
        })
        .unwrap();

        let first = deriver.derive(&set, &assignment, scale).unwrap();
        // A derivation at another scale in between must not leak into the next.
        deriver.derive(&set, &assignment, scale * 3.0).unwrap();
        let second = deriver.derive(&set, &assignment, scale).unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Larger scale never shrinks a node
// =============================================================================
proptest! {
    #[test]
    fn size_is_monotonic_in_scale(
        rows in table_strategy(10, 2),
        low in 0.01_f64..5.0,
        bump in 0.0_f64..5.0,
        normalization in normalization_strategy(),
    ) {
        let (set, assignment) = pipeline(&rows);
        let deriver = VisualDeriver::new(RenderConfig {
            normalization,
            ..Default::default()
        })
        .unwrap();

        let small = deriver.derive(&set, &assignment, low).unwrap();
        let large = deriver.derive(&set, &assignment, low + bump).unwrap();
        for (a, b) in small.nodes().zip(large.nodes()) {
            prop_assert_eq!(&a.id, &b.id);
            prop_assert!(b.size >= a.size, "{}: {} < {}", a.id, b.size, a.size);
        }
    }
}

// =============================================================================
// Every node is at least the floor
// =============================================================================
proptest! {
    #[test]
    fn size_never_below_floor(
        rows in table_strategy(10, 3),
        scale in 0.0001_f64..10.0,
        floor in 0.1_f64..20.0,
        normalization in normalization_strategy(),
    ) {
        let (set, assignment) = pipeline(&rows);
        let deriver = VisualDeriver::new(RenderConfig {
            normalization,
            size_floor: floor,
            ..Default::default()
        })
        .unwrap();

        let visuals = deriver.derive(&set, &assignment, scale).unwrap();
        for node in visuals.nodes() {
            prop_assert!(node.size >= floor);
            prop_assert!(node.label_size >= deriver.config().label_size_floor);
        }
    }
}

// =============================================================================
// Contested entities get exactly one label; nobody else gets one
// =============================================================================
proptest! {
    #[test]
    fn assignment_is_total_and_exclusive(rows in table_strategy(12, 3)) {
        let (set, assignment) = pipeline(&rows);
        let contested = resolver::contested_entities(&set);

        prop_assert_eq!(assignment.len(), contested.len());
        for entity in &contested {
            let winner = assignment.get(entity);
            prop_assert!(winner.is_some(), "{} unassigned", entity);
            prop_assert!(set.get(winner.unwrap().as_str()).is_some());
        }
        for entity in set.entity_order() {
            if !contested.contains(&entity.as_str()) {
                prop_assert!(!assignment.contains(entity));
            }
        }
    }
}

// =============================================================================
// Ties always resolve to the same label
// =============================================================================
proptest! {
    #[test]
    fn ties_resolve_deterministically(weight in 0.0_f64..100.0, refutes_first in any::<bool>()) {
        let mut rows = vec![
            EdgeRow::new("claim", "ev1", Label::SUPPORTS, weight),
            EdgeRow::new("claim", "ev2", Label::REFUTES, weight),
        ];
        if refutes_first {
            rows.reverse();
        }

        let mut winners = Vec::new();
        for _ in 0..3 {
            let (_, assignment) = pipeline(&rows);
            let resolution = assignment.resolution("claim").unwrap().clone();
            prop_assert!(resolution.tie_broken);
            winners.push(resolution.winner);
        }
        prop_assert!(winners.iter().all(|w| w == Label::SUPPORTS));
    }
}
