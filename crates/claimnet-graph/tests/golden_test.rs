//! Golden dataset tests for claimnet-graph.
//!
//! Loads each golden edge table, runs the full pipeline, and verifies labels,
//! assignment, rendered groups, and edge weights against the recorded
//! expectations.

use std::collections::BTreeMap;

use claimnet_core::models::Element;
use claimnet_core::ClaimnetConfig;
use claimnet_graph::ClaimEngine;
use test_fixtures::{fixture_exists, load_all_golden, load_golden, GoldenCase};

fn run_case(case: &GoldenCase) {
    let engine = ClaimEngine::from_raw(&case.rows, ClaimnetConfig::default())
        .unwrap_or_else(|e| panic!("{}: {e}", case.name));
    let expected = &case.expected;

    let labels: Vec<&str> = engine.graphs().labels().map(|l| l.as_str()).collect();
    assert_eq!(labels, expected.labels, "{}: labels", case.name);

    let assignment: BTreeMap<String, String> = engine
        .assignment()
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect();
    assert_eq!(assignment, expected.assignment, "{}: assignment", case.name);

    let mut ties: Vec<String> = engine
        .assignment()
        .iter()
        .filter(|(id, _)| {
            engine
                .assignment()
                .resolution(id)
                .is_some_and(|r| r.tie_broken)
        })
        .map(|(id, _)| id.to_string())
        .collect();
    ties.sort();
    let mut expected_ties = expected.ties.clone();
    expected_ties.sort();
    assert_eq!(ties, expected_ties, "{}: ties", case.name);

    let elements = engine.export(1.0).unwrap();
    let node_ids: Vec<&str> = elements
        .iter()
        .filter_map(Element::as_node)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(node_ids, expected.entities, "{}: entity order", case.name);

    let groups: BTreeMap<String, String> = elements
        .iter()
        .filter_map(Element::as_node)
        .map(|n| (n.id.clone(), n.group.to_string()))
        .collect();
    assert_eq!(groups, expected.groups, "{}: groups", case.name);

    let edge_count = elements.iter().filter_map(Element::as_edge).count();
    assert_eq!(edge_count, expected.edge_count, "{}: edge count", case.name);

    for (key, weight) in &expected.edge_weights {
        let parts: Vec<&str> = key.splitn(3, '/').collect();
        let [label, source, target] = parts[..] else {
            panic!("{}: malformed edge key {key}", case.name);
        };
        let actual = engine
            .graphs()
            .get(label)
            .and_then(|g| g.edge_weight_between(source, target));
        assert_eq!(actual, Some(*weight), "{}: edge {key}", case.name);
    }

    for element in &elements {
        if let Element::Node(node) = element {
            assert!(
                node.size >= engine.config().render.size_floor,
                "{}: node {} below floor",
                case.name,
                node.id
            );
        }
    }
}

#[test]
fn golden_contested_basic() {
    assert!(fixture_exists("contested_basic.json"));
    run_case(&load_golden("contested_basic.json"));
}

#[test]
fn golden_tie_and_overwrite() {
    run_case(&load_golden("tie_and_overwrite.json"));
}

#[test]
fn golden_open_labels() {
    run_case(&load_golden("open_labels.json"));
}

#[test]
fn golden_all_cases_pass() {
    let cases = load_all_golden();
    assert!(cases.len() >= 3);
    for case in &cases {
        assert!(!case.description.is_empty(), "{}: description", case.name);
        run_case(case);
    }
}
