//! Element exporter: flattens label graphs and their visual records into one
//! ordered sequence for the rendering layer.
//!
//! Nodes come first, one per entity in first-appearance order; edges follow
//! in first-insertion order. The same inputs always serialize identically.

use tracing::info;

use claimnet_core::config::RenderConfig;
use claimnet_core::errors::ExportError;
use claimnet_core::models::{EdgeElement, Element, Label, NodeElement};

use crate::graph::LabelGraphSet;
use crate::visual::{NodeVisual, VisualRecords};

/// Export every node and edge. `visuals` must come from `set`.
pub fn export(set: &LabelGraphSet, visuals: &VisualRecords, config: &RenderConfig) -> Vec<Element> {
    let mut elements = Vec::with_capacity(set.entity_order().len() + set.edge_order().len());

    for entity in set.entity_order() {
        if let Some(node) = representative_node(set, visuals, entity) {
            elements.push(Element::Node(NodeElement {
                id: node.id.clone(),
                group: node.group.clone(),
                size: node.size,
                label_size: node.label_size,
                color: config.color_for(node.group.as_str()).to_string(),
            }));
        }
    }
    let node_count = elements.len();

    for slot in set.edge_order() {
        let edge = visuals
            .graphs
            .get(slot.graph)
            .and_then(|g| g.edges.get(slot.edge.index()));
        if let Some(edge) = edge {
            elements.push(Element::Edge(EdgeElement {
                source: edge.source.clone(),
                target: edge.target.clone(),
                relation: edge.label.clone(),
                weight: edge.weight,
                width: edge.width,
                label: weight_annotation(&edge.label, edge.weight),
                color: config.color_for(edge.label.as_str()).to_string(),
            }));
        }
    }

    info!(
        nodes = node_count,
        edges = elements.len() - node_count,
        "elements exported"
    );
    elements
}

/// Serialize elements as a JSON array.
pub fn to_json(elements: &[Element]) -> Result<String, ExportError> {
    Ok(serde_json::to_string(elements)?)
}

/// Hover text for an edge, e.g. `SUPPORTS (weight: 3)`.
pub fn weight_annotation(label: &Label, weight: f64) -> String {
    format!("{label} (weight: {weight})")
}

/// The one node record rendered for an entity: the copy from the graph of its
/// group, else the copy from the earliest graph containing it.
fn representative_node<'a>(
    set: &LabelGraphSet,
    visuals: &'a VisualRecords,
    entity: &str,
) -> Option<&'a NodeVisual> {
    let mut fallback = None;
    for (graph, graph_visuals) in set.graphs().iter().zip(&visuals.graphs) {
        let Some(idx) = graph.get_node(entity) else {
            continue;
        };
        let Some(node) = graph_visuals.nodes.get(idx.index()) else {
            continue;
        };
        if node.group == node.label {
            return Some(node);
        }
        fallback.get_or_insert(node);
    }
    fallback
}
