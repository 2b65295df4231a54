//! Visual attribute deriver: node size, label size, and edge width from
//! aggregate weight.
//!
//! Derivation reads only the immutable label graphs and assignment, so calling
//! it again with another scale never compounds earlier results.

pub mod sizing;

use serde::Serialize;
use tracing::debug;

use claimnet_core::config::{validate_scale, RenderConfig};
use claimnet_core::errors::RenderError;
use claimnet_core::models::Label;

use crate::graph::{LabelGraph, LabelGraphSet};
use crate::resolver::Assignment;

/// Derived attributes of one node in one label graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    pub id: String,
    /// The label graph the node was derived from.
    pub label: Label,
    /// Rendered group: assignment winner if contested, else `label`.
    pub group: Label,
    /// Outgoing weight within `label`'s graph.
    pub raw_weight: f64,
    pub size: f64,
    pub label_size: f64,
}

/// Derived attributes of one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeVisual {
    pub source: String,
    pub target: String,
    pub label: Label,
    pub weight: f64,
    pub width: f64,
}

/// Visual records of a single label graph, in node and edge index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphVisuals {
    pub label: Label,
    pub nodes: Vec<NodeVisual>,
    pub edges: Vec<EdgeVisual>,
}

/// Visual records of every label graph, aligned with `LabelGraphSet::graphs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualRecords {
    pub scale: f64,
    pub graphs: Vec<GraphVisuals>,
}

impl VisualRecords {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeVisual> + '_ {
        self.graphs.iter().flat_map(|g| g.nodes.iter())
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeVisual> + '_ {
        self.graphs.iter().flat_map(|g| g.edges.iter())
    }

    /// The node record of `id` derived from `label`'s graph.
    pub fn node(&self, label: &str, id: &str) -> Option<&NodeVisual> {
        self.graphs
            .iter()
            .find(|g| g.label == label)?
            .nodes
            .iter()
            .find(|n| n.id == id)
    }
}

/// Derives visual records under a fixed, validated render config.
#[derive(Debug, Clone)]
pub struct VisualDeriver {
    config: RenderConfig,
}

impl VisualDeriver {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Derive records for every graph in the set.
    pub fn derive(
        &self,
        set: &LabelGraphSet,
        assignment: &Assignment,
        scale: f64,
    ) -> Result<VisualRecords, RenderError> {
        validate_scale(scale)?;
        let graphs = set
            .graphs()
            .iter()
            .map(|graph| self.derive_unchecked(graph, assignment, scale))
            .collect();
        Ok(VisualRecords { scale, graphs })
    }

    /// Derive records for a single graph.
    pub fn derive_graph(
        &self,
        graph: &LabelGraph,
        assignment: &Assignment,
        scale: f64,
    ) -> Result<GraphVisuals, RenderError> {
        validate_scale(scale)?;
        Ok(self.derive_unchecked(graph, assignment, scale))
    }

    fn derive_unchecked(
        &self,
        graph: &LabelGraph,
        assignment: &Assignment,
        scale: f64,
    ) -> GraphVisuals {
        let label = graph.label();

        let nodes: Vec<NodeVisual> = graph
            .graph
            .node_indices()
            .filter_map(|idx| {
                let node = graph.graph.node_weight(idx)?;
                let raw_weight = graph.outgoing_weight(idx);
                let size = sizing::node_size(raw_weight, scale, &self.config);
                let group = assignment
                    .get(&node.entity_id)
                    .unwrap_or(label)
                    .clone();
                Some(NodeVisual {
                    id: node.entity_id.clone(),
                    label: label.clone(),
                    group,
                    raw_weight,
                    size,
                    label_size: sizing::label_size(size, &self.config),
                })
            })
            .collect();

        let edges: Vec<EdgeVisual> = graph
            .graph
            .edge_indices()
            .filter_map(|idx| {
                let (source, target, weight) = graph.edge(idx)?;
                Some(EdgeVisual {
                    source: source.to_string(),
                    target: target.to_string(),
                    label: label.clone(),
                    weight,
                    width: sizing::edge_width(weight, &self.config),
                })
            })
            .collect();

        debug!(
            label = %label,
            nodes = nodes.len(),
            edges = edges.len(),
            scale,
            "visual records derived"
        );

        GraphVisuals {
            label: label.clone(),
            nodes,
            edges,
        }
    }
}
