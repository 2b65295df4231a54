//! petgraph::StableGraph wrapper holding the edges of a single label.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use claimnet_core::config::DuplicatePolicy;
use claimnet_core::models::Label;

/// A node in a label graph, representing an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityNode {
    /// The entity id this node represents.
    pub entity_id: String,
}

/// Weight on a label graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StanceEdge {
    pub weight: f64,
}

/// The underlying directed graph type.
pub type StanceStableGraph = StableGraph<EntityNode, StanceEdge, Directed>;

/// One directed graph per label, with indexed access by entity id.
///
/// Nodes and edges are never removed, so node and edge indices follow
/// insertion order.
#[derive(Debug, Clone)]
pub struct LabelGraph {
    label: Label,
    /// The petgraph stable graph.
    pub graph: StanceStableGraph,
    /// Map from entity_id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl LabelGraph {
    /// Create an empty graph for `label`.
    pub fn new(label: Label) -> Self {
        Self {
            label,
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Get or create the node for an entity.
    pub fn ensure_node(&mut self, entity_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(entity_id) {
            return idx;
        }
        let idx = self.graph.add_node(EntityNode {
            entity_id: entity_id.to_string(),
        });
        self.node_index.insert(entity_id.to_string(), idx);
        idx
    }

    /// Look up a node index by entity id.
    pub fn get_node(&self, entity_id: &str) -> Option<NodeIndex> {
        self.node_index.get(entity_id).copied()
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.node_index.contains_key(entity_id)
    }

    /// Insert the `source → target` edge, creating endpoints as needed.
    ///
    /// An existing edge between the same pair is updated per `policy` rather
    /// than duplicated. Returns the edge index and whether the edge is new.
    pub fn upsert_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        policy: DuplicatePolicy,
    ) -> (EdgeIndex, bool) {
        let src = self.ensure_node(source);
        let tgt = self.ensure_node(target);

        if let Some(edge_idx) = self.graph.find_edge(src, tgt) {
            if let Some(existing) = self.graph.edge_weight_mut(edge_idx) {
                match policy {
                    DuplicatePolicy::Overwrite => existing.weight = weight,
                    DuplicatePolicy::Accumulate => existing.weight += weight,
                }
            }
            return (edge_idx, false);
        }

        (self.graph.add_edge(src, tgt, StanceEdge { weight }), true)
    }

    /// Sum of outgoing edge weights from `idx` to neighbors in this graph.
    /// Incoming edges never contribute; a self-loop counts once.
    pub fn outgoing_weight(&self, idx: NodeIndex) -> f64 {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|edge| self.graph.contains_node(edge.target()))
            .map(|edge| edge.weight().weight)
            .sum()
    }

    /// Outgoing weight by entity id, `None` when the entity is absent.
    pub fn outgoing_weight_of(&self, entity_id: &str) -> Option<f64> {
        self.get_node(entity_id).map(|idx| self.outgoing_weight(idx))
    }

    /// Entity ids in insertion order.
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|node| node.entity_id.as_str())
    }

    /// `(source, target, weight)` of an edge.
    pub fn edge(&self, idx: EdgeIndex) -> Option<(&str, &str, f64)> {
        let (src, tgt) = self.graph.edge_endpoints(idx)?;
        let weight = self.graph.edge_weight(idx)?.weight;
        Some((
            self.graph.node_weight(src)?.entity_id.as_str(),
            self.graph.node_weight(tgt)?.entity_id.as_str(),
            weight,
        ))
    }

    /// Edge weight between two entities.
    pub fn edge_weight_between(&self, source: &str, target: &str) -> Option<f64> {
        let edge_idx = self
            .graph
            .find_edge(self.get_node(source)?, self.get_node(target)?)?;
        self.graph.edge_weight(edge_idx).map(|w| w.weight)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
