//! Label graphs: one directed graph per relationship label.

pub mod builder;
pub mod label_graph;

use std::collections::HashMap;

use petgraph::stable_graph::EdgeIndex;

use claimnet_core::models::Label;

pub use builder::build;
pub use label_graph::{EntityNode, LabelGraph, StanceEdge};

/// Position of an edge: which graph, and its index there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSlot {
    pub graph: usize,
    pub edge: EdgeIndex,
}

/// All label graphs of one edge table, plus the input-order bookkeeping the
/// exporter needs for deterministic output.
#[derive(Debug, Clone, Default)]
pub struct LabelGraphSet {
    graphs: Vec<LabelGraph>,
    by_label: HashMap<Label, usize>,
    entity_order: Vec<String>,
    edge_order: Vec<EdgeSlot>,
}

impl LabelGraphSet {
    /// Graphs in order of first label appearance.
    pub fn graphs(&self) -> &[LabelGraph] {
        &self.graphs
    }

    pub fn get(&self, label: &str) -> Option<&LabelGraph> {
        self.by_label.get(label).map(|&idx| &self.graphs[idx])
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.graphs.iter().map(LabelGraph::label)
    }

    /// Entities in order of first appearance in the edge table.
    pub fn entity_order(&self) -> &[String] {
        &self.entity_order
    }

    /// Edges in order of first insertion.
    pub fn edge_order(&self) -> &[EdgeSlot] {
        &self.edge_order
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Graph indices in tie-break order: labels named in `priority` first, in
    /// list order, then the rest by first appearance.
    pub fn canonical_order(&self, priority: &[String]) -> Vec<usize> {
        let mut order: Vec<usize> = Vec::with_capacity(self.graphs.len());
        for idx in priority
            .iter()
            .filter_map(|label| self.by_label.get(label.as_str()).copied())
        {
            if !order.contains(&idx) {
                order.push(idx);
            }
        }
        for idx in 0..self.graphs.len() {
            if !order.contains(&idx) {
                order.push(idx);
            }
        }
        order
    }

    fn graph_index_or_insert(&mut self, label: &Label) -> usize {
        if let Some(&idx) = self.by_label.get(label) {
            return idx;
        }
        let idx = self.graphs.len();
        self.graphs.push(LabelGraph::new(label.clone()));
        self.by_label.insert(label.clone(), idx);
        idx
    }
}
