//! ClaimEngine: owns the label graphs and assignment, coordinates derivation
//! and export.
//!
//! Graphs are built and contested nodes resolved once, at construction.
//! Everything afterwards takes `&self` and allocates fresh output, so
//! overlapping derivations (e.g. from a scale slider) need no locking.

use serde::Serialize;
use tracing::info;

use claimnet_core::errors::ClaimnetResult;
use claimnet_core::models::{EdgeRow, Element, Label, RawEdgeRow};
use claimnet_core::ClaimnetConfig;

use crate::export;
use crate::graph::{self, LabelGraphSet};
use crate::ingest;
use crate::resolver::{self, Assignment};
use crate::visual::{VisualDeriver, VisualRecords};

/// Summary counts of the built graphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub labels: usize,
    pub entities: usize,
    pub contested: usize,
    pub edges: usize,
    /// `(label, nodes, edges)` per graph, in creation order.
    pub per_label: Vec<(Label, usize, usize)>,
}

/// The claim-evidence graph pipeline.
#[derive(Debug, Clone)]
pub struct ClaimEngine {
    config: ClaimnetConfig,
    graphs: LabelGraphSet,
    assignment: Assignment,
    deriver: VisualDeriver,
}

impl ClaimEngine {
    /// Build from raw rows, validating them at the boundary first.
    pub fn from_raw(rows: &[RawEdgeRow], config: ClaimnetConfig) -> ClaimnetResult<Self> {
        let rows = ingest::validate_rows(rows, &config.ingest)?;
        Self::from_rows(&rows, config)
    }

    /// Build from already-validated rows.
    pub fn from_rows(rows: &[EdgeRow], config: ClaimnetConfig) -> ClaimnetResult<Self> {
        config.validate()?;
        let deriver = VisualDeriver::new(config.render.clone())?;
        let graphs = graph::build(rows, config.ingest.duplicate_edges);
        let assignment = resolver::resolve(&graphs, &config.resolver.label_priority);

        info!(
            labels = graphs.len(),
            entities = graphs.entity_order().len(),
            contested = assignment.len(),
            "claim engine ready"
        );

        Ok(Self {
            config,
            graphs,
            assignment,
            deriver,
        })
    }

    pub fn config(&self) -> &ClaimnetConfig {
        &self.config
    }

    pub fn graphs(&self) -> &LabelGraphSet {
        &self.graphs
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Rendered group of an entity, `None` if it is not in any graph.
    pub fn group_of(&self, entity_id: &str) -> Option<&Label> {
        if let Some(winner) = self.assignment.get(entity_id) {
            return Some(winner);
        }
        self.graphs
            .graphs()
            .iter()
            .find(|g| g.contains(entity_id))
            .map(|g| g.label())
    }

    /// Derive visual records at `scale`.
    pub fn derive(&self, scale: f64) -> ClaimnetResult<VisualRecords> {
        Ok(self.deriver.derive(&self.graphs, &self.assignment, scale)?)
    }

    /// Derive at the configured default scale.
    pub fn derive_default(&self) -> ClaimnetResult<VisualRecords> {
        self.derive(self.config.render.default_scale)
    }

    /// Derive and flatten into ordered elements.
    pub fn export(&self, scale: f64) -> ClaimnetResult<Vec<Element>> {
        let visuals = self.derive(scale)?;
        Ok(export::export(&self.graphs, &visuals, &self.config.render))
    }

    /// `export` serialized as a JSON array.
    pub fn export_json(&self, scale: f64) -> ClaimnetResult<String> {
        Ok(export::to_json(&self.export(scale)?)?)
    }

    pub fn stats(&self) -> GraphStats {
        let per_label: Vec<(Label, usize, usize)> = self
            .graphs
            .graphs()
            .iter()
            .map(|g| (g.label().clone(), g.node_count(), g.edge_count()))
            .collect();
        GraphStats {
            labels: self.graphs.len(),
            entities: self.graphs.entity_order().len(),
            contested: self.assignment.len(),
            edges: per_label.iter().map(|(_, _, edges)| edges).sum(),
            per_label,
        }
    }
}
