//! Contested-node resolver.
//!
//! An entity present in every label graph is contested. Each contested entity
//! is assigned to the label where its outgoing weight is strictly largest;
//! ties fall to the earliest label in the canonical order.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use claimnet_core::models::Label;

use crate::graph::LabelGraphSet;

/// How a single contested entity was decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The winning label.
    pub winner: Label,
    /// Aggregate outgoing weight per label, in canonical order.
    pub weights: Vec<(Label, f64)>,
    /// Whether another label had the same weight as the winner.
    pub tie_broken: bool,
}

/// Mapping from contested entity to its winning label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assignment {
    resolutions: BTreeMap<String, Resolution>,
}

impl Assignment {
    /// Winning label for an entity, `None` if it is not contested.
    pub fn get(&self, entity_id: &str) -> Option<&Label> {
        self.resolutions.get(entity_id).map(|r| &r.winner)
    }

    pub fn resolution(&self, entity_id: &str) -> Option<&Resolution> {
        self.resolutions.get(entity_id)
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.resolutions.contains_key(entity_id)
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    /// Entries ordered by entity id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Label)> + '_ {
        self.resolutions
            .iter()
            .map(|(id, resolution)| (id.as_str(), &resolution.winner))
    }
}

/// Entities present in every graph, in first-appearance order.
/// Fewer than two graphs means nothing is contested.
pub fn contested_entities(set: &LabelGraphSet) -> Vec<&str> {
    if set.len() < 2 {
        return Vec::new();
    }
    set.entity_order()
        .iter()
        .map(String::as_str)
        .filter(|id| set.graphs().iter().all(|graph| graph.contains(id)))
        .collect()
}

/// Resolve every contested entity. Never fails.
pub fn resolve(set: &LabelGraphSet, priority: &[String]) -> Assignment {
    let order = set.canonical_order(priority);
    let mut assignment = Assignment::default();
    let mut ties = 0usize;

    for entity in contested_entities(set) {
        let weights: Vec<(Label, f64)> = order
            .iter()
            .map(|&idx| {
                let graph = &set.graphs()[idx];
                (
                    graph.label().clone(),
                    graph.outgoing_weight_of(entity).unwrap_or(0.0),
                )
            })
            .collect();

        let Some(resolution) = decide(weights) else {
            continue;
        };
        if resolution.tie_broken {
            ties += 1;
        }
        debug!(
            entity,
            winner = %resolution.winner,
            tie_broken = resolution.tie_broken,
            "contested node resolved"
        );
        assignment
            .resolutions
            .insert(entity.to_string(), resolution);
    }

    info!(contested = assignment.len(), ties, "contested nodes resolved");
    assignment
}

/// Pick the strictly heaviest label; the first of equals wins.
fn decide(weights: Vec<(Label, f64)>) -> Option<Resolution> {
    let mut best: Option<(usize, f64)> = None;
    for (pos, &(_, weight)) in weights.iter().enumerate() {
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((pos, weight)),
        }
    }
    let (pos, best_weight) = best?;
    let tie_broken = weights
        .iter()
        .enumerate()
        .any(|(other, &(_, weight))| other != pos && weight == best_weight);

    Some(Resolution {
        winner: weights[pos].0.clone(),
        weights,
        tie_broken,
    })
}
