//! Render-ready records handed to the external rendering layer.

use serde::{Deserialize, Serialize};

use super::label::Label;

/// A node record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeElement {
    pub id: String,
    /// Rendered group: the winning label for contested nodes, the natural label otherwise.
    pub group: Label,
    pub size: f64,
    pub label_size: f64,
    pub color: String,
}

/// An edge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeElement {
    pub source: String,
    pub target: String,
    /// The label graph this edge belongs to.
    pub relation: Label,
    pub weight: f64,
    pub width: f64,
    /// Human-readable weight annotation, e.g. `SUPPORTS (weight: 3)`.
    pub label: String,
    pub color: String,
}

/// One exported element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Node(NodeElement),
    Edge(EdgeElement),
}

impl Element {
    pub fn as_node(&self) -> Option<&NodeElement> {
        match self {
            Self::Node(node) => Some(node),
            Self::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeElement> {
        match self {
            Self::Edge(edge) => Some(edge),
            Self::Node(_) => None,
        }
    }
}
