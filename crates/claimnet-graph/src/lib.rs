//! # claimnet-graph
//!
//! Turns a labeled, weighted edge table into render-ready elements.
//! One `petgraph` graph per label, contested entities resolved by weighted
//! majority, node sizes and edge widths derived from aggregate weight.

pub mod engine;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod resolver;
pub mod visual;

pub use engine::{ClaimEngine, GraphStats};
pub use graph::{LabelGraph, LabelGraphSet};
pub use resolver::{Assignment, Resolution};
pub use visual::{VisualDeriver, VisualRecords};
