//! # claimnet-core
//!
//! Foundation crate for the claimnet pipeline.
//! Defines the edge-table model, exported records, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ClaimnetConfig;
pub use errors::{ClaimnetError, ClaimnetResult};
pub use models::{EdgeRow, Element, Label, RawEdgeRow, RawWeight};
