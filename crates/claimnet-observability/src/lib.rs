//! # claimnet-observability
//!
//! Tracing initialization for hosts embedding the claimnet pipeline.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_from_config, init_tracing, init_tracing_with_filter};
