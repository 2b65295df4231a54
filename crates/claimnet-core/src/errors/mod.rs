//! Error handling for claimnet.
//! One error enum per subsystem, `thiserror` only.

pub mod claimnet_error;
pub mod config_error;
pub mod export_error;
pub mod ingest_error;
pub mod render_error;

pub use claimnet_error::{ClaimnetError, ClaimnetResult};
pub use config_error::ConfigError;
pub use export_error::ExportError;
pub use ingest_error::{IngestError, RowRejection};
pub use render_error::RenderError;
