//! Top-level error aggregating subsystem errors via `From` conversions.

use super::{ConfigError, ExportError, IngestError, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum ClaimnetError {
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

pub type ClaimnetResult<T> = Result<T, ClaimnetError>;
