/// Element export errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize elements: {0}")]
    Serialization(#[from] serde_json::Error),
}
