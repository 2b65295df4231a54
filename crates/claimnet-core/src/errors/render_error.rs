/// Visual attribute derivation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid scale factor {value}: must be finite and greater than zero")]
    InvalidScaleFactor { value: f64 },

    #[error("invalid render config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}
