//! Configuration system for claimnet.
//! TOML-based; every section falls back to `defaults` for omitted keys.

pub mod defaults;
pub mod ingest_config;
pub mod observability_config;
pub mod render_config;
pub mod resolver_config;

pub use ingest_config::{DuplicatePolicy, IngestConfig};
pub use observability_config::ObservabilityConfig;
pub use render_config::{validate_scale, Normalization, RenderConfig};
pub use resolver_config::ResolverConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimnetConfig {
    pub ingest: IngestConfig,
    pub resolver: ResolverConfig,
    pub render: RenderConfig,
    pub observability: ObservabilityConfig,
}

impl ClaimnetConfig {
    /// Parse from TOML. Missing keys take their defaults. The result is validated.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field and numeric constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate().map_err(|e| ConfigError::Invalid {
            key: "render".to_string(),
            reason: e.to_string(),
        })?;

        if let Some(blank) = self
            .ingest
            .allowed_labels
            .iter()
            .chain(self.resolver.label_priority.iter())
            .find(|l| l.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                key: "labels".to_string(),
                reason: format!("blank label {blank:?}"),
            });
        }

        Ok(())
    }
}
