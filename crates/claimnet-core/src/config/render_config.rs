//! Visual attribute configuration: normalization, size floor, label sizing,
//! edge width, and colors.
//!
//! # Examples
//!
//! ```
//! use claimnet_core::config::{Normalization, RenderConfig};
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.normalization, Normalization::Compressed);
//! assert!(config.validate().is_ok());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::RenderError;

/// How aggregate node weight maps to a display size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// `raw * size_multiplier`.
    Linear,
    /// `sqrt(raw) * size_multiplier`; keeps hubs from dominating the scale.
    #[default]
    Compressed,
}

impl Normalization {
    pub fn apply(self, raw: f64, multiplier: f64) -> f64 {
        match self {
            Self::Linear => raw * multiplier,
            Self::Compressed => raw.sqrt() * multiplier,
        }
    }
}

/// Render configuration consumed by the visual attribute deriver and exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub normalization: Normalization,
    /// Constant applied after normalization. Default: 5.0.
    pub size_multiplier: f64,
    /// Minimum rendered node size. Default: 5.0.
    pub size_floor: f64,
    /// Label size as a fraction of node size. Default: 0.5.
    pub label_size_ratio: f64,
    /// Minimum label size. Default: 8.0.
    pub label_size_floor: f64,
    /// Edge width = weight * this. Default: 1.0.
    pub edge_width_multiplier: f64,
    /// Scale factor used when the host does not supply one. Default: 1.0.
    pub default_scale: f64,
    /// Color for labels without an entry in `label_colors`.
    pub default_color: String,
    /// Color per label, applied to node groups and edges.
    pub label_colors: BTreeMap<String, String>,
}

impl RenderConfig {
    /// Reject non-finite or non-positive numeric settings.
    pub fn validate(&self) -> Result<(), RenderError> {
        let positive = [
            ("size_multiplier", self.size_multiplier),
            ("size_floor", self.size_floor),
            ("label_size_ratio", self.label_size_ratio),
            ("label_size_floor", self.label_size_floor),
            ("edge_width_multiplier", self.edge_width_multiplier),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and greater than zero",
                });
            }
        }
        validate_scale(self.default_scale)
    }

    /// Color for a label, falling back to `default_color`.
    pub fn color_for(&self, label: &str) -> &str {
        self.label_colors
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }
}

/// A scale factor must be finite and strictly positive.
pub fn validate_scale(scale: f64) -> Result<(), RenderError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidScaleFactor { value: scale })
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            size_multiplier: defaults::DEFAULT_SIZE_MULTIPLIER,
            size_floor: defaults::DEFAULT_SIZE_FLOOR,
            label_size_ratio: defaults::DEFAULT_LABEL_SIZE_RATIO,
            label_size_floor: defaults::DEFAULT_LABEL_SIZE_FLOOR,
            edge_width_multiplier: defaults::DEFAULT_EDGE_WIDTH_MULTIPLIER,
            default_scale: defaults::DEFAULT_SCALE_FACTOR,
            default_color: defaults::DEFAULT_COLOR.to_string(),
            label_colors: defaults::DEFAULT_LABEL_COLORS
                .iter()
                .map(|(label, color)| (label.to_string(), color.to_string()))
                .collect(),
        }
    }
}
