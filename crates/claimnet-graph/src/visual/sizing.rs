//! Size and width formulas.

use claimnet_core::config::RenderConfig;

/// `max(size_floor, normalize(raw) * scale)`.
pub fn node_size(raw_weight: f64, scale: f64, config: &RenderConfig) -> f64 {
    let normalized = config
        .normalization
        .apply(raw_weight, config.size_multiplier);
    (normalized * scale).max(config.size_floor)
}

/// `max(label_size_floor, size * label_size_ratio)`.
pub fn label_size(node_size: f64, config: &RenderConfig) -> f64 {
    (node_size * config.label_size_ratio).max(config.label_size_floor)
}

/// Edges are never normalized.
pub fn edge_width(weight: f64, config: &RenderConfig) -> f64 {
    weight * config.edge_width_multiplier
}
