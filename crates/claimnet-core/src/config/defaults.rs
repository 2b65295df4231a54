// Single source of truth for all default values.

// --- Ingest ---
pub const DEFAULT_ALLOWED_LABELS: &[&str] = &[];

// --- Resolver ---
pub const DEFAULT_LABEL_PRIORITY: &[&str] = &["SUPPORTS", "REFUTES"];

// --- Render ---
pub const DEFAULT_SIZE_MULTIPLIER: f64 = 5.0;
pub const DEFAULT_SIZE_FLOOR: f64 = 5.0;
pub const DEFAULT_LABEL_SIZE_RATIO: f64 = 0.5;
pub const DEFAULT_LABEL_SIZE_FLOOR: f64 = 8.0;
pub const DEFAULT_EDGE_WIDTH_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;
pub const DEFAULT_LABEL_COLORS: &[(&str, &str)] = &[("SUPPORTS", "green"), ("REFUTES", "red")];
pub const DEFAULT_COLOR: &str = "gray";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
