//! Test fixture loader for claimnet golden edge tables.
//!
//! Each golden file holds a raw edge table plus the expectations a test
//! should check against it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use claimnet_core::models::RawEdgeRow;

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all golden JSON files, sorted by name.
pub fn list_fixtures() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Expected outcome for one golden edge table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoldenExpectations {
    /// Labels in graph creation order.
    pub labels: Vec<String>,
    /// Entity ids in export order.
    pub entities: Vec<String>,
    /// Contested entity → winning label.
    pub assignment: BTreeMap<String, String>,
    /// Entities whose assignment was decided by the tie rule.
    pub ties: Vec<String>,
    /// Entity → rendered group, for every exported node.
    pub groups: BTreeMap<String, String>,
    /// Number of exported edges.
    pub edge_count: usize,
    /// `label/source/target` → weight after duplicate handling.
    pub edge_weights: BTreeMap<String, f64>,
}

/// A golden edge table and its expectations.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    pub description: String,
    pub rows: Vec<RawEdgeRow>,
    pub expected: GoldenExpectations,
}

/// Load a golden case by file name (e.g. `"contested_basic.json"`).
pub fn load_golden(name: &str) -> GoldenCase {
    load_fixture(name)
}

/// Load every golden case.
pub fn load_all_golden() -> Vec<GoldenCase> {
    list_fixtures()
        .iter()
        .filter_map(|path| path.file_name()?.to_str().map(String::from))
        .map(|name| load_golden(&name))
        .collect()
}
