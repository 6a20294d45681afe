//! JSON export: edge count, key sets, and the full edge list.

use super::{check_export_size, ExportOptions};
use crate::{DirectedGraphMap, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Serialize)]
struct JsonExport<'a, K: Eq + Hash> {
    edge_count: usize,
    sources: &'a HashSet<K>,
    targets: &'a HashSet<K>,
    edges: &'a [(K, K)],
}

/// Export the map to pretty-printed JSON with default size limits
pub fn export_json<K>(map: &DirectedGraphMap<K>) -> Result<String>
where
    K: Serialize + Eq + Hash + Clone,
{
    export_json_with(map, &ExportOptions::default())
}

/// Export the map to pretty-printed JSON
///
/// ```json
/// {
///   "edge_count": 1,
///   "sources": ["a"],
///   "targets": ["b"],
///   "edges": [["a", "b"]]
/// }
/// ```
pub fn export_json_with<K>(map: &DirectedGraphMap<K>, options: &ExportOptions) -> Result<String>
where
    K: Serialize + Eq + Hash + Clone,
{
    check_export_size(map.len(), options)?;

    let doc = JsonExport {
        edge_count: map.len(),
        sources: map.sources(),
        targets: map.targets(),
        edges: map.edges(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}
