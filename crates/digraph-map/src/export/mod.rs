//! Export module for inspecting maps in external tools.
//!
//! Supports:
//! - **JSON**: edge list plus source/target sets
//! - **DOT**: Graphviz visualization

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_with};

use crate::error::{GraphError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Size limits applied before any export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Exports above this many edges fail with [`GraphError::InvalidOperation`]
    pub max_edges: usize,
    /// Exports above this many edges log a warning
    pub warn_edges: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            max_edges: 100_000,
            warn_edges: 10_000,
        }
    }
}

impl ExportOptions {
    /// Set the hard edge limit
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = max_edges;
        self
    }
}

/// Check map size for export operations and issue warnings/errors.
fn check_export_size(edge_count: usize, options: &ExportOptions) -> Result<()> {
    if edge_count > options.max_edges {
        return Err(GraphError::invalid_operation(format!(
            "Map too large for export ({edge_count} edges > {} limit)",
            options.max_edges
        )));
    }

    if edge_count > options.warn_edges {
        warn!("Exporting large map ({edge_count} edges)");
    }

    Ok(())
}
