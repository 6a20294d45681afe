//! Configuration for map construction and text rendering.

use serde::{Deserialize, Serialize};

/// Initial sizing for a [`DirectedGraphMap`](crate::DirectedGraphMap).
///
/// Capacities are hints only; both indices grow as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphMapConfig {
    /// Expected number of distinct sources (forward index entries)
    pub source_capacity: usize,
    /// Expected number of distinct targets (reverse index entries)
    pub target_capacity: usize,
}

impl GraphMapConfig {
    /// Set the expected number of distinct sources
    pub fn with_source_capacity(mut self, capacity: usize) -> Self {
        self.source_capacity = capacity;
        self
    }

    /// Set the expected number of distinct targets
    pub fn with_target_capacity(mut self, capacity: usize) -> Self {
        self.target_capacity = capacity;
        self
    }
}

/// Layout of the boxed tree rendering produced by [`render`](crate::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Minimum width of a line's content, before padding
    pub min_width: usize,
    /// Spaces added after the widest line
    pub padding: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_width: 8,
            padding: 1,
        }
    }
}

impl RenderOptions {
    /// Set the minimum inner width
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Set the trailing padding
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}
