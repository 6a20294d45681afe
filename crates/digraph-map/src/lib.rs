//! # digraph-map
//!
//! An in-memory index of directed edges between keys, kept as two maps that are
//! always the exact transpose of each other.
//!
//! ## Core Principles
//!
//! - **O(1) Both Ways**: targets of a source and sources of a target are hash lookups
//! - **Lockstep Indices**: every mutation updates the forward and reverse index together
//! - **No Empty Buckets**: a key is present only while it has at least one edge
//! - **Zero Magic**: absent keys mean "empty" or "false", never an error
//!
//! ## Architecture
//!
//! ```text
//! Export / Render (JSON, DOT, boxed tree)
//!     ↓
//! Derived Views (edges, sources, targets; memoized)
//!     ↓
//! DirectedGraphMap (forward + reverse index)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use digraph_map::DirectedGraphMap;
//!
//! let mut map = DirectedGraphMap::new();
//! map.add_edge("a", "b");
//! map.add_edge("a", "c");
//! map.add_edge("b", "c");
//!
//! assert_eq!(map.len(), 3);
//! assert!(map.get_sources(&"c").contains(&"a"));
//!
//! map.remove_target(&"c");
//! assert!(!map.has_source(&"b"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod render;

// Re-export main types
pub use config::{GraphMapConfig, RenderOptions};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraphMap, IntoIter, Iter};
