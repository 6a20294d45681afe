//! Memoized derived views (edge list, source set, target set).
//!
//! The cells fill lazily on first read and are reset by every mutator of the
//! owning map. Mutators take `&mut self`, so a reader can never hold a view
//! across a write.

use std::cell::OnceCell;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub(super) struct DerivedViews<K> {
    edges: OnceCell<Vec<(K, K)>>,
    sources: OnceCell<HashSet<K>>,
    targets: OnceCell<HashSet<K>>,
}

impl<K> DerivedViews<K> {
    pub(super) fn new() -> Self {
        Self {
            edges: OnceCell::new(),
            sources: OnceCell::new(),
            targets: OnceCell::new(),
        }
    }

    /// Drop all three views, whether or not they were populated.
    pub(super) fn invalidate(&mut self) {
        self.edges.take();
        self.sources.take();
        self.targets.take();
    }

    pub(super) fn edges(&self, build: impl FnOnce() -> Vec<(K, K)>) -> &[(K, K)] {
        self.edges.get_or_init(build)
    }

    pub(super) fn sources(&self, build: impl FnOnce() -> HashSet<K>) -> &HashSet<K> {
        self.sources.get_or_init(build)
    }

    pub(super) fn targets(&self, build: impl FnOnce() -> HashSet<K>) -> &HashSet<K> {
        self.targets.get_or_init(build)
    }

    /// Move the memoized edge list out, leaving the cell empty.
    pub(super) fn take_edges(&mut self) -> Option<Vec<(K, K)>> {
        self.edges.take()
    }

    pub(super) fn cached_edge_count(&self) -> Option<usize> {
        self.edges.get().map(Vec::len)
    }
}
