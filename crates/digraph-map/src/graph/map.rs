//! The forward/reverse edge index.

use super::iter::Iter;
use super::views::DerivedViews;
use crate::config::GraphMapConfig;
use log::{debug, trace};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// A directed graph stored as a bidirectional source/target map.
///
/// `DirectedGraphMap` keeps two indices:
/// - forward: source → set of targets
/// - reverse: target → set of sources
///
/// Every mutation updates both in the same call, so `t ∈ forward[s]` holds
/// exactly when `s ∈ reverse[t]`. A key is present in an index only while it
/// has at least one edge, and a `(source, target)` pair is stored at most once.
///
/// Queries and removals on unknown keys return empty results or do nothing;
/// none of the map operations can fail.
///
/// The map is a single-owner collection. It is `Send` when `K` is, but not
/// `Sync`: the memoized views use [`OnceCell`](std::cell::OnceCell). Wrap it in a
/// `Mutex` to share it across threads.
///
/// # Example
///
/// ```
/// use digraph_map::DirectedGraphMap;
///
/// let mut map = DirectedGraphMap::from_edges([("a", "b"), ("a", "c")]);
/// map.add_edge("b", "c");
///
/// assert_eq!(map.len(), 3);
/// assert!(map.has_edge(&"a", &"c"));
/// assert_eq!(map.get_sources(&"c").len(), 2);
/// ```
#[derive(Clone)]
pub struct DirectedGraphMap<K> {
    forward: HashMap<K, HashSet<K>>,
    reverse: HashMap<K, HashSet<K>>,
    views: DerivedViews<K>,
}

impl<K> DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self::with_config(GraphMapConfig::default())
    }

    /// Create an empty map with both indices pre-sized.
    pub fn with_capacity(source_capacity: usize, target_capacity: usize) -> Self {
        Self::with_config(
            GraphMapConfig::default()
                .with_source_capacity(source_capacity)
                .with_target_capacity(target_capacity),
        )
    }

    /// Create an empty map from a [`GraphMapConfig`].
    pub fn with_config(config: GraphMapConfig) -> Self {
        Self {
            forward: HashMap::with_capacity(config.source_capacity),
            reverse: HashMap::with_capacity(config.target_capacity),
            views: DerivedViews::new(),
        }
    }

    /// Build a map from `(source, target)` pairs.
    ///
    /// Each pair goes through [`add_edge`](Self::add_edge), so duplicates
    /// collapse and the input order does not affect the resulting edge set.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut map = Self::new();
        map.extend_edges(edges);
        map
    }

    /// Insert every pair from `edges`.
    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut inserted = 0usize;
        for (source, target) in edges {
            if self.insert_edge(source, target) {
                inserted += 1;
            }
        }
        debug!("Bulk insert added {inserted} new edges");
    }

    /// Add the edge `source -> target`.
    ///
    /// Re-adding an existing edge is a no-op. Self-loops are allowed.
    pub fn add_edge(&mut self, source: K, target: K) {
        self.insert_edge(source, target);
    }

    /// Returns whether the pair was new.
    fn insert_edge(&mut self, source: K, target: K) -> bool {
        self.views.invalidate();

        let inserted = self
            .forward
            .entry(source.clone())
            .or_default()
            .insert(target.clone());
        self.reverse.entry(target).or_default().insert(source);

        trace!("add_edge: inserted={inserted}, sources={}", self.forward.len());
        inserted
    }

    /// Remove the edge `source -> target` if present.
    ///
    /// Sets that become empty are dropped from their index.
    pub fn remove_edge<Q>(&mut self, source: &Q, target: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.views.invalidate();

        let (Some(targets), Some(sources)) =
            (self.forward.get_mut(source), self.reverse.get_mut(target))
        else {
            return;
        };

        let removed = targets.remove(target);
        sources.remove(source);
        let source_drained = targets.is_empty();
        let target_drained = sources.is_empty();

        if source_drained {
            self.forward.remove(source);
        }
        if target_drained {
            self.reverse.remove(target);
        }

        trace!(
            "remove_edge: removed={removed}, source_drained={source_drained}, target_drained={target_drained}"
        );
    }

    /// Test if the edge `source -> target` exists.
    pub fn has_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Test if `source` has at least one outgoing edge.
    pub fn has_source<Q>(&self, source: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(source)
    }

    /// Test if `target` has at least one incoming edge.
    pub fn has_target<Q>(&self, target: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.contains_key(target)
    }

    /// Remove every edge leaving `source`.
    pub fn remove_source<Q>(&mut self, source: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.views.invalidate();

        let Some(targets) = self.forward.get(source) else {
            return;
        };
        let targets: Vec<K> = targets.iter().cloned().collect();
        debug!("Removing source with {} outgoing edges", targets.len());

        for target in &targets {
            self.remove_edge(source, <K as Borrow<Q>>::borrow(target));
        }
        self.forward.remove(source);
    }

    /// Remove every edge entering `target`.
    pub fn remove_target<Q>(&mut self, target: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.views.invalidate();

        let Some(sources) = self.reverse.get(target) else {
            return;
        };
        let sources: Vec<K> = sources.iter().cloned().collect();
        debug!("Removing target with {} incoming edges", sources.len());

        for source in &sources {
            self.remove_edge(<K as Borrow<Q>>::borrow(source), target);
        }
        self.reverse.remove(target);
    }

    /// Remove every edge.
    pub fn clear(&mut self) {
        debug!("Clearing {} sources, {} targets", self.forward.len(), self.reverse.len());
        self.forward.clear();
        self.reverse.clear();
        self.views.invalidate();
    }

    /// Get all sources with an edge into `target`.
    ///
    /// Returns an owned copy; empty if `target` has no incoming edges.
    pub fn get_sources<Q>(&self, target: &Q) -> HashSet<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(target).cloned().unwrap_or_default()
    }

    /// Get all targets reachable by one edge from `source`.
    ///
    /// Returns an owned copy; empty if `source` has no outgoing edges.
    pub fn get_targets<Q>(&self, source: &Q) -> HashSet<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(source).cloned().unwrap_or_default()
    }

    /// Iterate the sources of `target` without copying them.
    pub fn iter_sources<'a, Q>(&'a self, target: &Q) -> impl Iterator<Item = &'a K> + 'a
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(target).into_iter().flatten()
    }

    /// Iterate the targets of `source` without copying them.
    pub fn iter_targets<'a, Q>(&'a self, source: &Q) -> impl Iterator<Item = &'a K> + 'a
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(source).into_iter().flatten()
    }

    /// Number of edges leaving `source`.
    pub fn out_degree<Q>(&self, source: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(source).map_or(0, HashSet::len)
    }

    /// Number of edges entering `target`.
    pub fn in_degree<Q>(&self, target: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(target).map_or(0, HashSet::len)
    }

    /// All edges as `(source, target)` pairs.
    ///
    /// Pairs are grouped by source in forward-index order. The list is built on
    /// first read after a mutation and reused until the next one, so repeated
    /// reads of an unmodified map return the same order.
    pub fn edges(&self) -> &[(K, K)] {
        self.views.edges(|| {
            let edges: Vec<(K, K)> = self
                .forward
                .iter()
                .flat_map(|(source, targets)| {
                    targets
                        .iter()
                        .map(move |target| (source.clone(), target.clone()))
                })
                .collect();
            debug!("Rebuilt edge list ({} edges)", edges.len());
            edges
        })
    }

    /// Every key with at least one outgoing edge.
    pub fn sources(&self) -> &HashSet<K> {
        self.views
            .sources(|| self.forward.keys().cloned().collect())
    }

    /// Every key with at least one incoming edge.
    pub fn targets(&self) -> &HashSet<K> {
        self.views
            .targets(|| self.reverse.keys().cloned().collect())
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.views
            .cached_edge_count()
            .unwrap_or_else(|| self.forward.values().map(HashSet::len).sum())
    }

    /// Test if the map holds no edges.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate all edges, in the same order as [`edges`](Self::edges).
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.edges())
    }

    /// Consume the map, yielding owned edges.
    pub(super) fn into_edges(mut self) -> Vec<(K, K)> {
        if let Some(edges) = self.views.take_edges() {
            return edges;
        }
        self.forward
            .into_iter()
            .flat_map(|(source, targets)| {
                targets
                    .into_iter()
                    .map(move |target| (source.clone(), target))
            })
            .collect()
    }

    /// Iterate the forward index as `(source, targets)` groups.
    pub(crate) fn forward_groups(&self) -> impl Iterator<Item = (&K, &HashSet<K>)> {
        self.forward.iter()
    }
}

impl<K> Default for DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PartialEq for DirectedGraphMap<K>
where
    K: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        // The reverse index is the transpose, so comparing forward suffices.
        self.forward == other.forward
    }
}

impl<K> Eq for DirectedGraphMap<K> where K: Eq + Hash {}

impl<K> fmt::Debug for DirectedGraphMap<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraphMap")
            .field("forward", &self.forward)
            .finish_non_exhaustive()
    }
}
