//! Edge iterators and collection trait impls.

use super::map::DirectedGraphMap;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Borrowing iterator over the edges of a [`DirectedGraphMap`].
///
/// Created by [`DirectedGraphMap::iter`]. Yields each `(source, target)` pair
/// exactly once, in [`edges`](DirectedGraphMap::edges) order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    inner: std::slice::Iter<'a, (K, K)>,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(edges: &'a [(K, K)]) -> Self {
        Self {
            inner: edges.iter(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a (K, K);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// Owning iterator over the edges of a [`DirectedGraphMap`].
#[derive(Debug, Clone)]
pub struct IntoIter<K> {
    inner: std::vec::IntoIter<(K, K)>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = (K, K);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

impl<'a, K> IntoIterator for &'a DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    type Item = &'a (K, K);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    type Item = (K, K);
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_edges().into_iter(),
        }
    }
}

impl<K> FromIterator<(K, K)> for DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<K> Extend<(K, K)> for DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, iter: I) {
        self.extend_edges(iter);
    }
}

impl<K, const N: usize> From<[(K, K); N]> for DirectedGraphMap<K>
where
    K: Eq + Hash + Clone,
{
    fn from(edges: [(K, K); N]) -> Self {
        Self::from_edges(edges)
    }
}
