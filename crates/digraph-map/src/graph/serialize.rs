//! Serde support: a map serializes as a sequence of `[source, target]` pairs.

use super::map::DirectedGraphMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::hash::Hash;

impl<K> Serialize for DirectedGraphMap<K>
where
    K: Serialize + Eq + Hash + Clone,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.forward_groups().flat_map(|(source, targets)| {
            targets.iter().map(move |target| (source, target))
        }))
    }
}

impl<'de, K> Deserialize<'de> for DirectedGraphMap<K>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Pairs go back through add_edge, so duplicates in the input collapse.
        let edges = Vec::<(K, K)>::deserialize(deserializer)?;
        Ok(Self::from_edges(edges))
    }
}
