//! Unit tests for core map operations (add_edge, remove_edge, remove_source, etc.).

use digraph_map::{DirectedGraphMap, GraphMapConfig};
use std::collections::HashSet;

fn abc_map() -> DirectedGraphMap<&'static str> {
    let mut map = DirectedGraphMap::new();
    map.add_edge("a", "b");
    map.add_edge("a", "c");
    map.add_edge("b", "c");
    map
}

fn set<'a>(keys: &[&'a str]) -> HashSet<&'a str> {
    keys.iter().copied().collect()
}

#[test]
fn test_add_edges_and_query() {
    let map = abc_map();

    assert_eq!(map.len(), 3);
    assert_eq!(map.get_targets("a"), set(&["b", "c"]));
    assert_eq!(map.get_sources("c"), set(&["a", "b"]));
    assert!(map.has_edge("a", "b"));
    assert!(!map.has_edge("b", "a"));
}

#[test]
fn test_remove_edge_keeps_source_with_other_targets() {
    let mut map = abc_map();
    map.remove_edge("a", "b");

    assert!(!map.has_edge("a", "b"));
    assert_eq!(map.get_targets("a"), set(&["c"]));
    assert!(map.has_source("a"));
    assert!(!map.has_target("b"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_remove_target_drains_sources() {
    let mut map = abc_map();
    map.remove_edge("a", "b");
    map.remove_target("c");

    assert!(!map.has_target("c"));
    assert!(!map.has_source("a"));
    assert!(!map.has_source("b"));
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[test]
fn test_remove_source_removes_all_outgoing() {
    let mut map = abc_map();
    map.remove_source("a");

    assert!(!map.has_source("a"));
    assert!(map.edges().iter().all(|(source, _)| *source != "a"));
    assert!(!map.has_target("b"));
    assert_eq!(map.get_sources("c"), set(&["b"]));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_self_loop() {
    let mut map = DirectedGraphMap::new();
    map.add_edge("x", "x");

    assert!(map.has_edge("x", "x"));
    assert_eq!(map.get_sources("x"), set(&["x"]));
    assert_eq!(map.get_targets("x"), set(&["x"]));
    assert_eq!(map.len(), 1);

    map.remove_edge("x", "x");
    assert_eq!(map.len(), 0);
    assert!(!map.has_source("x"));
    assert!(!map.has_target("x"));
}

#[test]
fn test_construct_with_duplicates() {
    let map = DirectedGraphMap::from_edges([("a", "b"), ("a", "b"), ("c", "d")]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.edges().len(), 2);
}

#[test]
fn test_construction_ignores_order() {
    let forward = DirectedGraphMap::from_edges([("a", "b"), ("b", "c"), ("a", "c")]);
    let shuffled = DirectedGraphMap::from_edges([("a", "c"), ("a", "b"), ("b", "c"), ("a", "b")]);
    assert_eq!(forward, shuffled);
}

#[test]
fn test_add_edge_twice_is_idempotent() {
    let mut once = DirectedGraphMap::new();
    once.add_edge("a", "b");

    let mut twice = DirectedGraphMap::new();
    twice.add_edge("a", "b");
    twice.add_edge("a", "b");

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.edges(), twice.edges());
}

#[test]
fn test_redundant_removals_are_noops() {
    let mut map = abc_map();
    let sources = map.sources().clone();
    let targets = map.targets().clone();

    map.remove_edge("c", "a");
    map.remove_edge("nope", "b");
    map.remove_edge("a", "nope");
    map.remove_source("nope");
    map.remove_target("nope");

    assert_eq!(map.len(), 3);
    assert_eq!(map.sources(), &sources);
    assert_eq!(map.targets(), &targets);
}

#[test]
fn test_queries_on_unknown_keys() {
    let map: DirectedGraphMap<&str> = DirectedGraphMap::new();

    assert!(!map.has_edge("a", "b"));
    assert!(!map.has_source("a"));
    assert!(!map.has_target("a"));
    assert!(map.get_sources("a").is_empty());
    assert!(map.get_targets("a").is_empty());
    assert_eq!(map.out_degree("a"), 0);
    assert_eq!(map.in_degree("a"), 0);
    assert!(map.edges().is_empty());
}

#[test]
fn test_returned_sets_are_independent() {
    let map = abc_map();

    let mut targets = map.get_targets("a");
    targets.insert("z");
    targets.remove("b");

    assert_eq!(map.get_targets("a"), set(&["b", "c"]));
    assert!(!map.has_edge("a", "z"));
}

#[test]
fn test_borrowed_lookup_with_owned_keys() {
    let mut map: DirectedGraphMap<String> = DirectedGraphMap::new();
    map.add_edge("src/main.rs".to_string(), "src/lib.rs".to_string());

    assert!(map.has_edge("src/main.rs", "src/lib.rs"));
    assert_eq!(map.out_degree("src/main.rs"), 1);
    assert_eq!(map.in_degree("src/lib.rs"), 1);

    map.remove_source("src/main.rs");
    assert!(map.is_empty());
}

#[test]
fn test_iter_sources_and_targets_borrow() {
    let map = abc_map();

    let mut targets: Vec<_> = map.iter_targets("a").copied().collect();
    targets.sort();
    assert_eq!(targets, vec!["b", "c"]);

    let mut sources: Vec<_> = map.iter_sources("c").copied().collect();
    sources.sort();
    assert_eq!(sources, vec!["a", "b"]);

    assert_eq!(map.iter_targets("zzz").count(), 0);
}

#[test]
fn test_clear() {
    let mut map = abc_map();
    assert_eq!(map.edges().len(), 3);

    map.clear();

    assert!(map.is_empty());
    assert!(map.edges().is_empty());
    assert!(map.sources().is_empty());
    assert!(map.targets().is_empty());
}

#[test]
fn test_with_config_starts_empty() {
    let config = GraphMapConfig::default()
        .with_source_capacity(64)
        .with_target_capacity(64);
    let mut map: DirectedGraphMap<u64> = DirectedGraphMap::with_config(config);
    assert!(map.is_empty());

    map.extend([(1, 2), (2, 3)]);
    assert_eq!(map.len(), 2);

    let sized: DirectedGraphMap<u64> = DirectedGraphMap::with_capacity(8, 8);
    assert_eq!(sized, DirectedGraphMap::default());
}

#[test]
fn test_debug_shows_forward_index() {
    let map = DirectedGraphMap::from_edges([("a", "b")]);
    let debug = format!("{map:?}");
    assert!(debug.starts_with("DirectedGraphMap { forward:"));
    assert!(debug.contains("\"a\""));
}
