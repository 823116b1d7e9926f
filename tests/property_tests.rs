//! Property-based tests for graphwalk using proptest.
//!
//! These tests check the traversal invariants against an independent
//! breadth-first reference over randomly generated graphs.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use graphwalk::{
    filter_short_reachable, find_self_looping_reachable, is_reachable, longest_reachable_word, reachable,
    unreachable_from, AirportId, AirportNetwork, DepthFirst, VertexGraph, VertexId,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Node count plus a list of directed edges between valid indices.
fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
}

/// A vertex graph with random short words.
fn arb_word_graph() -> impl Strategy<Value = (Vec<String>, Vec<(usize, usize)>)> {
    arb_edges().prop_flat_map(|(n, edges)| {
        (
            prop::collection::vec("[a-z]{0,8}", n),
            Just(edges),
        )
    })
}

fn build_words(words: &[String], edges: &[(usize, usize)]) -> (VertexGraph<String>, Vec<VertexId>) {
    let mut graph = VertexGraph::new();
    let ids: Vec<VertexId> = words.iter().map(|w| graph.add_vertex(w.clone())).collect();
    for &(from, to) in edges {
        graph.add_edge(ids[from], ids[to]).unwrap();
    }
    (graph, ids)
}

fn build_network(n: usize, edges: &[(usize, usize)]) -> (AirportNetwork, Vec<AirportId>) {
    let mut network = AirportNetwork::new();
    let ids: Vec<AirportId> = (0..n).map(|i| network.add_airport(format!("A{i}"))).collect();
    for &(from, to) in edges {
        network.add_flight(ids[from], ids[to]).unwrap();
    }
    (network, ids)
}

/// Breadth-first reachable indices, used as the reference answer.
fn reference_reachable(n: usize, edges: &[(usize, usize)], start: usize) -> HashSet<usize> {
    let mut adjacency = vec![Vec::new(); n];
    for &(from, to) in edges {
        adjacency[from].push(to);
    }
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in &adjacency[node] {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

// ===========================================================================
// Traversal invariants
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn visited_set_is_exactly_the_reachable_set((words, edges) in arb_word_graph(), start_seed in any::<usize>()) {
        let (graph, ids) = build_words(&words, &edges);
        let start = start_seed % ids.len();

        let visited: HashSet<usize> = reachable(&graph, ids[start]).into_iter().map(|id| id.index()).collect();
        prop_assert_eq!(visited, reference_reachable(ids.len(), &edges, start));
    }

    #[test]
    fn each_node_is_visited_once((words, edges) in arb_word_graph(), start_seed in any::<usize>()) {
        let (graph, ids) = build_words(&words, &edges);
        let start = ids[start_seed % ids.len()];

        let order: Vec<VertexId> = DepthFirst::new(&graph, start).collect();
        let distinct: HashSet<VertexId> = order.iter().copied().collect();
        prop_assert_eq!(order.len(), distinct.len());
        prop_assert_eq!(order.first().copied(), Some(start));
    }

    #[test]
    fn queries_are_idempotent((words, edges) in arb_word_graph(), start_seed in any::<usize>(), k in 0usize..10) {
        let (graph, ids) = build_words(&words, &edges);
        let start = Some(ids[start_seed % ids.len()]);

        let first: Vec<&String> = filter_short_reachable(&graph, start, k).collect();
        let second: Vec<&String> = filter_short_reachable(&graph, start, k).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(longest_reachable_word(&graph, start), longest_reachable_word(&graph, start));

        let loops_a: Vec<&String> = find_self_looping_reachable(&graph, start).collect();
        let loops_b: Vec<&String> = find_self_looping_reachable(&graph, start).collect();
        prop_assert_eq!(loops_a, loops_b);
    }

    #[test]
    fn short_words_are_shorter_than_k((words, edges) in arb_word_graph(), start_seed in any::<usize>(), k in 0usize..10) {
        let (graph, ids) = build_words(&words, &edges);
        let start = start_seed % ids.len();
        let reachable = reference_reachable(ids.len(), &edges, start);

        let found: Vec<&String> = filter_short_reachable(&graph, Some(ids[start]), k).collect();
        for word in &found {
            prop_assert!(word.encode_utf16().count() < k);
        }
        let expected = reachable.iter().filter(|&&i| words[i].encode_utf16().count() < k).count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn longest_word_is_at_least_the_start((words, edges) in arb_word_graph(), start_seed in any::<usize>()) {
        let (graph, ids) = build_words(&words, &edges);
        let start = start_seed % ids.len();
        let reachable = reference_reachable(ids.len(), &edges, start);

        let longest = longest_reachable_word(&graph, Some(ids[start]));
        prop_assert!(longest.encode_utf16().count() >= words[start].encode_utf16().count());

        let max_len = reachable.iter().map(|&i| words[i].encode_utf16().count()).max().unwrap_or(0);
        prop_assert_eq!(longest.encode_utf16().count(), max_len);
    }

    #[test]
    fn self_loopers_are_reachable_and_loop((words, edges) in arb_word_graph(), start_seed in any::<usize>()) {
        let (graph, ids) = build_words(&words, &edges);
        let start = start_seed % ids.len();
        let reachable = reference_reachable(ids.len(), &edges, start);

        let expected = reachable.iter().filter(|&&i| edges.contains(&(i, i))).count();
        prop_assert_eq!(find_self_looping_reachable(&graph, Some(ids[start])).count(), expected);
    }
}

// ===========================================================================
// Airport reachability
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn airport_reaches_itself((n, edges) in arb_edges(), seed in any::<usize>()) {
        let (network, ids) = build_network(n, &edges);
        let airport = Some(ids[seed % n]);
        prop_assert!(is_reachable(&network, airport, airport));
    }

    #[test]
    fn airport_reachability_matches_reference((n, edges) in arb_edges(), a in any::<usize>(), b in any::<usize>()) {
        let (network, ids) = build_network(n, &edges);
        let (start, destination) = (a % n, b % n);
        let expected = reference_reachable(n, &edges, start).contains(&destination);
        prop_assert_eq!(is_reachable(&network, Some(ids[start]), Some(ids[destination])), expected);
    }
}

// ===========================================================================
// unreachable_from partition
// ===========================================================================

/// Map graph over small integers; neighbors may fall outside the key set.
fn arb_map_graph() -> impl Strategy<Value = HashMap<u8, Vec<u8>>> {
    prop::collection::hash_map(0u8..16, prop::collection::vec(0u8..20, 0..4), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn unreachable_and_visited_partition_the_keys(graph in arb_map_graph(), start in 0u8..20) {
        let unreachable = unreachable_from(&graph, &start);
        let keys: HashSet<u8> = graph.keys().copied().collect();

        prop_assert!(unreachable.is_subset(&keys));

        if graph.contains_key(&start) {
            let view = graphwalk::AdjacencyMap::new(&graph);
            let visited: HashSet<u8> = reachable(&view, &start).into_iter().copied().collect();
            let visited_keys: HashSet<u8> = visited.intersection(&keys).copied().collect();

            prop_assert!(unreachable.is_disjoint(&visited_keys));
            let union: HashSet<u8> = unreachable.union(&visited_keys).copied().collect();
            prop_assert_eq!(union, keys);
        } else {
            prop_assert_eq!(unreachable, keys);
        }
    }
}
