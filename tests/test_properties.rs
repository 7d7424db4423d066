/// Property tests against independent oracles
///
/// Small seeded random graphs are checked against brute-force simple path
/// enumeration, petgraph's Bellman-Ford, and pathfinding's BFS reachability.

use pathfinding::prelude::bfs_reach;
use petgraph::algo::bellman_ford as petgraph_bellman_ford;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_bellman_ford::{query, IndexedGraph, RelaxationOptions, RoundLimit, ShortestPathOutcome};
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

type Edge = (u32, u32, i64);

fn random_edges(
    rng: &mut StdRng,
    vertices: u32,
    edges: usize,
    weights: RangeInclusive<i64>,
    acyclic: bool,
) -> Vec<Edge> {
    (0..edges)
        .map(|_| {
            let mut tail = rng.gen_range(0..vertices);
            let mut head = rng.gen_range(0..vertices);
            if acyclic {
                while head == tail {
                    head = rng.gen_range(0..vertices);
                }
                if tail > head {
                    std::mem::swap(&mut tail, &mut head);
                }
            }
            (tail, head, rng.gen_range(weights.clone()))
        })
        .collect()
}

/// Minimum weight over all simple paths from `source`
fn brute_force(edges: &[Edge], source: u32) -> HashMap<u32, i64> {
    fn walk(edges: &[Edge], vertex: u32, dist: i64, on_path: &mut HashSet<u32>, best: &mut HashMap<u32, i64>) {
        let entry = best.entry(vertex).or_insert(dist);
        if dist < *entry {
            *entry = dist;
        }

        on_path.insert(vertex);
        for &(tail, head, weight) in edges {
            if tail == vertex && !on_path.contains(&head) {
                walk(edges, head, dist + weight, on_path, best);
            }
        }
        on_path.remove(&vertex);
    }

    let mut best = HashMap::new();
    walk(edges, source, 0, &mut HashSet::new(), &mut best);
    best
}

fn all_option_sets() -> Vec<RelaxationOptions> {
    let mut sets = Vec::new();
    for round_limit in [RoundLimit::EdgeCount, RoundLimit::VertexCount] {
        for stop_on_convergence in [true, false] {
            sets.push(RelaxationOptions {
                round_limit,
                stop_on_convergence,
            });
        }
    }
    sets
}

fn check_against_brute_force(edges: &[Edge]) {
    let graph: IndexedGraph<u32, i64> = IndexedGraph::from_edges(edges.iter().copied());
    let source = edges[0].0;
    let expected = brute_force(edges, source);

    for options in all_option_sets() {
        for destination in graph.vertices() {
            let outcome = query(&graph, &source, destination, &options).unwrap();
            let want = match expected.get(destination) {
                Some(&d) => ShortestPathOutcome::Distance(d),
                None => ShortestPathOutcome::Unreachable,
            };
            assert_eq!(outcome, want, "edges {:?}, {} -> {}", edges, source, destination);
        }
    }
}

/// Negative weights on a DAG: every walk is a simple path
#[test]
fn test_acyclic_negative_weights_match_brute_force() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges = random_edges(&mut rng, 6, 10, -5..=5, true);
        check_against_brute_force(&edges);
    }
}

/// Non-negative weights with cycles: shortest walks are simple paths
#[test]
fn test_cyclic_non_negative_weights_match_brute_force() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges = random_edges(&mut rng, 6, 12, 0..=9, false);
        check_against_brute_force(&edges);
    }
}

/// Mixed weights with cycles: distances and negative cycles agree with petgraph
#[test]
fn test_mixed_weights_match_petgraph() {
    let mut negative_cycles = 0;

    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let vertices = 7;
        let edges = random_edges(&mut rng, vertices, 12, -3..=6, false);
        let source = edges[0].0;

        let mut reference = DiGraph::<(), f64>::new();
        let nodes: Vec<NodeIndex> = (0..vertices).map(|_| reference.add_node(())).collect();
        for &(tail, head, weight) in &edges {
            reference.add_edge(nodes[tail as usize], nodes[head as usize], weight as f64);
        }

        let graph: IndexedGraph<u32, i64> = IndexedGraph::from_edges(edges.iter().copied());
        let paths = petgraph_bellman_ford(&reference, nodes[source as usize]);
        if paths.is_err() {
            negative_cycles += 1;
        }

        for options in all_option_sets() {
            for destination in graph.vertices() {
                let outcome = query(&graph, &source, destination, &options).unwrap();

                let want = match &paths {
                    Err(_) => ShortestPathOutcome::NegativeCycleDetected,
                    Ok(paths) => {
                        let d = paths.distances[*destination as usize];
                        if d.is_infinite() {
                            ShortestPathOutcome::Unreachable
                        } else {
                            ShortestPathOutcome::Distance(d as i64)
                        }
                    }
                };
                assert_eq!(outcome, want, "seed {}, {} -> {}", seed, source, destination);
            }
        }
    }

    // The generator must actually exercise both outcomes
    assert!(negative_cycles > 0);
    assert!(negative_cycles < 300);
}

/// With non-negative weights, unreachable exactly when BFS cannot get there
#[test]
fn test_unreachable_matches_bfs_reachability() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges = random_edges(&mut rng, 8, 8, 0..=4, false);
        let source = edges[0].0;

        let reachable: HashSet<u32> = bfs_reach(source, |vertex| {
            edges
                .iter()
                .filter(|edge| edge.0 == *vertex)
                .map(|edge| edge.1)
                .collect::<Vec<_>>()
        })
        .collect();

        let graph: IndexedGraph<u32, i64> = IndexedGraph::from_edges(edges.iter().copied());
        for destination in graph.vertices() {
            let outcome = query(&graph, &source, destination, &RelaxationOptions::default()).unwrap();
            assert_eq!(
                outcome == ShortestPathOutcome::Unreachable,
                !reachable.contains(destination),
                "seed {}, {} -> {}",
                seed,
                source,
                destination
            );
        }
    }
}

/// A reachable negative cycle poisons every destination
#[test]
fn test_negative_cycle_independent_of_destination() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = random_edges(&mut rng, 8, 10, 0..=9, false);
        let source = edges[0].0;

        // Hang a negative triangle off the source
        edges.push((source, 100, 1));
        edges.push((100, 101, -2));
        edges.push((101, 102, -2));
        edges.push((102, 100, 1));

        let graph: IndexedGraph<u32, i64> = IndexedGraph::from_edges(edges.iter().copied());
        for options in all_option_sets() {
            for destination in graph.vertices() {
                assert_eq!(
                    query(&graph, &source, destination, &options).unwrap(),
                    ShortestPathOutcome::NegativeCycleDetected
                );
            }
        }
    }
}
