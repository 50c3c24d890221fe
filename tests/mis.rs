//! Independent-set kernel tests: greedy serial, Luby, and distance-k.

use amgraph::{mis_k_parallel, mis_parallel, mis_serial, CsrGraph, GraphError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a symmetric graph from an edge list.
fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> CsrGraph<i32> {
    let mut adj = vec![Vec::new(); n];
    for &(u, v) in edges {
        adj[u].push(v as i32);
        adj[v].push(u as i32);
    }
    let mut ap = vec![0i32];
    let mut aj = Vec::new();
    for row in adj {
        aj.extend(row);
        ap.push(aj.len() as i32);
    }
    CsrGraph::unweighted(n, ap, aj).unwrap()
}

fn path(n: usize) -> CsrGraph<i32> {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    graph_from_edges(n, &edges)
}

/// Random symmetric graph with roughly `density` edge probability.
fn random_graph(n: usize, density: f64, seed: u64) -> CsrGraph<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(density) {
                edges.push((u, v));
            }
        }
    }
    graph_from_edges(n, &edges)
}

fn assert_independent_and_maximal(graph: &CsrGraph<i32>, x: &[i32], selected: i32) {
    for u in 0..graph.num_nodes() {
        if x[u] == selected {
            for &v in graph.neighbors(u) {
                assert!(
                    v as usize == u || x[v as usize] != selected,
                    "vertices {} and {} are both selected and adjacent",
                    u,
                    v
                );
            }
        } else {
            let dominated = graph
                .neighbors(u)
                .iter()
                .any(|&v| x[v as usize] == selected);
            assert!(dominated, "vertex {} has no selected neighbor", u);
        }
    }
}

#[test]
fn serial_path_scenario() {
    let graph = path(5);
    let mut x = vec![0i32; 5];

    let count = mis_serial(&graph, 0, 1, 2, &mut x).unwrap();

    assert_eq!(count, 3);
    assert_eq!(x, [1, 2, 1, 2, 1]);
}

#[test]
fn luby_triangle_tie_break() {
    let graph = graph_from_edges(3, &[(0, 1), (1, 2), (0, 2)]);
    let mut x = vec![0i32; 3];
    let y = [0.5, 0.5, 0.5];

    let count = mis_parallel(&graph, 0, 1, 2, &mut x, &y, None).unwrap();

    // equal priorities: the largest index is promoted first
    assert_eq!(count, 1);
    assert_eq!(x, [2, 2, 1]);
}

#[test]
fn luby_is_deterministic() {
    let graph = random_graph(60, 0.1, 7);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let y: Vec<f64> = (0..60).map(|_| rng.gen_range(0.0..1.0)).collect();

    let mut first = vec![-1i32; 60];
    let mut second = vec![-1i32; 60];
    let a = mis_parallel(&graph, -1, 0, -2, &mut first, &y, None).unwrap();
    let b = mis_parallel(&graph, -1, 0, -2, &mut second, &y, None).unwrap();

    assert_eq!(a, b);
    assert_eq!(first, second);
}

#[test]
fn luby_random_graphs_are_independent_and_maximal() {
    for seed in 0..5 {
        let graph = random_graph(40, 0.15, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xDEAD);
        let y: Vec<f64> = (0..40).map(|_| rng.gen_range(0.0..1.0)).collect();

        let mut x = vec![0i32; 40];
        let count = mis_parallel(&graph, 0, 1, 2, &mut x, &y, None).unwrap();

        assert_eq!(count, x.iter().filter(|&&s| s == 1).count());
        assert_independent_and_maximal(&graph, &x, 1);
    }
}

#[test]
fn serial_mis_on_random_graph_is_independent_and_maximal() {
    let graph = random_graph(40, 0.2, 42);
    let mut x = vec![0i32; 40];
    mis_serial(&graph, 0, 1, 2, &mut x).unwrap();
    assert_independent_and_maximal(&graph, &x, 1);
}

#[test]
fn distance_k_members_are_far_apart() {
    let graph = path(10);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let y: Vec<f64> = (0..10).map(|_| rng.gen_range(0.0..1.0)).collect();

    for k in 1..4 {
        let mut x = vec![0i32; 10];
        mis_k_parallel(&graph, k, &mut x, &y, None).unwrap();

        let members: Vec<usize> = (0..10).filter(|&i| x[i] == 1).collect();
        assert!(!members.is_empty());
        // on a path, graph distance is index distance
        for pair in members.windows(2) {
            assert!(
                pair[1] - pair[0] > k,
                "members {} and {} are within distance {}",
                pair[0],
                pair[1],
                k
            );
        }
    }
}

#[test]
fn distance_one_matches_standard_mis_invariants() {
    let graph = random_graph(30, 0.15, 17);
    let mut rng = ChaCha8Rng::seed_from_u64(18);
    let y: Vec<f64> = (0..30).map(|_| rng.gen_range(0.0..1.0)).collect();

    let mut x = vec![0i32; 30];
    mis_k_parallel(&graph, 1, &mut x, &y, None).unwrap();

    assert_independent_and_maximal(&graph, &x, 1);
}

#[test]
fn state_array_length_is_checked() {
    let graph = path(4);
    let mut x = vec![0i32; 3];
    assert!(matches!(
        mis_serial(&graph, 0, 1, 2, &mut x),
        Err(GraphError::SizeMismatch { label: "x", .. })
    ));

    let y = vec![0.5; 4];
    let mut x = vec![0i32; 4];
    assert!(matches!(
        mis_parallel(&graph, 0, 1, 2, &mut x, &y[..3], None),
        Err(GraphError::SizeMismatch { label: "y", .. })
    ));
}
