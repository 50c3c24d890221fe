//! # amgraph: sparse graph kernels for algebraic multigrid
//!
//! This library implements the graph kernels behind the coarsening and
//! smoothing stages of an algebraic multigrid (AMG) setup: maximal
//! independent sets, vertex colorings, traversals, connected
//! components, and Lloyd-style clustering with exact graph centers.
//! Graphs are consumed in compressed sparse row (CSR) form and every
//! kernel is a pure, sequential function over caller-allocated arrays.
//!
//! ## Kernel families
//!
//! 1. **Independent sets**: greedy serial MIS, Luby's randomized
//!    parallel MIS with a deterministic index tie-break, and a
//!    distance-k generalization built on max-propagation.
//!
//! 2. **Coloring**: MIS peeling, Jones–Plassmann, and
//!    Largest-Degree-First, all sharing the MIS kernels and a
//!    first-fit color reduction.
//!
//! 3. **Traversal**: breadth-first level sets and iterative-DFS
//!    connected components.
//!
//! 4. **Clustering**: Bellman–Ford relaxation (plain and
//!    size-balanced), cluster/node incidence indexing, Floyd–Warshall
//!    graph centers, and the approximate/exact Lloyd passes that
//!    compose them.
//!
//! ## Usage
//!
//! Computing a maximal independent set over a path graph:
//!
//! ```
//! use amgraph::{mis_serial, CsrGraph};
//!
//! // path 0-1-2-3-4
//! let ap = vec![0, 1, 3, 5, 7, 8];
//! let aj = vec![1, 0, 2, 1, 3, 2, 4, 3];
//! let graph: CsrGraph<i32> = CsrGraph::unweighted(5, ap, aj).unwrap();
//!
//! let mut state = vec![0i32; 5];
//! let count = mis_serial(&graph, 0, 1, 2, &mut state).unwrap();
//!
//! assert_eq!(count, 3);
//! assert_eq!(state, [1, 2, 1, 2, 1]);
//! ```
//!
//! One exact Lloyd clustering pass over a weighted path:
//!
//! ```
//! use amgraph::{lloyd_cluster_exact, CsrGraph};
//!
//! let ap = vec![0, 1, 3, 5, 7, 8];
//! let aj = vec![1, 0, 2, 1, 3, 2, 4, 3];
//! let ax = vec![1.0; 8];
//! let graph = CsrGraph::weighted(5, ap, aj, ax).unwrap();
//!
//! let mut distance = vec![0.0; 5];
//! let mut cluster = vec![0i32; 5];
//! let mut centers = vec![0, 4];
//! lloyd_cluster_exact(&graph, &mut distance, &mut cluster, &mut centers).unwrap();
//!
//! assert_eq!(cluster, [0, 0, 0, 1, 1]);
//! assert_eq!(centers, [1, 4]);
//! ```
//!
//! ## Conventions
//!
//! - Sentinels: `-1` is "uncolored"/"unassigned", `-2` marks transient
//!   MIS rejections, and "infinity" is the largest *finite* value of
//!   the weight type.
//! - Symmetry is required for the correctness of the MIS, coloring,
//!   BFS, and component kernels but never enforced; callers validate
//!   their inputs.
//! - Tie-breaks are deterministic and part of the contract: equal
//!   priorities resolve by vertex index, and downstream AMG setup
//!   depends on the exact results.

pub mod clustering;
pub mod coloring;
pub mod error;
pub mod graph;
pub mod mis;
pub mod traversal;

// Re-export primary components
pub use error::{GraphError, Result};
pub use graph::{from_sprs, to_sprs, CsrGraph, GraphIndex, Weight};

pub use clustering::{
    bellman_ford, bellman_ford_balanced, cluster_center, cluster_node_incidence, lloyd_cluster,
    lloyd_cluster_exact,
};
pub use coloring::{
    vertex_coloring_first_fit, vertex_coloring_jones_plassmann, vertex_coloring_ldf,
    vertex_coloring_mis,
};
pub use mis::{csr_propagate_max, mis_k_parallel, mis_parallel, mis_serial};
pub use traversal::{breadth_first_search, connected_components};
