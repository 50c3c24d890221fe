//! Lloyd-style clustering passes.
//!
//! Each pass reassigns every node to its nearest seed and then moves
//! each seed to a more central node of its cluster. The caller loops
//! passes until the seeds settle.

use crate::error::{check_len, GraphError, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};

use super::bellman_ford::{bellman_ford, bellman_ford_balanced};
use super::center::cluster_center;
use super::incidence::cluster_node_incidence;

/// One approximate Lloyd pass.
///
/// Nodes are assigned to their nearest seed by repeated Bellman–Ford
/// sweeps. The distance array is then repurposed: it is reset, zeroed
/// on every node with a neighbor in a different cluster, and propagated
/// again, so that afterwards `d[i]` measures the distance from `i` to
/// its cluster's boundary. Each seed finally moves to the node of its
/// cluster farthest from the boundary — an interior point that
/// approximates the cluster center at a fraction of the exact cost.
///
/// `d` and `cm` are fully overwritten; `centers` is updated in place.
/// On graphs with unreachable nodes, such nodes end with `cm[i] == -1`
/// and play no part in the seed update.
///
/// # References
///
/// Nathan Bell, "Algebraic Multigrid for Discrete Differential Forms",
/// PhD thesis (UIUC), August 2008.
pub fn lloyd_cluster<I, T>(
    graph: &CsrGraph<I, T>,
    d: &mut [T],
    cm: &mut [I],
    centers: &mut [I],
) -> Result<()>
where
    I: GraphIndex,
    T: Weight,
{
    let n = graph.num_nodes();
    graph.weights()?;
    check_len("d", n, d.len())?;
    check_len("cm", n, cm.len())?;

    seed_clusters(n, d, cm, centers)?;

    let mut old_distances = vec![T::zero(); n];

    // propagate distances outward from the seeds
    loop {
        old_distances.copy_from_slice(d);
        bellman_ford(graph, d, cm)?;
        if d[..] == old_distances[..] {
            break;
        }
    }

    // zero the boundary nodes
    for di in d.iter_mut() {
        *di = T::infinity();
    }
    for i in 0..n {
        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            if cm[i] != cm[j] {
                d[i] = T::zero();
                break;
            }
        }
    }

    // propagate distances inward from the boundaries
    loop {
        old_distances.copy_from_slice(d);
        bellman_ford(graph, d, cm)?;
        if d[..] == old_distances[..] {
            break;
        }
    }

    // move each seed to the interior point farthest from the boundary
    for i in 0..n {
        let a = cm[i];
        if a == -I::one() {
            continue;
        }
        debug_assert!(a.index() < centers.len());
        if d[centers[a.index()].index()] < d[i] {
            centers[a.index()] = I::from_index(i);
        }
    }

    Ok(())
}

/// One exact Lloyd pass.
///
/// Nodes are assigned with the size-balancing Bellman–Ford
/// ([`bellman_ford_balanced`]), and each seed then moves to the true
/// graph center of its cluster, computed per cluster with
/// Floyd–Warshall via [`cluster_center`]. Exactness costs O(N³) per
/// cluster of size N.
///
/// Every cluster must end up non-empty and internally connected, and
/// every node must be reachable from some seed; violations surface as
/// the corresponding incidence or center errors.
pub fn lloyd_cluster_exact<I, T>(
    graph: &CsrGraph<I, T>,
    d: &mut [T],
    cm: &mut [I],
    centers: &mut [I],
) -> Result<()>
where
    I: GraphIndex,
    T: Weight,
{
    let n = graph.num_nodes();
    graph.weights()?;
    check_len("d", n, d.len())?;
    check_len("cm", n, cm.len())?;

    let num_clusters = centers.len();
    seed_clusters(n, d, cm, centers)?;

    bellman_ford_balanced(graph, num_clusters, d, cm)?;

    let mut icp = vec![I::zero(); num_clusters + 1];
    let mut ici = vec![I::zero(); n];
    let mut local = vec![I::zero(); n];
    cluster_node_incidence(num_clusters, cm, &mut icp, &mut ici, &mut local)?;

    for a in 0..num_clusters {
        let center = cluster_center(graph, a, cm, &icp, &ici, &local)?;
        debug_assert_eq!(cm[center.index()], I::from_index(a));
        centers[a] = center;
    }

    Ok(())
}

/// Marks every node unassigned and infinitely far, then plants each
/// seed at distance zero in its own cluster.
fn seed_clusters<I, T>(n: usize, d: &mut [T], cm: &mut [I], centers: &[I]) -> Result<()>
where
    I: GraphIndex,
    T: Weight,
{
    for i in 0..n {
        d[i] = T::infinity();
        cm[i] = -I::one();
    }
    for (a, &seed) in centers.iter().enumerate() {
        if seed < I::zero() || seed.index() >= n {
            return Err(GraphError::IndexOutOfRange {
                label: "cluster center",
                index: seed.to_i64().unwrap_or(i64::MIN),
                len: n,
            });
        }
        d[seed.index()] = T::zero();
        cm[seed.index()] = I::from_index(a);
    }
    Ok(())
}
