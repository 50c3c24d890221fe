//! Exact graph centers via per-cluster Floyd–Warshall.

use crate::error::{check_len, GraphError, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};

/// Finds the graph center of one cluster: the member minimizing the
/// maximum shortest-path distance to every other member, with paths
/// restricted to intra-cluster edges.
///
/// Takes the incidence arrays produced by
/// [`cluster_node_incidence`](super::cluster_node_incidence). For a
/// cluster of `N` members this allocates an `N×N` distance matrix and
/// runs Floyd–Warshall, so cost is O(N³) time and O(N²) space; callers
/// should keep clusters modest.
///
/// The cluster must be internally connected; a member unreachable from
/// another over intra-cluster edges is a
/// [`GraphError::DisconnectedCluster`] error. Eccentricity ties go to
/// the smallest local index, i.e. the member stored first in the
/// cluster's block.
///
/// # Returns
///
/// The global node index of the center.
pub fn cluster_center<I, T>(
    graph: &CsrGraph<I, T>,
    cluster: usize,
    cm: &[I],
    icp: &[I],
    ici: &[I],
    local: &[I],
) -> Result<I>
where
    I: GraphIndex,
    T: Weight,
{
    let n = graph.num_nodes();
    let ax = graph.weights()?;
    check_len("cm", n, cm.len())?;
    check_len("ici", n, ici.len())?;
    check_len("local", n, local.len())?;
    if cluster + 1 >= icp.len() {
        return Err(GraphError::IndexOutOfRange {
            label: "cluster",
            index: cluster as i64,
            len: icp.len().saturating_sub(1),
        });
    }

    let begin = icp[cluster].index();
    let end = icp[cluster + 1].index();
    if begin > end || end > n {
        return Err(GraphError::InvalidRowPtr { position: cluster });
    }
    let size = end - begin;
    if size == 0 {
        return Err(GraphError::EmptyCluster { cluster });
    }

    let inf = T::infinity();
    let target = I::from_index(cluster);

    // pairwise distances between cluster members, row-major
    let mut dist = vec![inf; size * size];
    for m in 0..size {
        let i = ici[begin + m].index();
        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            if cm[j] == target {
                let local_j = local[j].index();
                debug_assert!(local_j < size);
                dist[m * size + local_j] = ax[jj];
            }
        }
        dist[m * size + m] = T::zero();
    }

    for l in 0..size {
        for m in 0..size {
            let d_ml = dist[m * size + l];
            for q in 0..size {
                let via = d_ml + dist[l * size + q];
                if via < dist[m * size + q] {
                    dist[m * size + q] = via;
                }
            }
        }
    }

    if dist.iter().any(|&v| v >= inf) {
        return Err(GraphError::DisconnectedCluster { cluster });
    }

    let mut best = 0;
    let mut best_ecc = inf;
    for m in 0..size {
        let mut ecc = T::zero();
        for q in 0..size {
            let v = dist[m * size + q];
            if v > ecc {
                ecc = v;
            }
        }
        if ecc < best_ecc {
            best = m;
            best_ecc = ecc;
        }
    }

    Ok(ici[begin + best])
}
