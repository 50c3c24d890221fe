//! Cluster/node incidence index.
//!
//! A clustering is stored as one label per node (`cm`). Mapping the
//! other way, from a cluster to its member nodes, needs a CSC-style
//! index over the implicit node×cluster incidence matrix; the row
//! direction never needs storage because `cm` *is* the CSR form (one
//! entry per row, unit values).

use crate::error::{check_len, GraphError, Result};
use crate::graph::GraphIndex;

/// Builds the cluster→nodes index and the local-index map from
/// per-node cluster labels.
///
/// On return, `ici` holds all node indexes grouped by cluster: blocks
/// appear in ascending cluster order and the nodes *within* each block
/// are listed in descending global order. `icp[a]..icp[a+1]` bounds
/// cluster `a`'s block, and `local[i]` is node `i`'s position inside
/// its block, so the two directions compose:
///
/// - local `(a, m)` to global: `ici[icp[a] + m]`
/// - global `i` to local: `(cm[i], local[i])`
///
/// and `ici[icp[cm[i]] + local[i]] == i` for every node.
///
/// Every cluster must own at least one node (its center); an absent
/// label in `[0, num_clusters)` is an [`GraphError::EmptyCluster`]
/// error, and labels outside that range (including unassigned `-1`)
/// are [`GraphError::IndexOutOfRange`].
pub fn cluster_node_incidence<I>(
    num_clusters: usize,
    cm: &[I],
    icp: &mut [I],
    ici: &mut [I],
    local: &mut [I],
) -> Result<()>
where
    I: GraphIndex,
{
    let num_nodes = cm.len();
    check_len("icp", num_clusters + 1, icp.len())?;
    check_len("ici", num_nodes, ici.len())?;
    check_len("local", num_nodes, local.len())?;

    let mut counts = vec![0usize; num_clusters];
    for &label in cm {
        if label < I::zero() || label.index() >= num_clusters {
            return Err(GraphError::IndexOutOfRange {
                label: "cluster label",
                index: label.to_i64().unwrap_or(i64::MIN),
                len: num_clusters,
            });
        }
        counts[label.index()] += 1;
    }
    if let Some(empty) = counts.iter().position(|&count| count == 0) {
        return Err(GraphError::EmptyCluster { cluster: empty });
    }

    for (m, slot) in ici.iter_mut().enumerate() {
        *slot = I::from_index(m);
    }
    // ascending cluster blocks; descending node order inside each block
    ici.sort_unstable_by(|&i, &j| {
        cm[i.index()]
            .cmp(&cm[j.index()])
            .then_with(|| j.cmp(&i))
    });

    icp[0] = I::zero();
    let mut current = 0;
    for (m, &node) in ici.iter().enumerate() {
        let cluster = cm[node.index()].index();
        if cluster != current {
            current += 1;
            debug_assert_eq!(cluster, current);
            icp[current] = I::from_index(m);
        }
    }
    icp[num_clusters] = I::from_index(num_nodes);

    for a in 0..num_clusters {
        let begin = icp[a].index();
        let end = icp[a + 1].index();
        for m in 0..end - begin {
            local[ici[begin + m].index()] = I::from_index(m);
        }
    }

    Ok(())
}
