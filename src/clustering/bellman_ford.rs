//! Bellman–Ford relaxation sweeps over a weighted graph.

use crate::error::{check_len, GraphError, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};

/// One Bellman–Ford relaxation sweep.
///
/// For each vertex in ascending order, every incoming offer
/// `Ax[jj] + d[j]` is compared against the current distance; the best
/// strict improvement wins and the vertex adopts that neighbor's
/// cluster label. The sweep does not iterate: the caller repeats it
/// until `d` stops changing.
///
/// `d` uses the largest finite value of `T` as "unreachable"; sums
/// must stay below overflow, which is the caller's responsibility.
pub fn bellman_ford<I, T>(graph: &CsrGraph<I, T>, d: &mut [T], cm: &mut [I]) -> Result<()>
where
    I: GraphIndex,
    T: Weight,
{
    let n = graph.num_nodes();
    let ax = graph.weights()?;
    check_len("d", n, d.len())?;
    check_len("cm", n, cm.len())?;

    for i in 0..n {
        let mut di = d[i];
        let mut ci = cm[i];

        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            let dd = ax[jj] + d[j];
            if dd < di {
                di = dd;
                ci = cm[j];
            }
        }

        d[i] = di;
        cm[i] = ci;
    }

    Ok(())
}

/// Bellman–Ford iterated to quiescence, with a size-balancing
/// tie-break.
///
/// Beyond strict distance improvements, a vertex may defect to a
/// neighboring cluster at *equal* distance when all of the following
/// hold:
///
/// - both vertices already carry cluster labels,
/// - the target cluster stays strictly smaller than the source even
///   after the move (`size(target) + 1 < size(source)`), and
/// - the vertex is not the recorded predecessor of any other vertex,
///   so the shrinking cluster cannot be disconnected behind it.
///
/// Every switch updates cluster sizes and the predecessor counts
/// immediately. The sweep repeats until nothing changes; as a guard
/// against non-termination on pathological inputs it aborts with
/// [`GraphError::IterationLimit`] after `n³` sweeps.
pub fn bellman_ford_balanced<I, T>(
    graph: &CsrGraph<I, T>,
    num_clusters: usize,
    d: &mut [T],
    cm: &mut [I],
) -> Result<()>
where
    I: GraphIndex,
    T: Weight,
{
    let n = graph.num_nodes();
    let ax = graph.weights()?;
    check_len("d", n, d.len())?;
    check_len("cm", n, cm.len())?;

    let mut predecessor = vec![-I::one(); n];
    let mut pred_count = vec![0usize; n];

    let mut cluster_size = vec![0usize; num_clusters];
    for &label in cm.iter() {
        if label >= I::zero() {
            if label.index() >= num_clusters {
                return Err(GraphError::IndexOutOfRange {
                    label: "cluster label",
                    index: label.to_i64().unwrap_or(i64::MIN),
                    len: num_clusters,
                });
            }
            cluster_size[label.index()] += 1;
        }
    }

    let limit = (n as u64)
        .saturating_mul(n as u64)
        .saturating_mul(n as u64);
    let mut iterations: u64 = 0;

    loop {
        let mut change = false;

        for i in 0..n {
            for jj in graph.row_range(i) {
                let j = graph.aj()[jj].index();
                let new_d = ax[jj] + d[j];

                let improves = new_d < d[i];
                let rebalances = cm[i] >= I::zero()
                    && cm[j] >= I::zero()
                    && new_d == d[i]
                    && cluster_size[cm[j].index()] + 1 < cluster_size[cm[i].index()]
                    && pred_count[i] == 0;

                if improves || rebalances {
                    if cm[i] >= I::zero() {
                        cluster_size[cm[i].index()] -= 1;
                    }
                    if cm[j] >= I::zero() {
                        cluster_size[cm[j].index()] += 1;
                    }

                    if predecessor[i] >= I::zero() {
                        pred_count[predecessor[i].index()] -= 1;
                    }
                    predecessor[i] = I::from_index(j);
                    pred_count[j] += 1;

                    d[i] = new_d;
                    cm[i] = cm[j];
                    change = true;
                }
            }
        }

        if !change {
            return Ok(());
        }
        iterations += 1;
        if iterations >= limit {
            return Err(GraphError::IterationLimit { limit });
        }
    }
}
