//! Vertex coloring by repeatedly peeling independent sets.

use crate::error::{check_len, Result};
use crate::graph::{CsrGraph, GraphIndex};
use crate::mis::mis_serial;

/// Colors the graph by assigning color `K` to a maximal independent set
/// of the still-uncolored subgraph, for `K = 0, 1, ...` until every
/// vertex is colored.
///
/// Each round runs the greedy serial MIS with shifted sentinels
/// (`-1 - K` active, `-2 - K` knocked out) so that the working states
/// can never collide with colors already assigned: the vertices knocked
/// out in round `K` are exactly the active set of round `K + 1`.
///
/// Returns the number of colors used; on return `x[i]` lies in
/// `[0, K)`.
pub fn vertex_coloring_mis<I, T>(graph: &CsrGraph<I, T>, x: &mut [I]) -> Result<I>
where
    I: GraphIndex,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;

    x.fill(-I::one());

    let mut colored = 0;
    let mut k = I::zero();
    while colored < n {
        let active = -I::one() - k;
        let excluded = -(I::one() + I::one()) - k;
        colored += mis_serial(graph, active, k, excluded, x)?;
        k = k + I::one();
    }

    Ok(k)
}
