//! Luby-style randomized maximal independent set.

use crate::error::{check_len, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};

/// Computes a maximal independent set with rounds of Luby's algorithm.
///
/// Only vertices with `x[i] == active` take part. Within a round, a
/// vertex joins the set when its priority pair `(y[i], i)` outranks
/// every active neighbor: `y` compares first and the *larger* vertex
/// index wins ties. A vertex with a neighbor already in the set is
/// knocked out; a vertex outranked by an active neighbor stays active
/// for a later round.
///
/// The tie-break is deterministic: neighbor comparisons happen in
/// stored CSR order and equal priorities always resolve by index, so
/// repeated runs over the same input produce identical sets.
///
/// # Arguments
///
/// * `active`, `selected`, `excluded` - state values as in
///   [`mis_serial`](crate::mis::mis_serial)
/// * `x` - per-vertex state, length `num_nodes`
/// * `y` - per-vertex priorities, length `num_nodes`; supplied by the
///   caller (typically random)
/// * `max_iters` - round limit; `None` runs until no vertex is active
///
/// # Returns
///
/// The number of selected vertices.
pub fn mis_parallel<I, T, R>(
    graph: &CsrGraph<I, T>,
    active: I,
    selected: I,
    excluded: I,
    x: &mut [I],
    y: &[R],
    max_iters: Option<usize>,
) -> Result<usize>
where
    I: GraphIndex,
    R: Weight,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;
    check_len("y", n, y.len())?;

    let mut count = 0;
    let mut num_iters = 0;
    let mut active_nodes = true;

    while active_nodes && max_iters.map_or(true, |limit| num_iters < limit) {
        active_nodes = false;
        num_iters += 1;

        for i in 0..n {
            if x[i] != active {
                continue;
            }
            let yi = y[i];

            let row = graph.row_range(i);
            let mut outranked = false;
            for jj in row.clone() {
                let j = graph.aj()[jj].index();
                let xj = x[j];

                if xj == selected {
                    x[i] = excluded; // neighbor is in the set
                    outranked = true;
                    break;
                }

                if xj == active {
                    let yj = y[j];
                    if yj > yi || (yj == yi && j > i) {
                        outranked = true; // neighbor wins the round
                        break;
                    }
                }
            }

            if outranked {
                active_nodes = true;
            } else {
                for jj in row {
                    let j = graph.aj()[jj].index();
                    if x[j] == active {
                        x[j] = excluded;
                    }
                }
                count += 1;
                x[i] = selected;
            }
        }
    }

    Ok(count)
}
