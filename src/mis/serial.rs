//! Greedy serial maximal independent set.

use crate::error::{check_len, Result};
use crate::graph::{CsrGraph, GraphIndex};

/// Computes a maximal independent set with a greedy serial sweep.
///
/// Only vertices with `x[i] == active` take part; everything else is
/// left untouched. Vertices are visited in ascending index order: each
/// still-active vertex is placed in the set (`x[i] = selected`) and its
/// active neighbors are knocked out (`x[j] = excluded`).
///
/// # Arguments
///
/// * `active` - state value marking the vertices under consideration
/// * `selected` - state value written to vertices placed in the set
/// * `excluded` - state value written to their dominated neighbors
/// * `x` - per-vertex state, length `num_nodes`
///
/// # Returns
///
/// The number of selected vertices. On a symmetric graph the selected
/// vertices form an independent set, maximal with respect to the
/// ascending visit order.
pub fn mis_serial<I, T>(
    graph: &CsrGraph<I, T>,
    active: I,
    selected: I,
    excluded: I,
    x: &mut [I],
) -> Result<usize>
where
    I: GraphIndex,
{
    check_len("x", graph.num_nodes(), x.len())?;

    let mut count = 0;
    for i in 0..graph.num_nodes() {
        if x[i] != active {
            continue;
        }

        x[i] = selected;
        count += 1;

        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            if x[j] == active {
                x[j] = excluded;
            }
        }
    }

    Ok(count)
}
