//! Parallel-style colorings built from single Luby rounds.
//!
//! Jones–Plassmann and Largest-Degree-First both repeat the same step
//! per color: one randomized MIS round over the uncolored subgraph,
//! then a first-fit pass to reclaim lower colors. They differ only in
//! how vertex priorities are formed.

use crate::error::{check_len, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};
use crate::mis::mis_parallel;

use super::first_fit::vertex_coloring_first_fit;

/// Computes a vertex coloring with the Jones–Plassmann algorithm.
///
/// `z` supplies a random fractional priority per vertex; the vertex
/// degree is added on entry so that high-degree vertices tend to win
/// early rounds, and the resulting priorities stay fixed across all
/// rounds. `z` is overwritten.
///
/// Round `K` runs a single Luby round over the uncolored vertices
/// (selected vertices take color `K`, knocked-out vertices revert to
/// uncolored) and finishes with a first-fit pass at color `K`.
///
/// Returns the largest assigned color, or `-1` for the empty graph.
///
/// # References
///
/// Mark T. Jones and Paul E. Plassmann,
/// "A Parallel Graph Coloring Heuristic",
/// SIAM Journal on Scientific Computing 14:3 (1993) 654-669.
pub fn vertex_coloring_jones_plassmann<I, T, R>(
    graph: &CsrGraph<I, T>,
    x: &mut [I],
    z: &mut [R],
) -> Result<I>
where
    I: GraphIndex,
    R: Weight,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;
    check_len("z", n, z.len())?;

    x.fill(-I::one());
    for i in 0..n {
        z[i] = z[i] + R::from_usize(graph.degree(i));
    }

    let mut colored = 0;
    let mut k = I::zero();
    while colored < n {
        colored += color_one_round(graph, x, z, k)?;
        k = k + I::one();
    }

    Ok(max_color(x))
}

/// Computes a vertex coloring with the parallel Largest-Degree-First
/// algorithm.
///
/// Unlike Jones–Plassmann, priorities are recomputed before every
/// round: an uncolored vertex weighs `y[i]` plus its number of
/// uncolored neighbors (self-loops excluded), so vertices with many
/// live conflicts are colored first.
///
/// Returns the largest assigned color, or `-1` for the empty graph.
///
/// # References
///
/// J. R. Allwright, R. Bordawekar, P. D. Coddington, K. Dincer and
/// C. L. Martin, "A Comparison of Parallel Graph Coloring Algorithms",
/// SCCS-666.
pub fn vertex_coloring_ldf<I, T, R>(graph: &CsrGraph<I, T>, x: &mut [I], y: &[R]) -> Result<I>
where
    I: GraphIndex,
    R: Weight,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;
    check_len("y", n, y.len())?;

    x.fill(-I::one());
    let mut weights = vec![R::zero(); n];

    let mut colored = 0;
    let mut k = I::zero();
    while colored < n {
        for i in 0..n {
            if x[i] != -I::one() {
                continue;
            }
            let mut uncolored_neighbors = 0;
            for jj in graph.row_range(i) {
                let j = graph.aj()[jj].index();
                if x[j] == -I::one() && j != i {
                    uncolored_neighbors += 1;
                }
            }
            weights[i] = y[i] + R::from_usize(uncolored_neighbors);
        }

        colored += color_one_round(graph, x, &weights, k)?;
        k = k + I::one();
    }

    Ok(max_color(x))
}

/// One coloring round shared by the parallel variants: a single Luby
/// round at color `k`, reverting knocked-out vertices to uncolored,
/// then first-fit.
fn color_one_round<I, T, R>(
    graph: &CsrGraph<I, T>,
    x: &mut [I],
    weights: &[R],
    k: I,
) -> Result<usize>
where
    I: GraphIndex,
    R: Weight,
{
    let uncolored = -I::one();
    let knocked_out = -(I::one() + I::one());

    let colored = mis_parallel(graph, uncolored, k, knocked_out, x, weights, Some(1))?;
    for xi in x.iter_mut() {
        if *xi == knocked_out {
            *xi = uncolored;
        }
    }
    vertex_coloring_first_fit(graph, x, k)?;

    Ok(colored)
}

fn max_color<I: GraphIndex>(x: &[I]) -> I {
    x.iter().copied().max().unwrap_or_else(|| -I::one())
}
