//! Distance-k maximal independent sets via repeated max-propagation.

use crate::error::{check_len, Result};
use crate::graph::{CsrGraph, GraphIndex, Weight};

/// One max-propagation step across the graph.
///
/// Each vertex selects, over its own entry and its neighborhood, the
/// `(key, value)` pair with the greatest value; on equal values the
/// larger key wins. Results go to the output buffers so the step can be
/// double-buffered: applying it `k` times leaves every vertex holding
/// the winning pair within its `k`-ball.
pub fn csr_propagate_max<I, T, R>(
    graph: &CsrGraph<I, T>,
    i_keys: &[I],
    o_keys: &mut [I],
    i_vals: &[R],
    o_vals: &mut [R],
) -> Result<()>
where
    I: GraphIndex,
    R: Weight,
{
    let n = graph.num_nodes();
    check_len("i_keys", n, i_keys.len())?;
    check_len("o_keys", n, o_keys.len())?;
    check_len("i_vals", n, i_vals.len())?;
    check_len("o_vals", n, o_vals.len())?;

    for i in 0..n {
        let mut k_max = i_keys[i];
        let mut v_max = i_vals[i];

        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            let k_j = i_keys[j];
            let v_j = i_vals[j];

            if k_j == k_max {
                continue;
            }
            if v_j < v_max {
                continue;
            }
            if v_j > v_max || k_j > k_max {
                k_max = k_j;
                v_max = v_j;
            }
        }

        o_keys[i] = k_max;
        o_vals[i] = v_max;
    }

    Ok(())
}

/// Computes a distance-`k` maximal independent set: selected vertices
/// (`x[i] = 1`) are pairwise separated by more than `k` edges and no
/// further vertex can be added without breaking that separation. A
/// standard MIS is the `k = 1` case.
///
/// Each outer round propagates `(vertex, priority)` pairs `k` steps so
/// that every vertex learns the winner of its `k`-ball; winners that
/// are still in play join the set. Membership is then propagated `k`
/// steps outward so every vertex within distance `k` of a winner
/// retires from future rounds with its priority pinned below every
/// live priority.
///
/// `x` is fully overwritten (`1` selected, `0` otherwise). `y` holds
/// caller-supplied priorities; ties resolve by larger vertex index.
/// `max_iters` bounds the number of outer rounds, `None` meaning no
/// bound.
pub fn mis_k_parallel<I, T, R>(
    graph: &CsrGraph<I, T>,
    k: usize,
    x: &mut [I],
    y: &[R],
    max_iters: Option<usize>,
) -> Result<()>
where
    I: GraphIndex,
    R: Weight,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;
    check_len("y", n, y.len())?;

    let mut active = vec![true; n];

    let mut i_keys: Vec<I> = (0..n).map(I::from_index).collect();
    let mut o_keys = vec![I::zero(); n];
    let mut i_vals: Vec<R> = y.to_vec();
    let mut o_vals = vec![R::zero(); n];

    for xi in x.iter_mut() {
        *xi = I::zero();
    }

    let mut iter = 0;
    while max_iters.map_or(true, |limit| iter < limit) {
        iter += 1;

        for _ in 0..k {
            csr_propagate_max(graph, &i_keys, &mut o_keys, &i_vals, &mut o_vals)?;
            std::mem::swap(&mut i_keys, &mut o_keys);
            std::mem::swap(&mut i_vals, &mut o_vals);
        }

        for i in 0..n {
            if i_keys[i].index() == i && active[i] {
                x[i] = I::one(); // i is the maximum over its k-ball
            }

            i_keys[i] = I::from_index(i);
            i_vals[i] = if x[i] == I::one() { R::one() } else { R::zero() };
        }

        for _ in 0..k {
            csr_propagate_max(graph, &i_keys, &mut o_keys, &i_vals, &mut o_vals)?;
            std::mem::swap(&mut i_keys, &mut o_keys);
            std::mem::swap(&mut i_vals, &mut o_vals);
        }

        let mut work_left = false;
        for i in 0..n {
            if i_vals[i] == R::one() {
                // within distance k of a selected vertex
                active[i] = false;
                i_vals[i] = R::zero() - R::one();
            } else {
                i_vals[i] = y[i];
                work_left = true;
            }
            i_keys[i] = I::from_index(i);
        }

        if !work_left {
            return Ok(());
        }
    }

    Ok(())
}
