//! First-fit color reduction.

use crate::error::{check_len, GraphError, Result};
use crate::graph::{CsrGraph, GraphIndex};

/// Lowers every vertex of color `k` to the smallest color not used by
/// any of its neighbors.
///
/// For each vertex with `x[i] == k`, a boolean mask of the colors
/// `0..k` seen in the neighborhood is built (self-loops and uncolored
/// neighbors are ignored) and `x[i]` becomes the first unmarked color.
/// That may be `k` itself when the neighborhood uses all lower colors,
/// so the maximum color never increases.
pub fn vertex_coloring_first_fit<I, T>(graph: &CsrGraph<I, T>, x: &mut [I], k: I) -> Result<()>
where
    I: GraphIndex,
{
    let n = graph.num_nodes();
    check_len("x", n, x.len())?;
    if k < I::zero() {
        return Err(GraphError::IndexOutOfRange {
            label: "color",
            index: k.to_i64().unwrap_or(i64::MIN),
            len: n,
        });
    }
    let num_colors = k.index();

    for i in 0..n {
        if x[i] != k {
            continue;
        }

        let mut mask = vec![false; num_colors];
        for jj in graph.row_range(i) {
            let j = graph.aj()[jj].index();
            if j == i {
                continue; // ignore diagonal
            }
            if x[j] < I::zero() {
                continue; // ignore uncolored vertices
            }
            let color = x[j].index();
            if color < num_colors {
                mask[color] = true;
            }
        }

        let first_free = mask.iter().position(|&used| !used).unwrap_or(num_colors);
        x[i] = I::from_index(first_free);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_lowest_free_color() {
        // path 0-1-2, colors [0, 2, 0]: vertex 1 can drop to color 1
        let graph: CsrGraph<i32> =
            CsrGraph::unweighted(3, vec![0, 1, 3, 4], vec![1, 0, 2, 1]).unwrap();

        let mut x = vec![0, 2, 0];
        vertex_coloring_first_fit(&graph, &mut x, 2).unwrap();

        assert_eq!(x, [0, 1, 0]);
    }

    #[test]
    fn keeps_color_when_neighborhood_is_full() {
        // triangle with colors 0, 1, 2: vertex 2 cannot improve
        let graph: CsrGraph<i32> =
            CsrGraph::unweighted(3, vec![0, 2, 4, 6], vec![1, 2, 0, 2, 0, 1]).unwrap();

        let mut x = vec![0, 1, 2];
        vertex_coloring_first_fit(&graph, &mut x, 2).unwrap();

        assert_eq!(x, [0, 1, 2]);
    }
}
