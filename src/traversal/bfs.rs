//! Breadth-first traversal.

use crate::error::{check_len, GraphError, Result};
use crate::graph::{CsrGraph, GraphIndex};

/// Breadth-first traversal from `seed`, recording visit order and
/// level sets.
///
/// `level` must be pre-filled with `-1` by the caller. On return,
/// `order[..reached]` lists the reachable vertices in breadth-first
/// order (the seed first) and `level[j]` holds the unweighted
/// shortest-path distance from the seed for every reached `j`.
/// Unreached vertices keep `level == -1` and do not appear in `order`.
///
/// # Returns
///
/// The number of reached vertices.
pub fn breadth_first_search<I, T>(
    graph: &CsrGraph<I, T>,
    seed: I,
    order: &mut [I],
    level: &mut [I],
) -> Result<usize>
where
    I: GraphIndex,
{
    let n = graph.num_nodes();
    check_len("order", n, order.len())?;
    check_len("level", n, level.len())?;
    if seed < I::zero() || seed.index() >= n {
        return Err(GraphError::IndexOutOfRange {
            label: "seed",
            index: seed.to_i64().unwrap_or(i64::MIN),
            len: n,
        });
    }

    order[0] = seed;
    level[seed.index()] = I::zero();

    let mut reached = 1;
    let mut level_begin = 0;
    let mut level_end = 1;
    let mut current_level = I::one();

    while level_begin < level_end {
        // expand every vertex of the previous level
        for ii in level_begin..level_end {
            let i = order[ii].index();

            for jj in graph.row_range(i) {
                let j = graph.aj()[jj].index();
                if level[j] == -I::one() {
                    order[reached] = graph.aj()[jj];
                    level[j] = current_level;
                    reached += 1;
                }
            }
        }

        level_begin = level_end;
        level_end = reached;
        current_level = current_level + I::one();
    }

    Ok(reached)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_match_hop_counts() {
        // edges 0-1, 0-2, 2-3
        let graph: CsrGraph<i32> =
            CsrGraph::unweighted(4, vec![0, 2, 3, 5, 6], vec![1, 2, 0, 0, 3, 2]).unwrap();

        let mut order = vec![0i32; 4];
        let mut level = vec![-1i32; 4];
        let reached = breadth_first_search(&graph, 0, &mut order, &mut level).unwrap();

        assert_eq!(reached, 4);
        assert_eq!(order, [0, 1, 2, 3]);
        assert_eq!(level, [0, 1, 1, 2]);
    }

    #[test]
    fn unreached_vertices_keep_minus_one() {
        // two components: 0-1 and isolated 2
        let graph: CsrGraph<i32> =
            CsrGraph::unweighted(3, vec![0, 1, 2, 2], vec![1, 0]).unwrap();

        let mut order = vec![0i32; 3];
        let mut level = vec![-1i32; 3];
        let reached = breadth_first_search(&graph, 0, &mut order, &mut level).unwrap();

        assert_eq!(reached, 2);
        assert_eq!(&order[..2], &[0, 1]);
        assert_eq!(level, [0, 1, -1]);
    }

    #[test]
    fn rejects_bad_seed() {
        let graph: CsrGraph<i32> = CsrGraph::unweighted(2, vec![0, 1, 2], vec![1, 0]).unwrap();
        let mut order = vec![0i32; 2];
        let mut level = vec![-1i32; 2];
        assert!(matches!(
            breadth_first_search(&graph, 5, &mut order, &mut level),
            Err(GraphError::IndexOutOfRange { label: "seed", .. })
        ));
    }
}
