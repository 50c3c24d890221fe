//! Conversions between [`CsrGraph`] and the `sprs` matrix types.
//!
//! The surrounding multigrid setup keeps its operators in `sprs`
//! matrices; these helpers move adjacency structure across the boundary
//! without touching the kernel APIs.

use sprs::{CsMatI, SpIndex};

use super::csr::CsrGraph;
use super::index::{GraphIndex, Weight};
use crate::error::{GraphError, Result};

/// Builds a weighted graph from a square `sprs` matrix, converting to
/// CSR storage first when needed. Stored entry values become edge
/// weights.
pub fn from_sprs<I, T>(matrix: CsMatI<T, I>) -> Result<CsrGraph<I, T>>
where
    I: GraphIndex + SpIndex,
    T: Weight + Default,
{
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows != cols {
        return Err(GraphError::SizeMismatch {
            label: "adjacency matrix columns",
            expected: rows,
            found: cols,
        });
    }

    let (indptr, indices, data) = matrix.into_raw_storage();
    CsrGraph::weighted(rows, indptr, indices, data)
}

/// Converts a graph to a `sprs` CSR matrix. Unweighted graphs convert
/// with unit weights; neighbor lists are sorted by column on the way
/// out, as `sprs` requires.
pub fn to_sprs<I, T>(graph: &CsrGraph<I, T>) -> CsMatI<T, I>
where
    I: GraphIndex + SpIndex,
    T: Weight + Default,
{
    let n = graph.num_nodes();
    let ax = graph.weights().ok();

    let mut indptr = Vec::with_capacity(n + 1);
    let mut indices = Vec::with_capacity(graph.nnz());
    let mut data = Vec::with_capacity(graph.nnz());

    indptr.push(I::zero());
    let mut row: Vec<(I, T)> = Vec::new();
    for i in 0..n {
        row.clear();
        for jj in graph.row_range(i) {
            let w = ax.map_or_else(T::one, |w| w[jj]);
            row.push((graph.aj()[jj], w));
        }
        row.sort_unstable_by_key(|&(j, _)| j);
        for &(j, w) in &row {
            indices.push(j);
            data.push(w);
        }
        indptr.push(I::from_index(indices.len()));
    }

    CsMatI::new((n, n), indptr, indices, data)
}
