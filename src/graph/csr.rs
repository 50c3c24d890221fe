//! Compressed sparse row adjacency storage.

use std::fmt;
use std::ops::Range;

use super::index::GraphIndex;
use crate::error::{check_len, GraphError, Result};

/// A graph in compressed sparse row (CSR) form.
///
/// The adjacency structure is held in two arrays plus an optional third:
/// - `ap`: row pointers of length `num_nodes + 1`; `ap[i]..ap[i+1]`
///   bounds the neighbor list of vertex `i`
/// - `aj`: column indices of length `nnz`
/// - `ax`: edge weights of length `nnz` (absent for unweighted graphs)
///
/// The constructors validate the structural contract (offset sequence,
/// index bounds, array lengths). Semantic requirements such as symmetry
/// are *not* checked here; kernels that require symmetry document it,
/// and [`CsrGraph::is_symmetric`] is available as an advisory check.
/// Self-loops are tolerated and skipped by the kernels that care.
#[derive(Clone)]
pub struct CsrGraph<I, T = f64> {
    num_nodes: usize,
    ap: Vec<I>,
    aj: Vec<I>,
    ax: Option<Vec<T>>,
}

impl<I: GraphIndex, T> CsrGraph<I, T> {
    /// Creates a weighted graph from CSR arrays.
    pub fn weighted(num_nodes: usize, ap: Vec<I>, aj: Vec<I>, ax: Vec<T>) -> Result<Self> {
        Self::validate(num_nodes, &ap, &aj, Some(ax.len()))?;
        Ok(Self {
            num_nodes,
            ap,
            aj,
            ax: Some(ax),
        })
    }

    /// Creates an unweighted graph from CSR arrays.
    pub fn unweighted(num_nodes: usize, ap: Vec<I>, aj: Vec<I>) -> Result<Self> {
        Self::validate(num_nodes, &ap, &aj, None)?;
        Ok(Self {
            num_nodes,
            ap,
            aj,
            ax: None,
        })
    }

    fn validate(num_nodes: usize, ap: &[I], aj: &[I], ax_len: Option<usize>) -> Result<()> {
        check_len("ap", num_nodes + 1, ap.len())?;
        if ap[0] != I::zero() {
            return Err(GraphError::InvalidRowPtr { position: 0 });
        }
        for i in 0..num_nodes {
            if ap[i + 1] < ap[i] {
                return Err(GraphError::InvalidRowPtr { position: i + 1 });
            }
        }
        if ap[num_nodes].index() != aj.len() {
            return Err(GraphError::SizeMismatch {
                label: "aj",
                expected: ap[num_nodes].index(),
                found: aj.len(),
            });
        }
        for &j in aj {
            if j < I::zero() || j.index() >= num_nodes {
                return Err(GraphError::IndexOutOfRange {
                    label: "column index",
                    index: j.to_i64().unwrap_or(i64::MIN),
                    len: num_nodes,
                });
            }
        }
        if let Some(len) = ax_len {
            check_len("ax", aj.len(), len)?;
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of stored edges.
    pub fn nnz(&self) -> usize {
        self.aj.len()
    }

    /// Row pointer array.
    pub fn ap(&self) -> &[I] {
        &self.ap
    }

    /// Column index array.
    pub fn aj(&self) -> &[I] {
        &self.aj
    }

    /// The edge positions of vertex `i`, for indexing into `aj` and the
    /// weight array.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_nodes`.
    #[inline]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        assert!(i < self.num_nodes, "vertex index out of bounds");
        self.ap[i].index()..self.ap[i + 1].index()
    }

    /// The neighbor list of vertex `i`, in stored order.
    pub fn neighbors(&self, i: usize) -> &[I] {
        &self.aj[self.row_range(i)]
    }

    /// Number of stored edges leaving vertex `i` (self-loops included).
    pub fn degree(&self, i: usize) -> usize {
        self.row_range(i).len()
    }

    /// Whether the graph carries edge weights.
    pub fn has_weights(&self) -> bool {
        self.ax.is_some()
    }

    /// Edge weights, parallel to `aj`.
    ///
    /// Errors with [`GraphError::MissingWeights`] for unweighted graphs.
    pub fn weights(&self) -> Result<&[T]> {
        self.ax.as_deref().ok_or(GraphError::MissingWeights)
    }

    /// Structural symmetry check: every stored edge `(i, j)` has a
    /// stored reverse edge `(j, i)`. O(nnz · max degree); advisory only,
    /// the kernels never call it.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.num_nodes {
            for &j in self.neighbors(i) {
                let back = I::from_index(i);
                if !self.neighbors(j.index()).contains(&back) {
                    return false;
                }
            }
        }
        true
    }
}

impl<I: GraphIndex, T> fmt::Debug for CsrGraph<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrGraph")
            .field("num_nodes", &self.num_nodes)
            .field("nnz", &self.nnz())
            .field("weighted", &self.has_weights())
            .finish()
    }
}
