//! Error types for the graph kernels.

use thiserror::Error;

/// Errors surfaced by the graph kernels.
///
/// Every variant is a precondition violation: the failing call is
/// abandoned and no partial result is promised. Numeric overflow in
/// distance sums is the caller's responsibility and is not detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An array argument has the wrong length.
    #[error("{label} has length {found}, expected {expected}")]
    SizeMismatch {
        label: &'static str,
        expected: usize,
        found: usize,
    },

    /// The row pointer array is not a non-decreasing offset sequence
    /// starting at zero and ending at the number of edges.
    #[error("row pointer array invalid at position {position}")]
    InvalidRowPtr { position: usize },

    /// An index argument or array entry is outside its valid range.
    #[error("{label} {index} out of range for length {len}")]
    IndexOutOfRange {
        label: &'static str,
        index: i64,
        len: usize,
    },

    /// A kernel needed edge weights but the graph has none.
    #[error("edge weights required but the graph has none")]
    MissingWeights,

    /// A cluster contains no nodes.
    #[error("cluster {cluster} is empty")]
    EmptyCluster { cluster: usize },

    /// A cluster is not internally connected.
    #[error("cluster {cluster} is not internally connected")]
    DisconnectedCluster { cluster: usize },

    /// An iterative kernel hit its safety cap without converging.
    #[error("no convergence after {limit} iterations")]
    IterationLimit { limit: u64 },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

pub(crate) fn check_len(label: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GraphError::SizeMismatch {
            label,
            expected,
            found,
        });
    }
    Ok(())
}
