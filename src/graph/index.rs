//! Scalar abstractions shared by every kernel.

use num_traits::{Bounded, Num, NumCast, PrimInt, Signed};
use std::fmt;

/// Signed integer type used for row pointers, column indices, vertex
/// states, colors, and cluster labels.
///
/// The kernels store sentinel values (`-1`, `-2`, and shifted negatives)
/// in the same arrays as valid indices, so the type must be signed.
pub trait GraphIndex: PrimInt + Signed + fmt::Debug + fmt::Display + 'static {
    /// Convert to `usize` for slice indexing. Only called on
    /// non-negative values.
    fn index(self) -> usize;

    /// Convert a slice position back to the index type.
    fn from_index(value: usize) -> Self;
}

macro_rules! impl_graph_index {
    ($($t:ty),*) => {$(
        impl GraphIndex for $t {
            #[inline]
            fn index(self) -> usize {
                debug_assert!(self >= 0, "negative index {}", self);
                self as usize
            }

            #[inline]
            fn from_index(value: usize) -> Self {
                value as $t
            }
        }
    )*};
}

impl_graph_index!(i32, i64, isize);

/// Numeric type used for edge weights, distances, and random priorities.
///
/// "Infinity" is deliberately the largest *finite* value of the type,
/// not an IEEE infinity. Callers must keep edge weights small enough
/// that `weight + distance` never overflows a finite sum.
pub trait Weight: Copy + PartialOrd + Num + Bounded + NumCast + fmt::Debug {
    /// The unreachable-distance marker: the largest finite value.
    #[inline]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Convert a count into the weight type, saturating at the largest
    /// finite value if the count does not fit.
    #[inline]
    fn from_usize(value: usize) -> Self {
        NumCast::from(value).unwrap_or_else(Self::max_value)
    }
}

impl<T> Weight for T where T: Copy + PartialOrd + Num + Bounded + NumCast + fmt::Debug {}
