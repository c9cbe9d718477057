use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::graph::adjacency::Edge;
use crate::Result;

/// Edge weight usable by the engine.
///
/// Implemented for the primitive integers and for `OrderedFloat`. Weights must
/// be non-negative for the computed distances to be meaningful.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two weights, or `None` if it cannot be represented
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                // Overflow to infinity counts as unrepresentable
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.into_inner().is_finite().then_some(sum)
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing a weighted directed graph with a fixed vertex set `[0, n)`
pub trait Graph<W: Weight>: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order
    fn edges_from(&self, vertex: usize) -> Result<&[Edge<W>]>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
