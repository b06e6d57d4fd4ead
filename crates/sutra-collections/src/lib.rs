//! Container primitives for the sutra graph engine
//!
//! Three structures shared by the graph representations and algorithms:
//!
//! - [`Sequence`]: a growable array with checked indexed access, deque-style
//!   end operations, and an in-place quicksort. The backing store for the
//!   graph structures and the priority-queue index maps.
//! - [`IndexedHeap`]: a binary heap over externally owned keys that keeps a
//!   bidirectional mapping between heap slots and key indices, so a key's
//!   priority can be changed in O(log n) without removal and reinsertion.
//! - [`DisjointSet`]: union-find with union by rank, used by Kruskal's
//!   spanning-tree construction.

#![warn(clippy::all)]

pub mod disjoint;
pub mod heap;
pub mod sequence;

pub use disjoint::DisjointSet;
pub use heap::{HeapError, IndexedHeap};
pub use sequence::{Sequence, SequenceError};
