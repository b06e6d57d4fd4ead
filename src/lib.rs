//! Sutra Graph Engine
//!
//! An in-memory graph engine built on adjacency-list storage:
//!
//! - [`graph`]: the two graph representations: [`AdjacencyGraph`], a vector
//!   of vertices each owning its outgoing edge records, and
//!   [`EdgeListGraph`], a flat collection of `(start, end, weight)` triples
//!   that doubles as the distance/predecessor table produced by the search
//!   algorithms.
//! - [`algo`]: traversal (DFS in recursive and iterative form, BFS),
//!   topological sort, strongly connected components (Kosaraju and Tarjan),
//!   minimum spanning tree (Prim in linear-scan and indexed-heap variants,
//!   Kruskal), and single-source shortest paths (Dijkstra in both variants,
//!   Bellman-Ford with negative-cycle detection).
//! - [`io`]: readers and writers for the line-oriented graph text format and
//!   a dot-language subset.
//!
//! The container primitives (growable sequence, indexed priority queue,
//! disjoint set) live in the `sutra-collections` crate and are re-exported
//! here.
//!
//! # Example
//!
//! ```rust
//! use sutra::{algo, AdjacencyGraph};
//!
//! let mut graph = AdjacencyGraph::new(true);
//! for _ in 0..4 {
//!     graph.add_vertex();
//! }
//! graph.add_edge(0, 1, 1.0);
//! graph.add_edge(1, 2, 2.0);
//! graph.add_edge(0, 2, 5.0);
//! graph.add_edge(2, 3, 1.0);
//!
//! let paths = algo::dijkstra(&mut graph, 0).unwrap();
//! assert_eq!(paths.edge(3).unwrap().weight, 4.0);
//! assert_eq!(paths.edge(3).unwrap().start, 2);
//! ```
//!
//! All structures are single-threaded; exclusive access is enforced by the
//! `&mut` receivers on every mutating operation.

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod io;

// Re-export main types
pub use graph::{AdjacencyGraph, EdgeListGraph, EdgeNode, EdgeRecord, Vertex, VertexState, NO_VERTEX};
pub use sutra_collections::{DisjointSet, HeapError, IndexedHeap, Sequence, SequenceError};
