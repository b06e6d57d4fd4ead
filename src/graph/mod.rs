//! Graph representations
//!
//! Two complementary structures:
//! - [`AdjacencyGraph`]: a vector of vertices, each owning its outgoing edge
//!   records, the structure the traversal and search algorithms walk.
//! - [`EdgeListGraph`]: a flat vector of `(start, end, weight)` triples,
//!   used as a general edge collection and as the distance/predecessor table
//!   the path algorithms produce.

pub mod adjacency;
pub mod edgelist;
pub mod types;
pub mod vertex;

// Re-export main types
pub use adjacency::AdjacencyGraph;
pub use edgelist::{EdgeListGraph, EdgeNode};
pub use types::{VertexState, NO_VERTEX};
pub use vertex::{EdgeRecord, Vertex};
