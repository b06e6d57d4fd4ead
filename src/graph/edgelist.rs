//! Edge-list graph
//!
//! The simplest edge collection: a flat vector of `(start, end, weight)`
//! triples plus an explicit vertex count. Used both as an
//! algorithm-agnostic exchange format and, in the
//! [`distance_table`](EdgeListGraph::distance_table) form, as the
//! distance/predecessor table the path algorithms fill in: entry `i` is the
//! best known edge into vertex `i`, with `start == NO_VERTEX` and an
//! infinite weight meaning "unreached".

use super::types::NO_VERTEX;
use serde::{Deserialize, Serialize};
use std::fmt;
use sutra_collections::Sequence;

/// One edge triple
///
/// `start` and `end` are signed so the [`NO_VERTEX`] sentinel fits in a
/// predecessor slot; real vertex indices are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeNode {
    /// Start vertex index, or [`NO_VERTEX`]
    pub start: i64,
    /// End vertex index
    pub end: i64,
    /// Edge weight; `f64::INFINITY` marks an unreached table entry
    pub weight: f64,
}

impl EdgeNode {
    /// Create an edge triple
    pub fn new(start: i64, end: i64, weight: f64) -> Self {
        EdgeNode { start, end, weight }
    }

    /// True when this table entry has no predecessor
    pub fn is_unreached(&self) -> bool {
        self.start == NO_VERTEX
    }
}

/// Graph as a flat edge collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeListGraph {
    directed: bool,
    vertex_count: usize,
    edges: Sequence<EdgeNode>,
}

impl EdgeListGraph {
    /// Create an empty edge list
    pub fn new(directed: bool) -> Self {
        EdgeListGraph {
            directed,
            vertex_count: 0,
            edges: Sequence::new(),
        }
    }

    /// Create an empty edge list that already spans `vertex_count` vertices
    pub fn with_vertices(directed: bool, vertex_count: usize) -> Self {
        EdgeListGraph {
            directed,
            vertex_count,
            edges: Sequence::new(),
        }
    }

    /// Build the initial distance/predecessor table over `vertex_count`
    /// vertices
    ///
    /// Entry `i` is `(NO_VERTEX, i, INFINITY)`; the source entry, when
    /// given, starts at distance 0. Path algorithms overwrite entries as
    /// they discover better edges.
    pub fn distance_table(source: Option<usize>, vertex_count: usize) -> Self {
        let mut table = EdgeListGraph::with_vertices(true, vertex_count);
        for i in 0..vertex_count {
            table
                .edges
                .push_back(EdgeNode::new(NO_VERTEX, i as i64, f64::INFINITY));
        }
        if let Some(src) = source {
            if let Some(entry) = table.edges.get_mut(src) {
                entry.weight = 0.0;
            }
        }
        table
    }

    /// True for a digraph
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices spanned
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edge triples
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge triples
    pub fn edges(&self) -> &Sequence<EdgeNode> {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut Sequence<EdgeNode> {
        &mut self.edges
    }

    /// Edge triple at `index`
    pub fn edge(&self, index: usize) -> Option<&EdgeNode> {
        self.edges.get(index)
    }

    /// Append an edge, growing the vertex count to cover both endpoints
    pub fn add_edge(&mut self, start: usize, end: usize, weight: f64) {
        self.vertex_count = self.vertex_count.max(start + 1).max(end + 1);
        self.edges
            .push_back(EdgeNode::new(start as i64, end as i64, weight));
    }

    /// Append a raw triple without touching the vertex count
    ///
    /// For sentinel-bearing table entries; regular edges go through
    /// [`add_edge`](Self::add_edge).
    pub fn push_node(&mut self, node: EdgeNode) {
        self.edges.push_back(node);
    }

    /// Overwrite the triple at `index`
    pub fn set_edge(&mut self, index: usize, node: EdgeNode) -> bool {
        self.edges.set(index, node).is_ok()
    }

    /// Drop all edges and vertices
    pub fn clear(&mut self) {
        self.edges.clear();
        self.vertex_count = 0;
    }

    /// Sum of the reached entries' weights
    ///
    /// On a distance table filled by a spanning-tree search this is the
    /// total tree weight; sentinel entries contribute nothing.
    pub fn tree_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter(|edge| !edge.is_unreached())
            .map(|edge| edge.weight)
            .sum()
    }
}

impl fmt::Display for EdgeListGraph {
    /// One tab-separated triple per line: `start\tend\tweight`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges.iter() {
            writeln!(f, "{}\t{}\t{:.2}", edge.start, edge.end, edge.weight)?;
        }
        Ok(())
    }
}
