//! Adjacency-list graph
//!
//! A vector of vertices, each owning a sequence of outgoing edge records.
//! This is the structure all traversal and search algorithms walk; the
//! per-vertex traversal state lives in the vertices themselves and must be
//! cleared with [`AdjacencyGraph::reset_vertices`] before each independent
//! traversal (the algorithm entry points do this).

use super::edgelist::EdgeListGraph;
use super::types::VertexState;
use super::vertex::{EdgeRecord, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt;
use sutra_collections::Sequence;
use tracing::warn;

/// Graph as a vector of vertices with owned edge lists
///
/// The directedness flag is fixed at construction; edge insertion depends
/// on it. For an undirected graph every `add_edge(i, j, w)` materializes
/// the reciprocal pair of records `i -> j` and `j -> i`, and
/// [`remove_edge`](Self::remove_edge) detaches both, so the symmetry
/// invariant "a record `i -> j` exists iff a record `j -> i` exists" holds
/// after any sequence of mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    directed: bool,
    vertices: Sequence<Vertex>,
}

impl AdjacencyGraph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            vertices: Sequence::new(),
        }
    }

    /// True for a digraph
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True when the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex, returning its index
    pub fn add_vertex(&mut self) -> usize {
        let id = self.vertices.len();
        self.vertices.push_back(Vertex::new(id));
        id
    }

    /// Vertex at `index`
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Insert an edge of the given weight
    ///
    /// One record `i -> j` for a digraph, the reciprocal pair for an
    /// undirected graph. A no-op when either endpoint is out of range;
    /// growing the graph to fit unseen indices is the caller's job.
    pub fn add_edge(&mut self, i: usize, j: usize, weight: f64) {
        let len = self.vertices.len();
        if i >= len || j >= len {
            warn!(i, j, vertices = len, "edge endpoint out of range, ignoring");
            return;
        }
        self.vertices[i].edges_mut().push_back(EdgeRecord::new(j, weight));
        if !self.directed {
            self.vertices[j].edges_mut().push_back(EdgeRecord::new(i, weight));
        }
    }

    /// First edge record `i -> j`, found by scanning `i`'s list
    pub fn edge(&self, i: usize, j: usize) -> Option<&EdgeRecord> {
        self.vertices
            .get(i)?
            .edges()
            .iter()
            .find(|record| record.neighbor == j)
    }

    /// True when a record `i -> j` exists
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.edge(i, j).is_some()
    }

    /// Weight of the first edge `i -> j`
    pub fn edge_weight(&self, i: usize, j: usize) -> Option<f64> {
        self.edge(i, j).map(|record| record.weight)
    }

    /// Remove one edge
    ///
    /// Detaches the first record `i -> j`; on an undirected graph the
    /// reciprocal record `j -> i` is removed in the same operation, keeping
    /// the adjacency symmetric. Returns whether anything was removed.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> bool {
        let removed = self.remove_record(i, j);
        if removed && !self.directed {
            self.remove_record(j, i);
        }
        removed
    }

    fn remove_record(&mut self, i: usize, j: usize) -> bool {
        let Some(vertex) = self.vertices.get_mut(i) else {
            return false;
        };
        let position = vertex
            .edges()
            .iter()
            .position(|record| record.neighbor == j);
        match position {
            Some(at) => vertex.edges_mut().remove(at, at).is_ok(),
            None => false,
        }
    }

    /// Number of outgoing records of vertex `i` (0 when out of range)
    pub fn degree(&self, i: usize) -> usize {
        self.vertices.get(i).map_or(0, Vertex::degree)
    }

    /// Copy of the `e`-th outgoing record of vertex `i`
    ///
    /// Panics if `i` or `e` is out of range; the traversal loops call this
    /// with indices they just ranged over.
    pub(crate) fn edge_at(&self, i: usize, e: usize) -> EdgeRecord {
        self.vertices[i].edges()[e]
    }

    /// Iterate over the outgoing records of vertex `i`
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = &EdgeRecord> {
        self.vertices
            .get(i)
            .into_iter()
            .flat_map(|vertex| vertex.edges().iter())
    }

    /// Traversal state of vertex `i`
    pub(crate) fn state(&self, i: usize) -> VertexState {
        self.vertices[i].state()
    }

    pub(crate) fn set_state(&mut self, i: usize, state: VertexState) {
        self.vertices[i].set_state(state);
    }

    /// Return every vertex to [`VertexState::Unvisited`]
    ///
    /// Call before each independent traversal; the algorithm entry points
    /// in [`crate::algo`] do so themselves.
    pub fn reset_vertices(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_state(VertexState::Unvisited);
        }
    }

    /// Clear the algorithm-local mark on every edge record
    pub fn reset_edges(&mut self) {
        for vertex in self.vertices.iter_mut() {
            for record in vertex.edges_mut().iter_mut() {
                record.marked = false;
            }
        }
    }

    /// The same vertices with every edge direction flipped
    pub fn reverse(&self) -> AdjacencyGraph {
        let mut reversed = AdjacencyGraph::new(self.directed);
        for _ in 0..self.vertex_count() {
            reversed.add_vertex();
        }
        for vertex in self.vertices.iter() {
            for record in vertex.edges().iter() {
                reversed.add_edge(record.neighbor, vertex.id(), record.weight);
            }
        }
        reversed
    }

    /// Build an adjacency graph from an edge list
    ///
    /// Creates `src.vertex_count()` vertices and inserts every non-sentinel
    /// entry, so a distance table converts into the tree it describes.
    pub fn from_edge_list(src: &EdgeListGraph) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(src.is_directed());
        for _ in 0..src.vertex_count() {
            graph.add_vertex();
        }
        for edge in src.edges().iter() {
            if edge.start >= 0 && edge.end >= 0 {
                graph.add_edge(edge.start as usize, edge.end as usize, edge.weight);
            }
        }
        graph
    }

    /// Flatten into an edge list
    ///
    /// A digraph contributes every record. An undirected graph contributes
    /// each reciprocal pair once (as `i -> j` with `i <= j`); self-loop
    /// pairs are halved the same way.
    pub fn to_edge_list(&self) -> EdgeListGraph {
        let mut list = EdgeListGraph::with_vertices(self.directed, self.vertex_count());
        for vertex in self.vertices.iter() {
            let mut loop_toggle = false;
            for record in vertex.edges().iter() {
                let keep = if self.directed {
                    true
                } else if record.neighbor == vertex.id() {
                    // every second record of a doubled self-loop
                    loop_toggle = !loop_toggle;
                    loop_toggle
                } else {
                    vertex.id() < record.neighbor
                };
                if keep {
                    list.add_edge(vertex.id(), record.neighbor, record.weight);
                }
            }
        }
        list
    }
}

impl fmt::Display for AdjacencyGraph {
    /// Adjacency-list rendering, one vertex per line:
    /// `v0 : -- [v1 , 2.00] -- [v3 , 0.50]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.iter() {
            write!(f, "v{:<2}:", vertex.id())?;
            for record in vertex.edges().iter() {
                write!(f, " -- [v{:<2}, {:.2}]", record.neighbor, record.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..4 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 2, 5.0);
        graph.add_edge(1, 2, 2.0);
        graph.add_edge(2, 3, 1.0);
        graph
    }

    #[test]
    fn test_add_vertex_assigns_contiguous_ids() {
        let mut graph = AdjacencyGraph::new(false);
        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertex(2).unwrap().id(), 2);
        assert!(graph.vertex(3).is_none());
    }

    #[test]
    fn test_directed_edge_is_one_record() {
        let graph = diamond();
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.edge_weight(0, 2), Some(5.0));
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(3), 0);
    }

    #[test]
    fn test_undirected_edge_is_reciprocal_pair() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..3 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(1, 2, 2.0);

        for (i, j) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert!(graph.has_edge(i, j), "missing record {i} -> {j}");
        }
        assert_eq!(graph.edge_weight(1, 0), Some(4.0));
    }

    #[test]
    fn test_add_edge_out_of_range_is_ignored() {
        let mut graph = AdjacencyGraph::new(true);
        graph.add_vertex();
        graph.add_edge(0, 5, 1.0);
        graph.add_edge(5, 0, 1.0);
        assert_eq!(graph.degree(0), 0);
    }

    #[test]
    fn test_remove_edge_removes_pair_on_undirected() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..3 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 2, 2.0);

        assert!(graph.remove_edge(1, 0));
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));

        assert!(!graph.remove_edge(0, 1));
    }

    #[test]
    fn test_remove_edge_directed_leaves_reverse() {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..2 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 0, 9.0);

        assert!(graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
    }

    #[test]
    fn test_adjacency_symmetry_after_mutations() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..5 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.add_edge(3, 4, 1.0);
        graph.add_edge(4, 0, 1.0);
        graph.remove_edge(2, 3);
        graph.remove_edge(0, 4);
        graph.add_edge(2, 4, 7.0);

        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(
                    graph.has_edge(i, j),
                    graph.has_edge(j, i),
                    "asymmetry between {i} and {j}"
                );
            }
        }
    }

    #[test]
    fn test_reset_vertices() {
        let mut graph = diamond();
        graph.set_state(1, VertexState::Done);
        graph.set_state(2, VertexState::InProgress);
        graph.reset_vertices();
        for i in 0..4 {
            assert_eq!(graph.state(i), VertexState::Unvisited);
        }
    }

    #[test]
    fn test_reset_edges_clears_marks() {
        let mut graph = diamond();
        for vertex in graph.vertices.iter_mut() {
            for record in vertex.edges_mut().iter_mut() {
                record.marked = true;
            }
        }
        graph.reset_edges();
        for i in 0..4 {
            assert!(graph.neighbors(i).all(|record| !record.marked));
        }
    }

    #[test]
    fn test_reverse_flips_directions() {
        let graph = diamond();
        let reversed = graph.reverse();
        assert_eq!(reversed.vertex_count(), 4);
        assert!(reversed.has_edge(1, 0));
        assert!(reversed.has_edge(2, 1));
        assert!(reversed.has_edge(3, 2));
        assert!(!reversed.has_edge(0, 1));
        assert_eq!(reversed.edge_weight(2, 0), Some(5.0));
    }

    #[test]
    fn test_edge_list_round_trip() {
        let graph = diamond();
        let list = graph.to_edge_list();
        assert_eq!(list.edge_count(), 4);
        let back = AdjacencyGraph::from_edge_list(&list);
        assert_eq!(back.vertex_count(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(back.has_edge(i, j), graph.has_edge(i, j));
            }
        }
    }

    #[test]
    fn test_undirected_to_edge_list_keeps_each_pair_once() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..3 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 2.0);
        graph.add_edge(2, 2, 3.0);

        let list = graph.to_edge_list();
        assert_eq!(list.edge_count(), 3);

        let back = AdjacencyGraph::from_edge_list(&list);
        assert_eq!(back.degree(2), graph.degree(2));
    }

    #[test]
    fn test_display_lists_records() {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..2 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 2.0);
        let text = graph.to_string();
        assert!(text.contains("v0"));
        assert!(text.contains("[v1 , 2.00]"));
    }
}
