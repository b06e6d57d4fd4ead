//! Minimum spanning tree
//!
//! Prim's algorithm in two variants sharing the same scaffolding: maintain
//! a distance table of the cheapest known edge into each unattached vertex,
//! repeatedly attach the unattached vertex with the cheapest entry, and
//! relax its neighbors' entries. The linear-scan variant rescans the table
//! for each pick (O(V) per pick); the priority-queue variant binds an
//! [`IndexedHeap`] to the table's entries and picks with `pop`, repairing
//! order with `update` after each improvement. Both start implicitly at
//! vertex 0 and yield trees of identical total weight, though tied weights
//! may select different edge sets.
//!
//! Kruskal's algorithm works on an edge list instead: sort all edges by
//! weight, then greedily accept any edge joining two different union-find
//! sets.

use super::{weight_order, AlgoError, AlgoResult};
use crate::graph::{AdjacencyGraph, EdgeListGraph, VertexState};
use sutra_collections::{DisjointSet, IndexedHeap};
use tracing::trace;

/// Record `weight` as the cheapest edge into `end` if it strictly improves
/// the table entry
pub(crate) fn min_dist(table: &mut EdgeListGraph, start: usize, end: usize, weight: f64) -> bool {
    let entry = &mut table.edges_mut()[end];
    if entry.weight > weight {
        entry.start = start as i64;
        entry.weight = weight;
        true
    } else {
        false
    }
}

/// Prim's algorithm, picking each next vertex by scanning the table
///
/// The returned table is the tree: entry `i` is the tree edge into vertex
/// `i`, with the start vertex (and any vertex outside the start's
/// component) keeping the sentinel entry.
pub fn prim_linear_search(graph: &mut AdjacencyGraph) -> EdgeListGraph {
    let n = graph.vertex_count();
    graph.reset_vertices();

    let mut table = EdgeListGraph::distance_table(None, n);
    if n == 0 {
        return table;
    }

    let mut start = 0usize;
    for _ in 1..n {
        for e in 0..graph.degree(start) {
            let record = graph.edge_at(start, e);
            if graph.state(record.neighbor).is_unvisited() {
                min_dist(&mut table, start, record.neighbor, record.weight);
            }
        }
        graph.set_state(start, VertexState::Done);
        trace!(vertex = start, "attached to tree");

        // cheapest unattached entry wins the next round
        let mut best = f64::INFINITY;
        let mut next = None;
        for candidate in 0..n {
            let weight = table.edges()[candidate].weight;
            if graph.state(candidate).is_unvisited() && weight < best {
                best = weight;
                next = Some(candidate);
            }
        }
        match next {
            Some(vertex) => start = vertex,
            None => break,
        }
    }
    table
}

/// Prim's algorithm, picking each next vertex with an indexed heap
///
/// The heap is built over the distance table's own entries; improving an
/// entry is followed by an `update` on that vertex's key, which is what
/// keeps each pick O(log V).
pub fn prim_priority_queue(graph: &mut AdjacencyGraph) -> EdgeListGraph {
    let n = graph.vertex_count();
    graph.reset_vertices();

    let mut table = EdgeListGraph::distance_table(None, n);
    if n == 0 {
        return table;
    }

    let mut heap = IndexedHeap::from_keys(table.edges().as_slice(), weight_order);

    for _ in 1..n {
        let Ok(start) = heap.pop(table.edges().as_slice()) else {
            break;
        };
        for e in 0..graph.degree(start) {
            let record = graph.edge_at(start, e);
            if graph.state(record.neighbor).is_done() {
                continue;
            }
            if min_dist(&mut table, start, record.neighbor, record.weight) {
                trace!(vertex = record.neighbor, "entry improved");
                heap.update(table.edges().as_slice(), record.neighbor);
            }
        }
        graph.set_state(start, VertexState::Done);
        trace!(vertex = start, "attached to tree");
    }
    table
}

/// Prim's algorithm (the indexed-heap variant)
pub fn prim(graph: &mut AdjacencyGraph) -> EdgeListGraph {
    prim_priority_queue(graph)
}

/// Kruskal's algorithm over an edge list
///
/// Sorts the edges by weight **in place**, then accepts edges greedily
/// whenever they join two different components, stopping after
/// `vertex_count - 1` acceptances. Entries with a negative endpoint
/// (sentinel table rows) are skipped; non-negative indices outside the
/// vertex range are an error.
pub fn kruskal_mst(graph: &mut EdgeListGraph) -> AlgoResult<EdgeListGraph> {
    let n = graph.vertex_count();
    for edge in graph.edges().iter() {
        for endpoint in [edge.start, edge.end] {
            if endpoint >= 0 && endpoint as usize >= n {
                return Err(AlgoError::VertexOutOfRange {
                    index: endpoint as usize,
                    len: n,
                });
            }
        }
    }

    let mut set = DisjointSet::new(n);
    graph.edges_mut().quicksort(weight_order);

    let mut mst = EdgeListGraph::with_vertices(graph.is_directed(), n);
    let mut accepted = 0;
    for index in 0..graph.edge_count() {
        if n > 0 && accepted >= n - 1 {
            break;
        }
        let edge = graph.edges()[index];
        if edge.start < 0 || edge.end < 0 {
            continue;
        }
        let (u, v) = (edge.start as usize, edge.end as usize);
        if set.find(u) != set.find(v) {
            set.union_sets(u, v);
            mst.push_node(edge);
            accepted += 1;
        }
    }
    Ok(mst)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected: (0,1,4) (0,2,1) (1,2,2) (1,3,5) (2,3,8); MST weight 8.
    fn weighted_square() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..4 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(1, 2, 2.0);
        graph.add_edge(1, 3, 5.0);
        graph.add_edge(2, 3, 8.0);
        graph
    }

    #[test]
    fn test_prim_linear_total_weight() {
        let mut graph = weighted_square();
        let tree = prim_linear_search(&mut graph);
        assert_eq!(tree.tree_weight(), 8.0);
    }

    #[test]
    fn test_prim_heap_total_weight() {
        let mut graph = weighted_square();
        let tree = prim_priority_queue(&mut graph);
        assert_eq!(tree.tree_weight(), 8.0);
    }

    #[test]
    fn test_prim_variants_agree() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..7 {
            graph.add_vertex();
        }
        let edges = [
            (0, 1, 7.0),
            (0, 3, 5.0),
            (1, 2, 8.0),
            (1, 3, 9.0),
            (1, 4, 7.0),
            (2, 4, 5.0),
            (3, 4, 15.0),
            (3, 5, 6.0),
            (4, 5, 8.0),
            (4, 6, 9.0),
            (5, 6, 11.0),
        ];
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }

        let linear = prim_linear_search(&mut graph);
        let heap = prim_priority_queue(&mut graph);
        assert_eq!(linear.tree_weight(), heap.tree_weight());
        assert_eq!(linear.tree_weight(), 39.0);
    }

    #[test]
    fn test_prim_expected_edges() {
        let mut graph = weighted_square();
        let tree = prim(&mut graph);
        // (0,2) (2,1) (1,3) up to direction, or an equal-weight alternative;
        // with these weights the tree is unique
        assert_eq!(tree.edge(2).unwrap().start, 0);
        assert_eq!(tree.edge(1).unwrap().start, 2);
        assert_eq!(tree.edge(3).unwrap().start, 1);
        assert!(tree.edge(0).unwrap().is_unreached());
    }

    #[test]
    fn test_prim_disconnected_graph_spans_start_component() {
        let mut graph = AdjacencyGraph::new(false);
        for _ in 0..4 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 2.0);
        // 2 and 3 unreachable from 0
        graph.add_edge(2, 3, 1.0);

        let tree = prim_linear_search(&mut graph);
        assert!(!tree.edge(1).unwrap().is_unreached());
        assert!(tree.edge(2).unwrap().is_unreached() || tree.edge(3).unwrap().is_unreached());
    }

    #[test]
    fn test_prim_empty_and_single_vertex() {
        let mut empty = AdjacencyGraph::new(false);
        assert_eq!(prim(&mut empty).edge_count(), 0);

        let mut single = AdjacencyGraph::new(false);
        single.add_vertex();
        let tree = prim(&mut single);
        assert_eq!(tree.edge_count(), 1);
        assert!(tree.edge(0).unwrap().is_unreached());
    }

    #[test]
    fn test_kruskal_matches_prim_weight() {
        let mut graph = weighted_square();
        let prim_tree = prim(&mut graph);

        let mut list = graph.to_edge_list();
        let kruskal_tree = kruskal_mst(&mut list).unwrap();
        let kruskal_weight: f64 = kruskal_tree.edges().iter().map(|e| e.weight).sum();
        assert_eq!(kruskal_weight, prim_tree.tree_weight());
        assert_eq!(kruskal_tree.edge_count(), 3);
    }

    #[test]
    fn test_kruskal_rejects_out_of_range() {
        let mut list = EdgeListGraph::with_vertices(false, 2);
        list.push_node(crate::graph::EdgeNode::new(0, 5, 1.0));
        assert!(matches!(
            kruskal_mst(&mut list),
            Err(AlgoError::VertexOutOfRange { index: 5, len: 2 })
        ));
    }
}
