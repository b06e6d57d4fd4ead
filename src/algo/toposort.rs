//! Topological sort by depth-first postorder
//!
//! Each vertex is pushed to the *front* of the result once its whole
//! subtree is finished, so every edge `(u, v)` ends with `u` before `v`.
//! Meeting a grey vertex means the active recursion path closed on itself;
//! the whole sort fails.

use super::{AlgoError, AlgoResult};
use crate::graph::{AdjacencyGraph, VertexState};
use sutra_collections::Sequence;

fn sort_visit(
    graph: &mut AdjacencyGraph,
    vertex: usize,
    order: &mut Sequence<i64>,
) -> AlgoResult<()> {
    graph.set_state(vertex, VertexState::InProgress);

    for e in 0..graph.degree(vertex) {
        let record = graph.edge_at(vertex, e);
        match graph.state(record.neighbor) {
            VertexState::Unvisited => sort_visit(graph, record.neighbor, order)?,
            VertexState::InProgress => return Err(AlgoError::CycleDetected),
            VertexState::Done => {}
        }
    }

    order.push_front(vertex as i64);
    graph.set_state(vertex, VertexState::Done);
    Ok(())
}

/// Topological order of a digraph
///
/// Fails with [`AlgoError::CycleDetected`] when the graph contains a
/// directed cycle; no partial order is returned in that case.
pub fn topological_sort(graph: &mut AdjacencyGraph) -> AlgoResult<Sequence<i64>> {
    graph.reset_vertices();

    let mut order = Sequence::new();
    for vertex in 0..graph.vertex_count() {
        if graph.state(vertex).is_unvisited() {
            sort_visit(graph, vertex, &mut order)?;
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &Sequence<i64>, vertex: i64) -> usize {
        order
            .iter()
            .position(|&v| v == vertex)
            .unwrap_or_else(|| panic!("vertex {vertex} missing from order"))
    }

    #[test]
    fn test_every_edge_respects_order() {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..6 {
            graph.add_vertex();
        }
        let edges = [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)];
        for (u, v) in edges {
            graph.add_edge(u, v, 1.0);
        }

        let order = topological_sort(&mut graph).unwrap();
        assert_eq!(order.len(), 6);
        for (u, v) in edges {
            assert!(
                position(&order, u as i64) < position(&order, v as i64),
                "edge ({u}, {v}) out of order"
            );
        }
    }

    #[test]
    fn test_cycle_fails() {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..3 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 0, 1.0);

        assert!(matches!(
            topological_sort(&mut graph),
            Err(AlgoError::CycleDetected)
        ));
    }

    #[test]
    fn test_cycle_deep_in_recursion_fails() {
        // the cycle sits two levels below the sweep root, so the failure
        // must propagate up through the recursion
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..5 {
            graph.add_vertex();
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.add_edge(3, 4, 1.0);
        graph.add_edge(4, 2, 1.0);

        assert!(matches!(
            topological_sort(&mut graph),
            Err(AlgoError::CycleDetected)
        ));
    }

    #[test]
    fn test_self_loop_fails() {
        let mut graph = AdjacencyGraph::new(true);
        graph.add_vertex();
        graph.add_edge(0, 0, 1.0);
        assert!(topological_sort(&mut graph).is_err());
    }

    #[test]
    fn test_edgeless_graph_sorts() {
        let mut graph = AdjacencyGraph::new(true);
        for _ in 0..3 {
            graph.add_vertex();
        }
        let order = topological_sort(&mut graph).unwrap();
        assert_eq!(order.len(), 3);
    }
}
