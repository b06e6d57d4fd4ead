//! Single-source shortest paths
//!
//! Dijkstra shares Prim's scaffolding; the only algorithmic difference is
//! the relaxation, which compares the accumulated path weight
//! (`distance[start] + weight`) instead of the raw edge weight. Both
//! variants assume non-negative weights and do not detect violations.
//!
//! Bellman-Ford handles negative weights. The adjacency form keeps a FIFO
//! queue of vertices whose distance changed in the previous pass (only
//! their outgoing edges can improve anything), with a
//! [`NO_VERTEX`](crate::graph::NO_VERTEX) sentinel marking the end of each
//! pass. After `n` passes the queue can legitimately hold nothing but the
//! trailing sentinel; anything else is a negative-weight cycle reachable
//! from the source. The edge-list form is the classic `n - 1` full
//! relaxation passes plus one detection pass.

use super::{check_vertex, weight_order, AlgoError, AlgoResult};
use crate::graph::{AdjacencyGraph, EdgeListGraph, VertexState, NO_VERTEX};
use sutra_collections::{IndexedHeap, Sequence};
use tracing::{debug, trace};

/// Relax the edge `start -> end`: accept `distance[start] + weight` if it
/// beats the recorded distance of `end`
pub(crate) fn relax(table: &mut EdgeListGraph, start: usize, end: usize, weight: f64) -> bool {
    let through = table.edges()[start].weight + weight;
    let entry = &mut table.edges_mut()[end];
    if entry.weight > through {
        entry.start = start as i64;
        entry.weight = through;
        true
    } else {
        false
    }
}

/// Dijkstra's algorithm, picking each next vertex by scanning the table
///
/// Entry `i` of the returned table holds the shortest distance from
/// `source` to `i` and the predecessor on that path; unreachable vertices
/// keep the sentinel entry.
pub fn dijkstra_linear_search(
    graph: &mut AdjacencyGraph,
    source: usize,
) -> AlgoResult<EdgeListGraph> {
    check_vertex(graph, source)?;
    let n = graph.vertex_count();
    graph.reset_vertices();

    let mut table = EdgeListGraph::distance_table(Some(source), n);
    let mut start = source;

    for _ in 1..n {
        for e in 0..graph.degree(start) {
            let record = graph.edge_at(start, e);
            relax(&mut table, start, record.neighbor, record.weight);
        }
        graph.set_state(start, VertexState::Done);
        trace!(vertex = start, "settled");

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
    Ok(table)
}

/// Dijkstra's algorithm, picking each next vertex with an indexed heap
///
/// The heap orders the distance table's own entries; every successful
/// relaxation is followed by an `update` on the improved vertex's key.
pub fn dijkstra_priority_queue(
    graph: &mut AdjacencyGraph,
    source: usize,
) -> AlgoResult<EdgeListGraph> {
    check_vertex(graph, source)?;
    let n = graph.vertex_count();
    graph.reset_vertices();

    let mut table = EdgeListGraph::distance_table(Some(source), n);
    let mut heap = IndexedHeap::from_keys(table.edges().as_slice(), weight_order);

    for _ in 1..n {
        let Ok(start) = heap.pop(table.edges().as_slice()) else {
            break;
        };
        for e in 0..graph.degree(start) {
            let record = graph.edge_at(start, e);
            if relax(&mut table, start, record.neighbor, record.weight) {
                trace!(vertex = record.neighbor, "distance improved");
                heap.update(table.edges().as_slice(), record.neighbor);
            }
        }
        trace!(vertex = start, "settled");
    }
    Ok(table)
}

/// Dijkstra's algorithm (the indexed-heap variant)
pub fn dijkstra(graph: &mut AdjacencyGraph, source: usize) -> AlgoResult<EdgeListGraph> {
    dijkstra_priority_queue(graph, source)
}

/// Bellman-Ford over an adjacency graph, queue-driven
///
/// Fails with [`AlgoError::NegativeCycle`] when a negative-weight cycle is
/// reachable from `source`; the error carries the distance table as
/// computed up to the point of detection. Vertex state doubles as the
/// "currently queued" flag, so no vertex sits in the queue twice.
pub fn bellman_ford(graph: &mut AdjacencyGraph, source: usize) -> AlgoResult<EdgeListGraph> {
    check_vertex(graph, source)?;
    let n = graph.vertex_count();
    graph.reset_vertices();

    let mut table = EdgeListGraph::distance_table(Some(source), n);
    graph.set_state(source, VertexState::Done);

    let mut queue: Sequence<i64> = Sequence::new();
    queue.push_back(source as i64);
    queue.push_back(NO_VERTEX);

    let mut pass = 0;
    while !queue.is_empty() && pass < n {
        let Some(front) = queue.pop_front() else {
            break;
        };
        if front == NO_VERTEX {
            pass += 1;
            debug!(pass, "relaxation pass finished");
            queue.push_back(NO_VERTEX);
            continue;
        }

        let start = front as usize;
        graph.set_state(start, VertexState::Unvisited);

        for e in 0..graph.degree(start) {
            let record = graph.edge_at(start, e);
            if relax(&mut table, start, record.neighbor, record.weight)
                && graph.state(record.neighbor).is_unvisited()
            {
                graph.set_state(record.neighbor, VertexState::Done);
                queue.push_back(record.neighbor as i64);
            }
        }
    }

    // a clean run leaves exactly the trailing pass sentinel behind
    if queue.len() != 1 {
        return Err(AlgoError::NegativeCycle { origin: source, table });
    }
    Ok(table)
}

/// Bellman-Ford over an edge list: `n - 1` full relaxation passes, then one
/// detection pass
///
/// Entries with a negative endpoint (sentinel table rows) are skipped;
/// non-negative indices outside the vertex range are an error.
pub fn bellman_ford_edge_list(graph: &EdgeListGraph, source: usize) -> AlgoResult<EdgeListGraph> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(AlgoError::VertexOutOfRange {
            index: source,
            len: n,
        });
    }
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

    let mut table = EdgeListGraph::distance_table(Some(source), n);

    for _ in 1..n {
        for index in 0..graph.edge_count() {
            let edge = graph.edges()[index];
            if edge.start < 0 || edge.end < 0 {
                continue;
            }
            relax(&mut table, edge.start as usize, edge.end as usize, edge.weight);
        }
    }

    for edge in graph.edges().iter() {
        if edge.start < 0 || edge.end < 0 {
            continue;
        }
        let through = table.edges()[edge.start as usize].weight + edge.weight;
        if table.edges()[edge.end as usize].weight > through {
            return Err(AlgoError::NegativeCycle { origin: source, table });
        }
    }
    Ok(table)
}
