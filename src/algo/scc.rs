//! Strongly connected components
//!
//! Two independent algorithms over the same digraph:
//!
//! - Kosaraju: depth-first postorder of the *reverse* graph, then
//!   depth-first sweeps over the original graph in reverse postorder; each
//!   sweep's visited set is one component.
//! - Tarjan: a single depth-first pass tracking discovery order and
//!   low-link per vertex plus an explicit stack of the active frontier; a
//!   vertex whose low-link equals its own discovery order roots a component
//!   and pops the stack down to itself.
//!
//! Both append component members to the output with a trailing
//! [`NO_VERTEX`](crate::graph::NO_VERTEX) separator and must agree on the
//! component count and partition for any digraph.

use super::traversal::dfs_order_visit;
use super::Components;
use crate::graph::{AdjacencyGraph, VertexState, NO_VERTEX};
use sutra_collections::Sequence;
use tracing::trace;

/// Kosaraju's two-pass strongly-connected-components algorithm
pub fn kosaraju_scc(graph: &mut AdjacencyGraph) -> Components {
    let n = graph.vertex_count();

    let mut reversed = graph.reverse();
    let mut scratch = Sequence::new();
    let mut postorder = Sequence::new();

    reversed.reset_vertices();
    for vertex in 0..n {
        if reversed.state(vertex).is_unvisited() {
            dfs_order_visit(&mut reversed, vertex, &mut scratch, &mut postorder);
        }
    }

    graph.reset_vertices();
    let mut vertices = Sequence::new();
    let mut finish_scratch = Sequence::new();
    let mut count = 0;

    for index in (0..n).rev() {
        let start = postorder[index] as usize;
        if graph.state(start).is_unvisited() {
            count += 1;
            trace!(component = count, root = start, "sweeping component");
            dfs_order_visit(graph, start, &mut vertices, &mut finish_scratch);
            vertices.push_back(NO_VERTEX);
        }
    }
    Components { count, vertices }
}

/// Bookkeeping for Tarjan's single-pass algorithm
///
/// `order[v]` is the discovery number (from 1, -1 while undiscovered);
/// `link[v]` is the smallest discovery number reachable from `v` through
/// tree edges and at most one back edge.
struct TarjanState {
    number: i64,
    count: usize,
    order: Sequence<i64>,
    link: Sequence<i64>,
    stack: Sequence<usize>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        let mut order = Sequence::new();
        order.resize(n, -1);
        let mut link = Sequence::new();
        link.resize(n, -1);
        TarjanState {
            number: 0,
            count: 0,
            order,
            link,
            stack: Sequence::new(),
        }
    }
}

fn tarjan_visit(
    graph: &mut AdjacencyGraph,
    vertex: usize,
    state: &mut TarjanState,
    components: &mut Sequence<i64>,
) {
    state.number += 1;
    state.order[vertex] = state.number;
    state.link[vertex] = state.number;

    graph.set_state(vertex, VertexState::InProgress);
    state.stack.push_back(vertex);

    for e in 0..graph.degree(vertex) {
        let neighbor = graph.edge_at(vertex, e).neighbor;
        match graph.state(neighbor) {
            VertexState::Unvisited => {
                tarjan_visit(graph, neighbor, state, components);
                state.link[vertex] = state.link[vertex].min(state.link[neighbor]);
            }
            VertexState::InProgress => {
                // back edge into the active frontier
                state.link[vertex] = state.link[vertex].min(state.order[neighbor]);
            }
            VertexState::Done => {}
        }
    }

    if state.link[vertex] == state.order[vertex] {
        state.count += 1;
        trace!(component = state.count, root = vertex, "popping component");
        while let Some(member) = state.stack.pop_back() {
            components.push_back(member as i64);
            graph.set_state(member, VertexState::Done);
            if member == vertex {
                break;
            }
        }
        components.push_back(NO_VERTEX);
    }
}

/// Tarjan's single-pass strongly-connected-components algorithm
pub fn tarjan_scc(graph: &mut AdjacencyGraph) -> Components {
    let n = graph.vertex_count();
    let mut state = TarjanState::new(n);

    graph.reset_vertices();
    let mut vertices = Sequence::new();
    for vertex in 0..n {
        if graph.state(vertex).is_unvisited() {
            tarjan_visit(graph, vertex, &mut state, &mut vertices);
        }
    }
    Components {
        count: state.count,
        vertices,
    }
}
