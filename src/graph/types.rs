//! Shared type definitions for the graph structures

use serde::{Deserialize, Serialize};

/// Sentinel vertex value
///
/// Marks "no predecessor / unreached" in distance tables and separates
/// groups in component and pass sequences.
pub const NO_VERTEX: i64 = -1;

/// Traversal state of a vertex
///
/// The DFS family drives the full three-state machine:
/// `Unvisited -> InProgress -> Done`. A vertex is `InProgress` (grey) while
/// it sits on the active recursion path, which is what the cycle and
/// back-edge checks key on, and `Done` (black) once its whole subtree has
/// been explored. BFS, Dijkstra, and Prim only distinguish `Unvisited` from
/// `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VertexState {
    /// Not yet reached by the current traversal
    #[default]
    Unvisited,
    /// On the active traversal frontier (grey)
    InProgress,
    /// Fully explored (black)
    Done,
}

impl VertexState {
    /// True for [`VertexState::Unvisited`]
    pub fn is_unvisited(self) -> bool {
        self == VertexState::Unvisited
    }

    /// True for [`VertexState::InProgress`]
    pub fn is_in_progress(self) -> bool {
        self == VertexState::InProgress
    }

    /// True for [`VertexState::Done`]
    pub fn is_done(self) -> bool {
        self == VertexState::Done
    }
}
