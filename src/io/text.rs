//! Line-oriented graph text format
//!
//! ```text
//! 8 directed
//! 0	1	12.0
//! 1	3	9.0
//! 1	2	15.0
//! ```
//!
//! The header gives the vertex count and directedness; every following
//! non-blank line is one edge. Reading stops at end of input. Every
//! diagnostic carries the 1-based line number of the offending line.

use crate::graph::{AdjacencyGraph, EdgeListGraph};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors from the line-format readers
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: missing `<vertexCount> <directed|undirected>` header")]
    MissingHeader { line: usize },

    #[error("line {line}: unknown graph kind `{token}`")]
    UnknownKind { line: usize, token: String },

    #[error("line {line}: malformed edge `{text}`")]
    MalformedEdge { line: usize, text: String },

    #[error("line {line}: vertex index {index} out of range for {count} vertices")]
    VertexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
}

/// Read the line format into an edge list
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeListGraph, ReadError> {
    let mut lines = reader.lines();
    let mut line_number = 0;

    // header: first non-blank line
    let (count, directed) = loop {
        let Some(line) = lines.next() else {
            return Err(ReadError::MissingHeader {
                line: line_number + 1,
            });
        };
        let line = line?;
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let count = fields
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or(ReadError::MissingHeader { line: line_number })?;
        let kind = fields
            .next()
            .ok_or(ReadError::MissingHeader { line: line_number })?;
        let directed = match kind {
            "directed" => true,
            "undirected" => false,
            other => {
                return Err(ReadError::UnknownKind {
                    line: line_number,
                    token: other.to_string(),
                })
            }
        };
        break (count, directed);
    };
    debug!(count, directed, "graph header accepted");

    let mut graph = EdgeListGraph::with_vertices(directed, count);
    for line in lines {
        let line = line?;
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let malformed = || ReadError::MalformedEdge {
            line: line_number,
            text: line.trim().to_string(),
        };
        let start = fields
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or_else(malformed)?;
        let end = fields
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or_else(malformed)?;
        let weight = fields
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }

        for index in [start, end] {
            if index < 0 || index as usize >= count {
                return Err(ReadError::VertexOutOfRange {
                    line: line_number,
                    index,
                    count,
                });
            }
        }
        graph.add_edge(start as usize, end as usize, weight);
    }
    Ok(graph)
}

/// Read the line format into an adjacency graph
pub fn read_adjacency<R: BufRead>(reader: R) -> Result<AdjacencyGraph, ReadError> {
    let list = read_edge_list(reader)?;
    Ok(AdjacencyGraph::from_edge_list(&list))
}

/// Write an edge list in the line format
pub fn write_edge_list<W: Write>(writer: &mut W, graph: &EdgeListGraph) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        graph.vertex_count(),
        if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        }
    )?;
    for edge in graph.edges().iter() {
        writeln!(writer, "{}\t{}\t{}", edge.start, edge.end, edge.weight)?;
    }
    Ok(())
}

/// Write an adjacency graph in the line format
///
/// Undirected graphs emit each reciprocal record pair as one line, so the
/// output reads back into the same graph.
pub fn write_adjacency<W: Write>(writer: &mut W, graph: &AdjacencyGraph) -> io::Result<()> {
    write_edge_list(writer, &graph.to_edge_list())
}
