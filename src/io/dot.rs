//! Dot-language subset reader and writer
//!
//! Parses `digraph { 0 -> 1 [ label = "12.0" ] ... }` (or `graph` with
//! `--` edges) into an [`EdgeListGraph`]. The vertex count is the highest
//! index seen plus one, so indices are in range by construction; an edge
//! without a `label` attribute gets weight -1.0. Syntax errors surface the
//! pest diagnostic, which points at the offending line and column.

use crate::graph::EdgeListGraph;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "io/graph.pest"]
struct DotParser;

/// Errors from the dot reader
#[derive(Error, Debug)]
pub enum DotError {
    /// Syntax error with line/column diagnostics
    #[error("syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),

    /// A numeric literal the grammar accepted but the number type cannot hold
    #[error("invalid numeric literal `{text}`")]
    Number { text: String },
}

/// Parse a dot-subset description into an edge list
pub fn parse_dot(input: &str) -> Result<EdgeListGraph, DotError> {
    let pairs = DotParser::parse(Rule::graph_file, input).map_err(Box::new)?;

    let mut graph = EdgeListGraph::new(false);
    for pair in pairs {
        if pair.as_rule() != Rule::graph_file {
            continue;
        }
        for definition in pair.into_inner() {
            match definition.as_rule() {
                Rule::digraph_def | Rule::graph_def => {
                    graph = EdgeListGraph::new(definition.as_rule() == Rule::digraph_def);
                    for edge in definition.into_inner() {
                        match edge.as_rule() {
                            Rule::digraph_edge | Rule::graph_edge => {
                                enter_edge(edge, &mut graph)?;
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
    }
    Ok(graph)
}

fn enter_edge(pair: Pair<'_, Rule>, graph: &mut EdgeListGraph) -> Result<(), DotError> {
    let mut start = None;
    let mut end = None;
    let mut weight = -1.0; // edges without a label attribute

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::integer => {
                let index = parse_number::<usize>(part.as_str())?;
                if start.is_none() {
                    start = Some(index);
                } else {
                    end = Some(index);
                }
            }
            Rule::weight_attr => {
                for inner in part.into_inner() {
                    if inner.as_rule() == Rule::number {
                        weight = parse_number::<f64>(inner.as_str())?;
                    }
                }
            }
            _ => {}
        }
    }

    if let (Some(start), Some(end)) = (start, end) {
        graph.add_edge(start, end, weight);
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, DotError> {
    text.parse().map_err(|_| DotError::Number {
        text: text.to_string(),
    })
}

/// Render an edge list in the dot subset
///
/// Every edge carries its weight as a `label` attribute with two decimal
/// places.
pub fn to_dot(graph: &EdgeListGraph) -> String {
    let (keyword, operator) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = String::new();
    out.push_str(keyword);
    out.push_str(" {\n");
    for edge in graph.edges().iter() {
        out.push_str(&format!(
            "    {} {} {} [ label = \"{:.2}\" ]\n",
            edge.start, operator, edge.end, edge.weight
        ));
    }
    out.push_str("}\n");
    out
}
