//! Structural validation of a graph snapshot and path query.

use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::error::{Error, QueryEndpoint, Result};
use crate::model::{GraphModel, PathQuery};

/// Minimum similarity for a node id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown-endpoint error.
const MAX_SUGGESTIONS: usize = 3;

/// Graph snapshot that passed validation, with the query endpoints resolved
/// to dense node indices. Guaranteed free of dangling references for the
/// duration of one search.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedGraph<'a> {
    graph: &'a GraphModel,
    start: usize,
    end: usize,
}

impl<'a> ValidatedGraph<'a> {
    /// The underlying snapshot.
    pub fn graph(&self) -> &'a GraphModel {
        self.graph
    }

    /// Dense index of the query's start node.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Dense index of the query's end node.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Check a graph snapshot and query for structural soundness.
///
/// Validation fails closed: the first offending record in left-to-right scan
/// order aborts the whole call and no partial graph is passed downstream.
/// Nodes are scanned before edges, edges before the query endpoints.
pub fn validate<'a>(graph: &'a GraphModel, query: &PathQuery) -> Result<ValidatedGraph<'a>> {
    for (position, node) in graph.nodes().iter().enumerate() {
        if node.id.is_empty() {
            return Err(Error::MalformedNode {
                position,
                message: "empty id".to_string(),
            });
        }
        if !node.lat.is_finite() || !node.lng.is_finite() {
            return Err(Error::MalformedNode {
                position,
                message: format!("non-finite coordinates ({}, {})", node.lat, node.lng),
            });
        }
        if graph.node_index(&node.id) != Some(position) {
            return Err(Error::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }

    for (position, edge) in graph.edges().iter().enumerate() {
        if edge.source.is_empty() || edge.target.is_empty() {
            return Err(Error::MalformedEdge {
                position,
                message: "empty endpoint id".to_string(),
            });
        }
        if !edge.distance.is_finite() {
            return Err(Error::MalformedEdge {
                position,
                message: format!("non-finite distance {}", edge.distance),
            });
        }
        for reference in [&edge.source, &edge.target] {
            if graph.node_index(reference).is_none() {
                return Err(Error::DanglingEdge {
                    position,
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    missing: reference.clone(),
                });
            }
        }
    }

    let start = resolve_endpoint(graph, QueryEndpoint::Start, &query.start_node)?;
    let end = resolve_endpoint(graph, QueryEndpoint::End, &query.end_node)?;

    Ok(ValidatedGraph { graph, start, end })
}

fn resolve_endpoint(graph: &GraphModel, endpoint: QueryEndpoint, name: &str) -> Result<usize> {
    graph.node_index(name).ok_or_else(|| Error::UnknownEndpoint {
        endpoint,
        name: name.to_string(),
        suggestions: suggest_node_ids(graph, name),
    })
}

/// Closest existing node ids to a name that failed to resolve.
fn suggest_node_ids(graph: &GraphModel, name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .iter()
        .map(|node| (jaro_winkler(name, &node.id), node.id.as_str()))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(_, id)| id.to_string()).collect()
}
