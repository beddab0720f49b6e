//! Route computation over a campus graph snapshot.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::build_search_graph;
use crate::model::{GraphModel, NodeId, PathQuery};
use crate::path::{shortest_path, SearchOutcome};
use crate::validate::validate;

/// Shortest route between the endpoints of a path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Ordered node ids from start to end. Every consecutive pair
    /// corresponds to an edge of the input graph, in either direction.
    pub path: Vec<NodeId>,
    /// Sum of the matched edge distances along `path`.
    pub total_distance: f64,
}

impl PathResult {
    /// Number of segments traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute the minimum-distance route between the query endpoints.
///
/// Validation runs first and blocks any algorithmic work. The relaxation
/// then treats every edge as traversable in both directions, detects
/// negative-weight cycles reachable from the start node, and reports an
/// unreachable end node as [`Error::NoPathFound`]. Each call is a pure
/// function of its inputs and holds no state afterwards.
pub fn find_route(graph: &GraphModel, query: &PathQuery) -> Result<PathResult> {
    let validated = validate(graph, query)?;
    let search = build_search_graph(&validated);
    debug!(
        nodes = graph.nodes().len(),
        relaxation_edges = search.edges().len(),
        start = %query.start_node,
        end = %query.end_node,
        "running edge relaxation"
    );

    match shortest_path(&search, validated.start(), validated.end()) {
        SearchOutcome::Route {
            path,
            total_distance,
        } => Ok(PathResult {
            path: path
                .into_iter()
                .map(|position| graph.nodes()[position].id.clone())
                .collect(),
            total_distance,
        }),
        SearchOutcome::NegativeCycle => Err(Error::NegativeCycle {
            start: query.start_node.clone(),
        }),
        SearchOutcome::Unreachable => Err(Error::NoPathFound {
            start: query.start_node.clone(),
            end: query.end_node.clone(),
        }),
    }
}
