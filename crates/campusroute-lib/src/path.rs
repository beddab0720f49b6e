//! Iterative edge relaxation (Bellman-Ford) over dense node indices.

use tracing::debug;

use crate::graph::SearchGraph;

/// Outcome of one relaxation run, in dense-index terms. The route module
/// maps indices back to node ids and attaches names to errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Route {
        path: Vec<usize>,
        total_distance: f64,
    },
    NegativeCycle,
    Unreachable,
}

/// Run edge relaxation from `start` and reconstruct the path to `end`.
pub fn shortest_path(graph: &SearchGraph, start: usize, end: usize) -> SearchOutcome {
    let node_count = graph.node_count();
    let mut distance = vec![f64::INFINITY; node_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; node_count];
    distance[start] = 0.0;

    // Up to |V| - 1 passes; stop as soon as a pass changes nothing.
    let mut passes = 0usize;
    for _ in 1..node_count {
        let mut updated = false;
        for edge in graph.edges() {
            let through = distance[edge.from];
            // Strict less-than: an equal-distance alternative never
            // overwrites an existing predecessor.
            if through.is_finite() && through + edge.weight < distance[edge.to] {
                distance[edge.to] = through + edge.weight;
                predecessor[edge.to] = Some(edge.from);
                updated = true;
            }
        }
        passes += 1;
        if !updated {
            break;
        }
    }
    debug!(passes, "relaxation finished");

    // One more scan: any remaining improvement means a negative-weight
    // cycle is reachable from the start node.
    for edge in graph.edges() {
        let through = distance[edge.from];
        if through.is_finite() && through + edge.weight < distance[edge.to] {
            return SearchOutcome::NegativeCycle;
        }
    }

    if !distance[end].is_finite() {
        return SearchOutcome::Unreachable;
    }

    match walk_predecessors(&predecessor, start, end) {
        Some(path) => SearchOutcome::Route {
            path,
            total_distance: distance[end],
        },
        // Inconsistent predecessor state; report no path rather than a
        // truncated one.
        None => SearchOutcome::Unreachable,
    }
}

/// Follow predecessor links backward from `end`, returning the forward path
/// only if the walk terminates at `start`.
fn walk_predecessors(
    predecessor: &[Option<usize>],
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = predecessor[current]?;
        path.push(current);
        if path.len() > predecessor.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}
