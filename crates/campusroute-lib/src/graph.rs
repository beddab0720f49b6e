//! Directed relaxation graph derived from a validated snapshot.

use crate::validate::ValidatedGraph;

/// Directed relaxation record. Two of these, one per direction, stand in
/// for each undirected input edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Edge list the relaxation passes iterate over.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    node_count: usize,
    edges: Vec<DirectedEdge>,
}

impl SearchGraph {
    /// Number of nodes addressed by the dense indices.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Directed records in relaxation order.
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }
}

/// Expand every undirected edge into its two directed relaxation records.
///
/// Records keep the input edge order, source direction first; relaxation
/// visits them in exactly this order, which fixes which predecessor wins
/// among equal-distance alternatives.
pub fn build_search_graph(validated: &ValidatedGraph<'_>) -> SearchGraph {
    let graph = validated.graph();
    let mut edges = Vec::with_capacity(graph.edges().len() * 2);
    for edge in graph.edges() {
        let from = graph
            .node_index(&edge.source)
            .expect("validated edge source resolves");
        let to = graph
            .node_index(&edge.target)
            .expect("validated edge target resolves");
        edges.push(DirectedEdge {
            from,
            to,
            weight: edge.distance,
        });
        edges.push(DirectedEdge {
            from: to,
            to: from,
            weight: edge.distance,
        });
    }

    SearchGraph {
        node_count: graph.nodes().len(),
        edges,
    }
}
