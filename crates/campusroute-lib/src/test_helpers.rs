// Test-only helpers for `campusroute-lib` tests
#![allow(dead_code)]

use crate::model::{Edge, GraphModel, Node};

/// Builder to create `GraphModel` instances in tests with sensible defaults.
pub struct GraphModelBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node with placeholder label and coordinates.
    pub fn node(mut self, id: &str) -> Self {
        self.nodes.push(Node {
            id: id.to_string(),
            label: id.to_string(),
            lat: 13.0,
            lng: 80.2,
        });
        self
    }

    /// Add a node with an explicit label and coordinates.
    pub fn labelled_node(mut self, id: &str, label: &str, lat: f64, lng: f64) -> Self {
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.to_string(),
            lat,
            lng,
        });
        self
    }

    /// Add a node verbatim, malformed values included.
    pub fn raw_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn edge(mut self, source: &str, target: &str, distance: f64) -> Self {
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
            distance,
        });
        self
    }

    pub fn build(self) -> GraphModel {
        GraphModel::new(self.nodes, self.edges)
    }
}

impl Default for GraphModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
