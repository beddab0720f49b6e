use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier for a point of interest, unique and case-sensitive.
pub type NodeId = String;

/// Point of interest on the campus map.
///
/// Coordinates are presentation data for the rendering collaborator; the
/// routing algorithm never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Measured path segment between two points of interest.
///
/// Segments are traversable in both directions; `source`/`target` only
/// record the direction the segment was entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: f64,
}

/// Endpoints of a shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub start_node: NodeId,
    pub end_node: NodeId,
}

impl PathQuery {
    /// Convenience constructor for a query between two node ids.
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>) -> Self {
        Self {
            start_node: start.into(),
            end_node: end.into(),
        }
    }
}

/// Immutable snapshot of the campus graph for one computation.
///
/// Construction builds the node-id to dense-index map once; the search keeps
/// its distance and predecessor tables in arrays indexed by it. Updating the
/// graph means constructing a new `GraphModel` value.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
}

impl GraphModel {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            // First occurrence wins; duplicates are rejected by validation.
            index.entry(node.id.clone()).or_insert(position);
        }
        Self {
            nodes,
            edges,
            index,
        }
    }

    /// Nodes in their original insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in their original insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Dense index for a node id, if present.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Lookup a node by its case-sensitive id.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.node_index(id).map(|position| &self.nodes[position])
    }
}

/// Graph definition exchanged with the editing collaborator.
///
/// The logical shape is `{ nodes, edges, start_node, end_node }`. The
/// endpoints are optional because the query may be supplied separately from
/// the graph itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_node: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_node: Option<NodeId>,
}

impl GraphDocument {
    /// Split the document into a graph snapshot and the embedded query, if
    /// both endpoints were present.
    pub fn into_parts(self) -> (GraphModel, Option<PathQuery>) {
        let GraphDocument {
            nodes,
            edges,
            start_node,
            end_node,
        } = self;
        let query = match (start_node, end_node) {
            (Some(start_node), Some(end_node)) => Some(PathQuery {
                start_node,
                end_node,
            }),
            _ => None,
        };
        (GraphModel::new(nodes, edges), query)
    }
}

/// Load a graph document from a JSON file.
pub fn load_graph_document(path: &Path) -> Result<GraphDocument> {
    let raw = fs::read_to_string(path)?;
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}
