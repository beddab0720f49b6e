use std::fmt;

use thiserror::Error;

/// Convenient result alias for the CampusRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which endpoint of a path query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEndpoint {
    Start,
    End,
}

impl fmt::Display for QueryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            QueryEndpoint::Start => "start",
            QueryEndpoint::End => "end",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node fails basic shape checks.
    #[error("malformed node at position {position}: {message}")]
    MalformedNode { position: usize, message: String },

    /// Raised when an edge fails basic shape checks.
    #[error("malformed edge at position {position}: {message}")]
    MalformedEdge { position: usize, message: String },

    /// Raised when two nodes share an id.
    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    /// Raised when an edge references a node id absent from the node set.
    #[error("edge at position {position} ({source} - {target}) references unknown node {missing}")]
    DanglingEdge {
        position: usize,
        source: String,
        target: String,
        missing: String,
    },

    /// Raised when a query endpoint could not be found in the node set.
    #[error("unknown {endpoint} node: {name}{}", format_suggestions(.suggestions))]
    UnknownEndpoint {
        endpoint: QueryEndpoint,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when relaxation does not converge because a negative-weight
    /// cycle is reachable from the start node.
    #[error("graph contains a negative-weight cycle reachable from {start}")]
    NegativeCycle { start: String },

    /// Raised when the end node is unreachable from the start node.
    #[error("no path found between {start} and {end}")]
    NoPathFound { start: String, end: String },

    /// Wrapper for IO errors raised while reading a graph document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors raised while parsing a graph document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
