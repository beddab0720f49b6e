// Module exports for CLI subcommands
//
// Each module handles a specific subcommand; main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod nodes;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use campusroute_lib::{campus_graph, load_graph_document, GraphModel, PathQuery};

/// Load the graph named on the command line, or the built-in campus map.
pub fn load_graph(path: Option<&Path>) -> Result<(GraphModel, Option<PathQuery>)> {
    match path {
        Some(path) => {
            let document = load_graph_document(path).with_context(|| {
                format!("failed to load graph document from {}", path.display())
            })?;
            Ok(document.into_parts())
        }
        None => Ok((campus_graph(), None)),
    }
}
