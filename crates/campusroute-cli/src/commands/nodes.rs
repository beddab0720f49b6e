//! Nodes command handler listing every point in the loaded graph.

use std::path::Path;

use anyhow::Result;

use crate::commands::load_graph;

/// Handle the nodes subcommand.
pub fn handle_nodes_command(graph_path: Option<&Path>) -> Result<()> {
    let (graph, _) = load_graph(graph_path)?;

    println!("Available nodes:");
    for node in graph.nodes() {
        println!("- {} ({})", node.label, node.id);
    }

    Ok(())
}
