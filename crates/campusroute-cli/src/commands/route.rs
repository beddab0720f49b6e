//! Route command handler for computing paths between campus nodes.

use std::path::Path;

use anyhow::{bail, Context, Result};

use campusroute_lib::{find_route, PathQuery};

use crate::commands::load_graph;
use crate::output::{render_route, OutputFormat};

/// Handle the route subcommand.
///
/// Endpoints given on the command line take precedence over the ones
/// embedded in the graph document.
pub fn handle_route_command(
    graph_path: Option<&Path>,
    from: Option<&str>,
    to: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (graph, embedded) = load_graph(graph_path)?;

    let query = match (from, to) {
        (Some(from), Some(to)) => PathQuery::new(from, to),
        (None, None) => match embedded {
            Some(query) => query,
            None => bail!(
                "provide both --from and --to, or a graph document with start_node and end_node"
            ),
        },
        _ => bail!("provide both --from and --to"),
    };

    let result = find_route(&graph, &query).with_context(|| {
        format!(
            "failed to compute route from {} to {}",
            query.start_node, query.end_node
        )
    })?;

    println!("{}", render_route(&graph, &result, format)?);
    Ok(())
}
