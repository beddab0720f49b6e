//! Output formatting for route rendering.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use campusroute_lib::{GraphModel, PathResult};

/// Presentation format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route listing.
    Text,
    /// Machine-readable JSON matching the rendering collaborator's shape.
    Json,
}

/// Render a computed route in the requested format.
pub fn render_route(graph: &GraphModel, result: &PathResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(graph, result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

fn render_text(graph: &GraphModel, result: &PathResult) -> String {
    let mut rendered = String::new();
    let _ = writeln!(rendered, "Route ({} hops):", result.hop_count());
    for id in &result.path {
        let label = graph
            .node_by_id(id)
            .map(|node| node.label.as_str())
            .unwrap_or("<unknown>");
        let _ = writeln!(rendered, "- {} ({})", label, id);
    }
    let _ = write!(rendered, "Total distance: {} meters", result.total_distance);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusroute_lib::sample_graph;

    fn sample_result() -> PathResult {
        PathResult {
            path: vec!["A".to_string(), "C".to_string(), "B".to_string()],
            total_distance: 110.0,
        }
    }

    #[test]
    fn text_rendering_lists_labels_and_total() {
        let graph = sample_graph();
        let rendered = render_route(&graph, &sample_result(), OutputFormat::Text)
            .expect("renders");

        assert!(rendered.contains("Route (2 hops):"));
        assert!(rendered.contains("- Main Building Entrance (A)"));
        assert!(rendered.contains("- Road Junction 1 (C)"));
        assert!(rendered.contains("Total distance: 110 meters"));
    }

    #[test]
    fn json_rendering_round_trips() {
        let graph = sample_graph();
        let rendered = render_route(&graph, &sample_result(), OutputFormat::Json)
            .expect("renders");

        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["totalDistance"], 110.0);
        assert_eq!(value["path"][0], "A");
        assert_eq!(value["path"][2], "B");
    }
}
