use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus map routing utilities")]
struct Cli {
    /// Path to a JSON graph document; defaults to the built-in campus map.
    #[arg(long)]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every node in the loaded graph.
    Nodes,
    /// Compute the shortest route between two node ids.
    Route {
        /// Starting node id.
        #[arg(long = "from")]
        from: Option<String>,
        /// Destination node id.
        #[arg(long = "to")]
        to: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Nodes => commands::nodes::handle_nodes_command(cli.graph.as_deref()),
        Command::Route { from, to, format } => commands::route::handle_route_command(
            cli.graph.as_deref(),
            from.as_deref(),
            to.as_deref(),
            format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
