//! Route query command
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::sample_topology;
use netpath_core::error::Result;
use netpath_core::graph::{find_shortest_path, NodeId};

/// Execute the route command
pub fn execute(cli: &Cli, from: NodeId, to: NodeId, start: Instant) -> Result<()> {
    let graph = sample_topology();

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "build_topology");
    }

    let route = find_shortest_path(&graph, from, to);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": route.found(),
                "total_delay": route.total_delay,
                "path": route.path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if route.found() {
                println!("Total Delay: {}", route.total_delay);
                println!("Path: {}", route.path.join(" -> "));
            } else if !cli.quiet {
                println!("No route from {} to {}", from, to);
            }
        }
    }

    Ok(())
}
