//! Topology listing command
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::sample_topology;
use netpath_core::error::Result;

/// Execute the topology command
pub fn execute(cli: &Cli) -> Result<()> {
    let graph = sample_topology();

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by_key(|n| n.id());

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "nodes": nodes });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Nodes:");
            for node in &nodes {
                println!("  {} {}", node.id(), node.name());
            }
            println!("Edges:");
            for node in &nodes {
                for edge in node.edges() {
                    println!(
                        "  {} -> {} delay={} bandwidth={}",
                        edge.from, edge.to, edge.delay, edge.bandwidth
                    );
                }
            }
        }
    }

    Ok(())
}
