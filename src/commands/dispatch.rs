//! Command dispatch logic for netpath
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use netpath_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Route { from, to }) => commands::route::execute(cli, *from, *to, start),

        Some(Commands::Topology) => commands::topology::execute(cli),
    }
}

fn handle_no_command() -> Result<()> {
    println!("netpath {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A minimum-delay route finder for weighted directed graphs.");
    println!();
    println!("Run `netpath --help` for usage information.");
    Ok(())
}
