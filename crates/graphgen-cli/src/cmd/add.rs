//! `add [T…]`: append a vertex with arcs to the given targets.

use anyhow::Result;
use clap::Args;
use graphgen_core::{ArcOp, IndexArg};

use crate::shell::Session;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Vertices the new vertex points at (`last` is the new vertex itself).
    #[arg(value_name = "TARGET")]
    pub targets: Vec<IndexArg>,
}

/// Targets are checked against the grown graph before anything changes, so
/// a bad target leaves the graph as it was.
pub fn run_add(session: &mut Session<'_>, args: &AddArgs) -> Result<()> {
    let graph = &mut session.graph;

    if args.targets.is_empty() && !graph.is_empty() {
        session
            .console
            .warn("This vertex will be isolated (0 arches).")?;
    }

    let grown = graph.len() + 1;
    if let Some(bad) = args.targets.iter().find(|t| t.resolve_live(grown).is_none()) {
        session.console.error(&format!("Invalid vertex index ({bad})."))?;
        return Ok(());
    }

    graph.add(None)?;
    let mut added = 0;
    for &target in &args.targets {
        added += graph.connect(IndexArg::Last, target, ArcOp::Add)?;
    }

    let id = graph.len() - 1;
    session
        .console
        .info(&format!("Created new vertex (ID = {id}, arches = {added})."))?;
    Ok(())
}
