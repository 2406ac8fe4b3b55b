//! `del <A…>`: delete vertices, renumbering the rest of the graph.

use anyhow::Result;
use clap::Args;
use graphgen_core::IndexArg;

use super::invalid_index;
use crate::shell::Session;

#[derive(Args, Debug)]
pub struct DelArgs {
    /// Vertices to delete, named against the graph as it is now.
    #[arg(required = true, value_name = "INDEX")]
    pub indices: Vec<IndexArg>,
}

/// Invalid indices are reported and skipped; the valid ones are still
/// deleted.
pub fn run_del(session: &mut Session<'_>, args: &DelArgs) -> Result<()> {
    for &arg in &args.indices {
        if let Some(msg) = invalid_index(&session.graph, arg) {
            session.console.error(&msg)?;
        }
    }

    let deleted = session.graph.delete_many(&args.indices);
    session
        .console
        .info(&format!("Updated {deleted} vertex(vertices)."))?;
    Ok(())
}
