//! `size <n> [-f]`: grow or shrink the graph to exactly n vertices.

use anyhow::Result;
use clap::Args;
use graphgen_core::ResizeOutcome;

use crate::shell::Session;

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Target vertex count.
    pub n: usize,
    /// Shrink without asking.
    #[arg(short, long)]
    pub force: bool,
}

pub fn run_size(session: &mut Session<'_>, args: &SizeArgs) -> Result<()> {
    let len = session.graph.len();
    if args.n < len
        && !args.force
        && !session
            .console
            .confirm("Do you really want to shrink the graph?")?
    {
        return Ok(());
    }

    let msg = match session.graph.resize(args.n)? {
        ResizeOutcome::Unchanged => "Nothing changed.".to_string(),
        ResizeOutcome::Added(k) => format!("Added {k} vertex(vertices)."),
        ResizeOutcome::Removed(k) => format!("Deleted {k} vertex(vertices)."),
    };
    session.console.info(&msg)?;
    Ok(())
}
