//! `set <A:> [T…]`: replace the arcs of one vertex.

use anyhow::Result;
use clap::Args;
use graphgen_core::IndexArg;

use crate::shell::Session;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Vertex to update, followed by a colon (`3:` or `last:`).
    #[arg(value_name = "A:")]
    pub vertex: String,
    /// New arc targets.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<IndexArg>,
}

pub fn run_set(session: &mut Session<'_>, args: &SetArgs) -> Result<()> {
    let Some(raw) = args.vertex.strip_suffix(':') else {
        session.console.error("Missing colon.")?;
        return Ok(());
    };
    let index: IndexArg = raw.parse()?;

    let stored = session.graph.set_arcs(index, &args.targets)?;
    session.console.info(&format!(
        "Set {stored}/{} arch(es).",
        args.targets.len()
    ))?;
    Ok(())
}
