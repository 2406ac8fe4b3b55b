//! `new [-f]`: replace the graph with an empty one.

use anyhow::Result;
use clap::Args;

use crate::shell::Session;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Clear without asking.
    #[arg(short, long)]
    pub force: bool,
}

pub fn run_new(session: &mut Session<'_>, args: &NewArgs) -> Result<()> {
    if !args.force
        && !session
            .console
            .confirm("Do you really want to clear the graph?")?
    {
        return Ok(());
    }

    session
        .graph
        .clear(session.config.graph.default_capacity)?;
    session.console.info("Operation completed.")?;
    Ok(())
}
