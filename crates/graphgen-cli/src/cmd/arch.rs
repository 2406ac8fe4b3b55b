//! `arch <add|del> <A> <B>`: edit a single arc.

use anyhow::Result;
use clap::Args;
use graphgen_core::{ArcOp, IndexArg};

use super::invalid_index;
use crate::shell::Session;

#[derive(Args, Debug)]
pub struct ArchArgs {
    /// `add` or `del`.
    pub op: ArcOp,
    /// Source vertex.
    pub a: IndexArg,
    /// Target vertex.
    pub b: IndexArg,
}

pub fn run_arch(session: &mut Session<'_>, args: &ArchArgs) -> Result<()> {
    let changed = session.graph.connect(args.a, args.b, args.op)?;

    if changed == 0 {
        let invalid = invalid_index(&session.graph, args.a)
            .or_else(|| invalid_index(&session.graph, args.b));
        if let Some(msg) = invalid {
            session.console.error(&msg)?;
            return Ok(());
        }
    }

    session
        .console
        .info(&format!("Updated {changed} arch(es)."))?;
    Ok(())
}
