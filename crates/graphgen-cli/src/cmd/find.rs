//! `find <A> <B>`: classify the connection from A to B.

use anyhow::Result;
use clap::Args;
use graphgen_core::{ArcKind, IndexArg, Link, VertexIndex};
use serde::Serialize;

use super::invalid_index;
use crate::output::render;
use crate::shell::Session;

#[derive(Args, Debug)]
pub struct FindArgs {
    pub a: IndexArg,
    pub b: IndexArg,
}

#[derive(Debug, Serialize)]
struct FindReport {
    from: VertexIndex,
    to: VertexIndex,
    /// Order-sensitive: only reports an arc when `from -> to` exists.
    kind: ArcKind,
    /// Direction-agnostic view of the same pair.
    link: Link,
}

pub fn run_find(session: &mut Session<'_>, args: &FindArgs) -> Result<()> {
    let graph = &session.graph;
    let invalid = invalid_index(graph, args.a).or_else(|| invalid_index(graph, args.b));
    if let Some(msg) = invalid {
        session.console.error(&msg)?;
        return Ok(());
    }

    let report = FindReport {
        from: args.a.resolve(graph.len()),
        to: args.b.resolve(graph.len()),
        kind: graph.classify(args.a, args.b)?,
        link: graph.link(args.a, args.b)?,
    };

    if session.mode.is_json() {
        return render(session.mode, session.console.out(), &report, |_, _| Ok(()));
    }

    let msg = match report.kind {
        ArcKind::OneWay => "One-way connection found (A --> B).",
        ArcKind::TwoWay => "Two-way connection found (A <-> B).",
        ArcKind::None => "No connection found.",
    };
    session.console.info(msg)?;
    if report.link == Link::Backward {
        session.console.info("Only the reverse arc exists (B --> A).")?;
    }
    Ok(())
}
