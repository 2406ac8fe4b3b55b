//! `list [-t]`: print the graph one vertex per line.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use crossterm::style::Color;
use graphgen_core::dump::{ArcMark, ArcStyle, DumpRow, MarkedArc};
use graphgen_core::{DumpOptions, write_dump};
use serde::Serialize;

use super::tell::TellReport;
use crate::console::paint;
use crate::output::render;
use crate::shell::Session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Append the `tell` summary.
    #[arg(short = 't', long = "tell")]
    pub tell: bool,
}

#[derive(Debug, Serialize)]
struct ListReport {
    size: usize,
    rows: Vec<DumpRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<TellReport>,
}

/// Self-arcs in magenta, two-way arcs in cyan.
struct TermStyle {
    color: bool,
}

impl ArcStyle for TermStyle {
    fn write_arc(&self, w: &mut dyn Write, arc: MarkedArc) -> io::Result<()> {
        let text = arc.target.to_string();
        let color = match arc.mark {
            ArcMark::Plain => return write!(w, "{text}"),
            ArcMark::SelfArc => Color::Magenta,
            ArcMark::TwoWay => Color::Cyan,
        };
        write!(w, "{}", paint(&text, self.color, color))
    }
}

pub fn run_list(session: &mut Session<'_>, args: &ListArgs) -> Result<()> {
    let options = DumpOptions {
        order: session.config.display.sort,
        mark: session.config.display.mark_dual,
    };
    let graph = &session.graph;

    if session.mode.is_json() {
        let report = ListReport {
            size: graph.len(),
            rows: graph.dump_rows(&options),
            stats: args.tell.then(|| TellReport::of(graph)),
        };
        return render(session.mode, session.console.out(), &report, |_, _| Ok(()));
    }

    let style = TermStyle {
        color: session.console.color(),
    };
    let out = session.console.out();
    write_dump(graph, out, &options, &style)?;
    if args.tell {
        TellReport::of(graph).write_text(out)?;
    }
    Ok(())
}
