//! `tell`: size and arc statistics.

use std::io::{self, Write};

use anyhow::Result;
use graphgen_core::{ArcStats, Graph};
use serde::Serialize;

use crate::output::render;
use crate::shell::Session;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TellReport {
    pub size: usize,
    pub capacity: usize,
    #[serde(flatten)]
    pub stats: ArcStats,
}

impl TellReport {
    pub fn of(graph: &Graph) -> Self {
        Self {
            size: graph.len(),
            capacity: graph.capacity(),
            stats: graph.count(),
        }
    }

    pub fn write_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "\tsize:               {}", self.size)?;
        writeln!(w, "\t1-way arches:       {}", self.stats.one_way)?;
        writeln!(w, "\t2-way arches:       {}", self.stats.two_way)?;
        writeln!(w, "\tisolated vertices:  {}", self.stats.isolated)
    }
}

pub fn run_tell(session: &mut Session<'_>) -> Result<()> {
    let report = TellReport::of(&session.graph);
    render(session.mode, session.console.out(), &report, |r, w| {
        r.write_text(w)
    })
}
