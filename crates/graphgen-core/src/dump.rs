//! Line-per-vertex rendering of a graph.
//!
//! Sorting happens on a transient copy of each arc list; the stored arc
//! order is never changed by rendering.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::graph::classify::ArcKind;
use crate::index::VertexIndex;

/// Marker written in place of rows when the graph has no vertices.
pub const EMPTY_MARKER: &str = "\tEmpty.";

/// Width of the right-aligned vertex column.
pub const INDEX_WIDTH: usize = 16;

/// Display order for each vertex's arcs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Insertion order, as stored.
    #[default]
    Stored,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    pub order: SortOrder,
    /// Tag self-arcs and two-way arcs so a style can highlight them.
    pub mark: bool,
}

/// How an arc should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcMark {
    Plain,
    SelfArc,
    TwoWay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkedArc {
    pub target: VertexIndex,
    pub mark: ArcMark,
}

/// One vertex and its (display-ordered) arcs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpRow {
    pub vertex: VertexIndex,
    pub arcs: Vec<MarkedArc>,
}

/// Decorates a single arc target as it is written.
pub trait ArcStyle {
    /// Write `arc.target`, optionally wrapped in styling for `arc.mark`.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `w`.
    fn write_arc(&self, w: &mut dyn Write, arc: MarkedArc) -> io::Result<()>;
}

/// Writes targets as bare numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl ArcStyle for PlainStyle {
    fn write_arc(&self, w: &mut dyn Write, arc: MarkedArc) -> io::Result<()> {
        write!(w, "{}", arc.target)
    }
}

impl Graph {
    /// Rows for every live vertex in index order.
    #[must_use]
    pub fn dump_rows(&self, options: &DumpOptions) -> Vec<DumpRow> {
        self.iter()
            .map(|(vertex, v)| {
                let mut targets = v.arcs().to_vec();
                match options.order {
                    SortOrder::Stored => {}
                    SortOrder::Ascending => targets.sort_unstable(),
                    SortOrder::Descending => targets.sort_unstable_by(|a, b| b.cmp(a)),
                }

                let arcs = targets
                    .into_iter()
                    .map(|target| MarkedArc {
                        target,
                        mark: if options.mark {
                            self.mark_for(vertex, target)
                        } else {
                            ArcMark::Plain
                        },
                    })
                    .collect();

                DumpRow { vertex, arcs }
            })
            .collect()
    }

    fn mark_for(&self, vertex: VertexIndex, target: VertexIndex) -> ArcMark {
        if vertex == target {
            ArcMark::SelfArc
        } else if self.classify_resolved(vertex, target) == ArcKind::TwoWay {
            ArcMark::TwoWay
        } else {
            ArcMark::Plain
        }
    }
}

/// Write `graph` one vertex per line as `index: [a, b, c]`.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_dump(
    graph: &Graph,
    w: &mut dyn Write,
    options: &DumpOptions,
    style: &dyn ArcStyle,
) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(w, "{EMPTY_MARKER}");
    }

    for row in graph.dump_rows(options) {
        write!(w, "{:>INDEX_WIDTH$}: [", row.vertex)?;
        for (i, arc) in row.arcs.iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            style.write_arc(w, *arc)?;
        }
        writeln!(w, "]")?;
    }
    Ok(())
}
