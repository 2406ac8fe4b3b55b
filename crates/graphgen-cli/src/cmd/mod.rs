pub mod add;
pub mod arch;
pub mod completions;
pub mod del;
pub mod find;
pub mod help;
pub mod list;
pub mod new;
pub mod run;
pub mod set;
pub mod size;
pub mod tell;

use graphgen_core::{Graph, IndexArg};

/// The shell's message for an explicit index past the live range.
///
/// `last` is never reported here; it resolves against the graph at call
/// time and the store decides what an empty graph means.
pub(crate) fn invalid_index(graph: &Graph, arg: IndexArg) -> Option<String> {
    match arg {
        IndexArg::At(idx) if idx.as_usize() >= graph.len() => {
            Some(format!("Invalid vertex index ({idx})."))
        }
        _ => None,
    }
}
