//! graphgen-core library.
//!
//! An in-memory directed graph over a dense 16-bit vertex index space:
//! vertices are addressed by position, arcs are stored on their source
//! vertex, and deleting a vertex renumbers everything after it.
//!
//! # Conventions
//!
//! - **Errors**: store operations return [`GraphError`]; configuration
//!   loading uses `anyhow::Result`.
//! - **Logging**: use `tracing` macros (`debug!` for structural changes such
//!   as growth and deletion, `trace!` for arc edits). The store never prints.

pub mod config;
pub mod dump;
pub mod error;
pub mod graph;
pub mod index;
pub mod vertex;

pub use crate::dump::{DumpOptions, SortOrder, write_dump};
pub use crate::error::{ErrorCode, GraphError};
pub use crate::graph::classify::{ArcKind, ArcStats, Link};
pub use crate::graph::mutate::{ArcOp, ResizeOutcome};
pub use crate::graph::{DEFAULT_CAPACITY, Graph};
pub use crate::index::{IndexArg, LAST_SENTINEL, MAX_VERTICES, VertexIndex};
pub use crate::vertex::Vertex;
