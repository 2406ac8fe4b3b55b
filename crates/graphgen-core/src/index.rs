//! Dense vertex indices and the `LAST` sentinel.
//!
//! Indices live in a 16-bit space. The top value (`u16::MAX`) is reserved as
//! the `LAST` sentinel, so usable indices are `0..=65534` and a graph holds at
//! most [`MAX_VERTICES`] live vertices.
//!
//! Operations never take a raw `u16`; they take an [`IndexArg`], which is
//! resolved against the live vertex count at the start of each call with
//! [`IndexArg::resolve`]. Nothing caches a resolved sentinel across calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Raw value reserved for the `LAST` sentinel.
pub const LAST_SENTINEL: u16 = u16::MAX;

/// Maximum number of live vertices (every index below the sentinel).
pub const MAX_VERTICES: usize = LAST_SENTINEL as usize;

/// Position of a vertex in a graph's dense index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexIndex(u16);

impl VertexIndex {
    /// Wrap a raw index. Returns `None` for the reserved sentinel value.
    #[must_use]
    pub const fn new(raw: u16) -> Option<Self> {
        if raw == LAST_SENTINEL {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Convert a table position. Returns `None` if it does not fit the
    /// usable index space.
    #[must_use]
    pub fn from_usize(pos: usize) -> Option<Self> {
        u16::try_from(pos).ok().and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Index one below this one. Only called on indices strictly greater
    /// than some other index, so it never underflows.
    pub(crate) const fn pred(self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<VertexIndex> for usize {
    fn from(idx: VertexIndex) -> Self {
        idx.as_usize()
    }
}

/// An index argument as accepted by store operations: either a concrete
/// position or the `LAST` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexArg {
    At(VertexIndex),
    Last,
}

impl IndexArg {
    /// Build from a raw 16-bit value, mapping the reserved value to `Last`.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match VertexIndex::new(raw) {
            Some(idx) => Self::At(idx),
            None => Self::Last,
        }
    }

    /// Resolve against the current live vertex count.
    ///
    /// `Last` becomes `len - 1`, or `0` when the graph is empty. The result
    /// is not range-checked; callers compare it against `len` themselves.
    #[must_use]
    pub fn resolve(self, len: usize) -> VertexIndex {
        match self {
            Self::At(idx) => idx,
            // len never exceeds MAX_VERTICES, so len - 1 always fits.
            Self::Last => VertexIndex::from_usize(len.saturating_sub(1)).unwrap_or(VertexIndex(0)),
        }
    }

    /// Resolve and keep the result only if it names a live vertex.
    #[must_use]
    pub fn resolve_live(self, len: usize) -> Option<VertexIndex> {
        let idx = self.resolve(len);
        (idx.as_usize() < len).then_some(idx)
    }
}

impl From<VertexIndex> for IndexArg {
    fn from(idx: VertexIndex) -> Self {
        Self::At(idx)
    }
}

impl fmt::Display for IndexArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(idx) => write!(f, "{idx}"),
            Self::Last => write!(f, "last"),
        }
    }
}

impl FromStr for IndexArg {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            return Ok(Self::Last);
        }
        s.parse::<u16>()
            .map(Self::from_raw)
            .map_err(|_| GraphError::invalid(format!("expected a vertex index or 'last', got '{s}'")))
    }
}
