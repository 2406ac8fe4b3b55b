//! The indexed directed-graph store.
//!
//! # Overview
//!
//! A [`Graph`] owns a contiguous table of vertex slots. The first `len` slots
//! are live vertices, addressed by their position; the remaining slots are
//! pre-instantiated empty spares. Each live [`Vertex`] owns the list of
//! targets its outgoing arcs point at.
//!
//! # Invariants
//!
//! - Every arc target is `< len` at all times.
//! - A vertex never holds two arcs with the same target.
//! - Self-arcs are allowed.
//! - `len <= capacity`; capacity only grows (by doubling), never shrinks.
//!
//! Deleting a vertex shifts every later vertex one position left, so the
//! store renumbers every arc that pointed past the deleted position.
//!
//! # Submodules
//!
//! - [`mutate`]: vertex insertion/deletion, arc add/delete, bulk edits.
//! - [`classify`]: arc classification and aggregate statistics.

#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod mutate;

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::index::{IndexArg, MAX_VERTICES, VertexIndex};
use crate::vertex::Vertex;

/// Slots preallocated by [`Graph::default`].
pub const DEFAULT_CAPACITY: usize = 64;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph over a dense `0..len` vertex index space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Every instantiated slot; `slots.len()` is the capacity.
    slots: Vec<Vertex>,
    /// Number of live vertices at the front of `slots`.
    len: usize,
}

impl Graph {
    /// Create an empty graph with `capacity` preallocated vertex slots.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if `capacity` is zero or larger than
    ///   the index space can address.
    /// - [`GraphError::AllocationFailure`] if the slot table cannot be
    ///   allocated. Nothing is returned half-built.
    pub fn with_capacity(capacity: usize) -> Result<Self, GraphError> {
        if capacity == 0 {
            return Err(GraphError::invalid("capacity must be positive"));
        }
        if capacity > MAX_VERTICES {
            return Err(GraphError::invalid(format!(
                "capacity {capacity} exceeds the {MAX_VERTICES}-vertex index space"
            )));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| GraphError::alloc("vertex table", e))?;
        slots.resize_with(capacity, Vertex::new);

        debug!(capacity, "created graph");
        Ok(Self { slots, len: 0 })
    }

    /// Release every vertex's arc storage, then the slot table.
    ///
    /// Dropping a graph does the same; this spells it out for callers that
    /// replace a graph explicitly.
    pub fn destroy(mut self) {
        for vertex in &mut self.slots[..self.len] {
            vertex.reset();
        }
        self.slots = Vec::new();
        trace!("destroyed graph");
    }

    /// Replace this graph with a fresh, empty one of the given capacity.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::with_capacity`]. On error the current graph is kept.
    pub fn clear(&mut self, capacity: usize) -> Result<(), GraphError> {
        let fresh = Self::with_capacity(capacity)?;
        std::mem::replace(self, fresh).destroy();
        Ok(())
    }

    /// Number of live vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of instantiated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The live vertex named by `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: IndexArg) -> Option<&Vertex> {
        let idx = index.resolve_live(self.len)?;
        self.slots.get(idx.as_usize())
    }

    /// Outgoing arc targets of the live vertex named by `index`.
    #[must_use]
    pub fn arcs(&self, index: IndexArg) -> Option<&[VertexIndex]> {
        self.vertex(index).map(Vertex::arcs)
    }

    /// Live vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, &Vertex)> + '_ {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(pos, v)| VertexIndex::from_usize(pos).map(|idx| (idx, v)))
    }

    /// Total number of stored arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.slots[..self.len].iter().map(Vertex::out_degree).sum()
    }

    /// Verify the data-model invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Corrupt`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), GraphError> {
        if self.len > self.slots.len() {
            return Err(GraphError::Corrupt(format!(
                "live count {} exceeds capacity {}",
                self.len,
                self.slots.len()
            )));
        }
        if self.slots.len() > MAX_VERTICES {
            return Err(GraphError::Corrupt(format!(
                "capacity {} exceeds the index space",
                self.slots.len()
            )));
        }

        for (idx, vertex) in self.iter() {
            let mut seen = HashSet::with_capacity(vertex.out_degree());
            for &target in vertex.arcs() {
                if target.as_usize() >= self.len {
                    return Err(GraphError::Corrupt(format!(
                        "vertex {idx} has arc to {target}, but only {} vertices are live",
                        self.len
                    )));
                }
                if !seen.insert(target) {
                    return Err(GraphError::Corrupt(format!(
                        "vertex {idx} holds arc to {target} twice"
                    )));
                }
            }
        }

        if let Some(pos) = self.slots[self.len..].iter().position(|v| !v.is_isolated()) {
            return Err(GraphError::Corrupt(format!(
                "spare slot {} still holds arcs",
                self.len + pos
            )));
        }

        Ok(())
    }

    /// Resolve both endpoints of a pair, requiring each to be live.
    fn resolve_pair(
        &self,
        a: IndexArg,
        b: IndexArg,
    ) -> Option<(VertexIndex, VertexIndex)> {
        Some((a.resolve_live(self.len)?, b.resolve_live(self.len)?))
    }

    fn slot(&self, idx: VertexIndex) -> &Vertex {
        &self.slots[idx.as_usize()]
    }
}

impl Default for Graph {
    fn default() -> Self {
        let mut slots = Vec::with_capacity(DEFAULT_CAPACITY);
        slots.resize_with(DEFAULT_CAPACITY, Vertex::new);
        Self { slots, len: 0 }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
