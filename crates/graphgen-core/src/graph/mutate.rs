//! Vertex insertion and deletion, arc mutation, and bulk edits.
//!
//! Every operation resolves its [`IndexArg`]s against the live count at the
//! moment of the call. Out-of-range indices in [`Graph::delete`] and
//! [`Graph::connect`] are zero-effect results, not errors.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::Graph;
use crate::error::GraphError;
use crate::index::{IndexArg, MAX_VERTICES, VertexIndex};
use crate::vertex::Vertex;

/// Which way [`Graph::connect`] edits an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcOp {
    Add,
    Delete,
}

impl FromStr for ArcOp {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "del" | "delete" => Ok(Self::Delete),
            other => Err(GraphError::invalid(format!(
                "unknown arc operation '{other}' (expected 'add' or 'del')"
            ))),
        }
    }
}

impl fmt::Display for ArcOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "del"),
        }
    }
}

/// What [`Graph::resize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    Unchanged,
    Added(usize),
    Removed(usize),
}

impl Graph {
    /// Append a vertex at index `len`.
    ///
    /// Without a template the next slot is reset to an empty vertex. A
    /// template is moved into the slot as-is; its arcs must already be valid
    /// for the grown graph (each `<= len`, so it may point at itself).
    ///
    /// When the table is full, capacity doubles (capped at the index space)
    /// and every new slot is instantiated empty.
    ///
    /// # Errors
    ///
    /// - [`GraphError::IndexSpaceExhausted`] if every usable index is taken.
    /// - [`GraphError::InvalidArgument`] if the template points past the new
    ///   vertex.
    /// - [`GraphError::AllocationFailure`] if the table cannot grow.
    ///
    /// The graph is unchanged whenever an error is returned.
    pub fn add(&mut self, template: Option<Vertex>) -> Result<usize, GraphError> {
        if self.len >= MAX_VERTICES {
            return Err(GraphError::IndexSpaceExhausted { max: MAX_VERTICES });
        }
        if let Some(highest) = template.as_ref().and_then(Vertex::highest_target) {
            if highest.as_usize() > self.len {
                return Err(GraphError::invalid(format!(
                    "template arc to {highest} is out of range for vertex {}",
                    self.len
                )));
            }
        }

        if self.len == self.slots.len() {
            self.grow()?;
        }

        let slot = &mut self.slots[self.len];
        match template {
            Some(vertex) => *slot = vertex,
            None => slot.reset(),
        }
        self.len += 1;

        trace!(len = self.len, "added vertex");
        Ok(1)
    }

    fn grow(&mut self) -> Result<(), GraphError> {
        let old = self.slots.len();
        let new_capacity = old.saturating_mul(2).min(MAX_VERTICES);
        self.slots
            .try_reserve_exact(new_capacity - old)
            .map_err(|e| GraphError::alloc("vertex table", e))?;
        self.slots.resize_with(new_capacity, Vertex::new);

        debug!(old, new_capacity, "grew vertex table");
        Ok(())
    }

    /// Remove a vertex, shifting later vertices left and renumbering arcs.
    ///
    /// Returns the number of vertices removed: `0` if `index` does not name
    /// a live vertex, `1` otherwise.
    pub fn delete(&mut self, index: IndexArg) -> usize {
        let Some(deleted) = index.resolve_live(self.len) else {
            return 0;
        };
        let pos = deleted.as_usize();

        // Release the victim, then rotate it to the tail where it becomes a
        // spare slot. Capacity is unchanged.
        self.slots[pos].reset();
        self.slots[pos..self.len].rotate_left(1);
        self.len -= 1;

        for vertex in &mut self.slots[..self.len] {
            vertex.reindex_after_delete(deleted);
        }

        debug!(index = %deleted, len = self.len, "deleted vertex");
        1
    }

    /// Delete several vertices named against the graph as it is on entry.
    ///
    /// Indices are resolved first, de-duplicated, and removed from highest
    /// to lowest so no deletion renumbers a later target. Invalid indices
    /// are skipped. Returns how many vertices were removed.
    pub fn delete_many(&mut self, indices: &[IndexArg]) -> usize {
        let mut resolved: Vec<VertexIndex> = indices
            .iter()
            .filter_map(|arg| arg.resolve_live(self.len))
            .collect();
        resolved.sort_unstable_by(|a, b| b.cmp(a));
        resolved.dedup();

        resolved
            .into_iter()
            .map(|idx| self.delete(IndexArg::At(idx)))
            .sum()
    }

    /// Add or delete the arc `a -> b`.
    ///
    /// Returns `Ok(1)` if the arc set changed, `Ok(0)` if it was already in
    /// the requested state or either index is not live.
    ///
    /// # Errors
    ///
    /// [`GraphError::AllocationFailure`] if the source vertex's arc list
    /// cannot grow. The graph is unchanged.
    pub fn connect(&mut self, a: IndexArg, b: IndexArg, op: ArcOp) -> Result<usize, GraphError> {
        let Some((from, to)) = self.resolve_pair(a, b) else {
            return Ok(0);
        };

        let source = &mut self.slots[from.as_usize()];
        let changed = match op {
            ArcOp::Add => source.insert_arc(to)?,
            ArcOp::Delete => source.remove_arc(to),
        };

        trace!(%from, %to, %op, changed, "connect");
        Ok(usize::from(changed))
    }

    /// Replace the arc list of one vertex.
    ///
    /// All arguments are validated before anything changes. Repeated targets
    /// collapse to one arc. Returns the number of arcs now stored.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if the vertex or any target is not
    ///   live.
    /// - [`GraphError::AllocationFailure`] if the new list cannot be built.
    pub fn set_arcs(&mut self, index: IndexArg, targets: &[IndexArg]) -> Result<usize, GraphError> {
        let vertex_idx = index
            .resolve_live(self.len)
            .ok_or_else(|| GraphError::invalid(format!("invalid vertex index ({index})")))?;

        let mut resolved = Vec::new();
        resolved
            .try_reserve_exact(targets.len())
            .map_err(|e| GraphError::alloc("vertex arc list", e))?;
        for target in targets {
            let idx = target
                .resolve_live(self.len)
                .ok_or_else(|| GraphError::invalid(format!("invalid vertex index ({target})")))?;
            resolved.push(idx);
        }

        let vertex = Vertex::with_arcs(&resolved)?;
        let stored = vertex.out_degree();
        self.slots[vertex_idx.as_usize()] = vertex;

        trace!(index = %vertex_idx, stored, "set arcs");
        Ok(stored)
    }

    /// Grow with empty vertices or shrink from the tail until exactly
    /// `target` vertices are live.
    ///
    /// Shrinking has the same result as deleting `last` repeatedly, but no
    /// survivor is renumbered, so it is one pass over the survivors.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if `target` exceeds the index space.
    /// - Any error from [`Graph::add`]; vertices added before the failure
    ///   stay in the graph.
    pub fn resize(&mut self, target: usize) -> Result<ResizeOutcome, GraphError> {
        if target > MAX_VERTICES {
            return Err(GraphError::invalid(format!(
                "size {target} exceeds the {MAX_VERTICES}-vertex index space"
            )));
        }

        match target.cmp(&self.len) {
            Ordering::Equal => Ok(ResizeOutcome::Unchanged),
            Ordering::Greater => {
                let added = target - self.len;
                while self.len < target {
                    self.add(None)?;
                }
                Ok(ResizeOutcome::Added(added))
            }
            Ordering::Less => {
                let removed = self.len - target;
                for slot in &mut self.slots[target..self.len] {
                    slot.reset();
                }
                self.len = target;
                for vertex in &mut self.slots[..target] {
                    vertex.drop_targets_from(target);
                }
                debug!(removed, len = self.len, "truncated vertex table");
                Ok(ResizeOutcome::Removed(removed))
            }
        }
    }
}
