//! A single vertex and its outgoing arc list.

use crate::error::GraphError;
use crate::index::VertexIndex;

/// A vertex: the ordered, duplicate-free list of targets its arcs point at.
///
/// Arcs are stored only on their source vertex. Self-arcs are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    arcs: Vec<VertexIndex>,
}

impl Vertex {
    /// An isolated vertex (no outgoing arcs).
    #[must_use]
    pub const fn new() -> Self {
        Self { arcs: Vec::new() }
    }

    /// Build a vertex from a copy of `arcs`.
    ///
    /// Repeated targets are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AllocationFailure`] if the arc list cannot be
    /// allocated.
    pub fn with_arcs(arcs: &[VertexIndex]) -> Result<Self, GraphError> {
        let mut list = Vec::new();
        list.try_reserve_exact(arcs.len())
            .map_err(|e| GraphError::alloc("vertex arc list", e))?;
        for &target in arcs {
            if !list.contains(&target) {
                list.push(target);
            }
        }
        Ok(Self { arcs: list })
    }

    /// Outgoing arc targets in stored order.
    #[must_use]
    pub fn arcs(&self) -> &[VertexIndex] {
        &self.arcs
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.arcs.len()
    }

    /// A vertex with no outgoing arcs, regardless of incoming ones.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.arcs.is_empty()
    }

    #[must_use]
    pub fn has_arc(&self, target: VertexIndex) -> bool {
        self.arcs.contains(&target)
    }

    /// Append `target` unless already present. Returns whether it was added.
    ///
    /// Storage grows by one element at a time.
    pub(crate) fn insert_arc(&mut self, target: VertexIndex) -> Result<bool, GraphError> {
        if self.has_arc(target) {
            return Ok(false);
        }
        self.arcs
            .try_reserve_exact(1)
            .map_err(|e| GraphError::alloc("vertex arc list", e))?;
        self.arcs.push(target);
        Ok(true)
    }

    /// Remove `target`, shifting later arcs left. Returns whether it was present.
    pub(crate) fn remove_arc(&mut self, target: VertexIndex) -> bool {
        match self.arcs.iter().position(|&t| t == target) {
            Some(pos) => {
                self.arcs.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Renumber arcs after vertex `deleted` left the graph.
    ///
    /// Runs the three deletion fix-ups in order: drop arcs into the deleted
    /// vertex, shift every larger target down by one, then remove any
    /// duplicates the shift produced (all pairs, keeping the first).
    pub(crate) fn reindex_after_delete(&mut self, deleted: VertexIndex) {
        self.remove_arc(deleted);

        for target in &mut self.arcs {
            if *target > deleted {
                *target = target.pred();
            }
        }

        self.dedup_all_pairs();
    }

    fn dedup_all_pairs(&mut self) {
        let mut j = 0;
        while j < self.arcs.len() {
            let value = self.arcs[j];
            let mut k = j + 1;
            while k < self.arcs.len() {
                if self.arcs[k] == value {
                    self.arcs.remove(k);
                } else {
                    k += 1;
                }
            }
            j += 1;
        }
    }

    /// Drop every arc, releasing the list's storage.
    pub(crate) fn reset(&mut self) {
        self.arcs = Vec::new();
    }

    /// Drop every arc whose target is `bound` or higher.
    pub(crate) fn drop_targets_from(&mut self, bound: usize) {
        self.arcs.retain(|t| t.as_usize() < bound);
    }

    pub(crate) fn highest_target(&self) -> Option<VertexIndex> {
        self.arcs.iter().copied().max()
    }
}
