//! Arc classification and aggregate statistics.
//!
//! [`Graph::classify`] is order-sensitive: it reports an arc between `a` and
//! `b` only when `a -> b` exists, and upgrades to [`ArcKind::TwoWay`] when
//! `b -> a` exists as well. A lone `b -> a` classifies as [`ArcKind::None`].
//! [`Graph::count`] is built on that rule. Callers that want
//! direction-agnostic connectivity use [`Graph::link`].

use serde::Serialize;

use super::Graph;
use crate::error::GraphError;
use crate::index::{IndexArg, VertexIndex};

/// Result of [`Graph::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcKind {
    None,
    OneWay,
    TwoWay,
}

/// Result of [`Graph::link`]: which directions connect two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    None,
    /// Only `a -> b`. A self-arc reports as `Forward`.
    Forward,
    /// Only `b -> a`.
    Backward,
    Both,
}

/// Aggregate arc statistics from [`Graph::count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArcStats {
    /// Stored arcs whose reverse arc is absent (self-arcs included).
    pub one_way: usize,
    /// Vertex pairs connected in both directions, each pair counted once.
    pub two_way: usize,
    /// Vertices with no outgoing arcs, regardless of incoming ones.
    pub isolated: usize,
}

impl Graph {
    /// Classify the connection from `a` to `b`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] if either index is not live.
    pub fn classify(&self, a: IndexArg, b: IndexArg) -> Result<ArcKind, GraphError> {
        let (a, b) = self.resolve_pair_or_err(a, b)?;
        Ok(self.classify_resolved(a, b))
    }

    /// Report which directions connect `a` and `b`, independent of argument
    /// order.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] if either index is not live.
    pub fn link(&self, a: IndexArg, b: IndexArg) -> Result<Link, GraphError> {
        let (a, b) = self.resolve_pair_or_err(a, b)?;
        let forward = self.slot(a).has_arc(b);
        let backward = a != b && self.slot(b).has_arc(a);
        Ok(match (forward, backward) {
            (false, false) => Link::None,
            (true, false) => Link::Forward,
            (false, true) => Link::Backward,
            (true, true) => Link::Both,
        })
    }

    /// Tally one-way arcs, two-way pairs and isolated vertices.
    #[must_use]
    pub fn count(&self) -> ArcStats {
        let mut stats = ArcStats::default();

        for (idx, vertex) in self.iter() {
            if vertex.is_isolated() {
                stats.isolated += 1;
                continue;
            }
            for &target in vertex.arcs() {
                match self.classify_resolved(idx, target) {
                    ArcKind::OneWay => stats.one_way += 1,
                    ArcKind::TwoWay => stats.two_way += 1,
                    ArcKind::None => {}
                }
            }
        }

        // Each two-way pair is discovered once from either side.
        stats.two_way /= 2;
        stats
    }

    pub(crate) fn classify_resolved(&self, a: VertexIndex, b: VertexIndex) -> ArcKind {
        if !self.slot(a).has_arc(b) {
            return ArcKind::None;
        }
        // A self-arc is a single entry; it cannot also be its own reverse.
        if a != b && self.slot(b).has_arc(a) {
            ArcKind::TwoWay
        } else {
            ArcKind::OneWay
        }
    }

    fn resolve_pair_or_err(
        &self,
        a: IndexArg,
        b: IndexArg,
    ) -> Result<(VertexIndex, VertexIndex), GraphError> {
        self.resolve_pair(a, b).ok_or_else(|| {
            let bad = if a.resolve_live(self.len).is_none() { a } else { b };
            GraphError::invalid(format!("invalid vertex index ({bad})"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mutate::ArcOp;

    fn at(raw: u16) -> IndexArg {
        IndexArg::from_raw(raw)
    }

    fn graph_with_arcs(n: usize, arcs: &[(u16, u16)]) -> Graph {
        let mut g = Graph::with_capacity(n.max(1)).expect("create");
        g.resize(n).expect("resize");
        for &(a, b) in arcs {
            g.connect(at(a), at(b), ArcOp::Add).expect("connect");
        }
        g
    }

    #[test]
    fn classify_is_order_sensitive() {
        let g = graph_with_arcs(2, &[(1, 0)]);
        assert_eq!(g.classify(at(0), at(1)).expect("classify"), ArcKind::None);
        assert_eq!(g.classify(at(1), at(0)).expect("classify"), ArcKind::OneWay);
    }

    #[test]
    fn classify_reports_two_way_from_both_sides() {
        let g = graph_with_arcs(2, &[(0, 1), (1, 0)]);
        assert_eq!(g.classify(at(0), at(1)).expect("classify"), ArcKind::TwoWay);
        assert_eq!(g.classify(at(1), at(0)).expect("classify"), ArcKind::TwoWay);
    }

    #[test]
    fn self_arc_is_one_way() {
        let g = graph_with_arcs(1, &[(0, 0)]);
        assert_eq!(g.classify(at(0), at(0)).expect("classify"), ArcKind::OneWay);
        assert_eq!(g.link(at(0), at(0)).expect("link"), Link::Forward);
    }

    #[test]
    fn classify_rejects_dead_index() {
        let g = graph_with_arcs(2, &[]);
        let err = g.classify(at(0), at(2)).expect_err("out of range");
        assert_eq!(err.to_string(), "invalid argument: invalid vertex index (2)");
        assert!(g.classify(IndexArg::Last, at(0)).is_ok());
    }

    #[test]
    fn link_is_symmetric() {
        let g = graph_with_arcs(3, &[(1, 0), (1, 2), (2, 1)]);
        assert_eq!(g.link(at(0), at(1)).expect("link"), Link::Backward);
        assert_eq!(g.link(at(1), at(0)).expect("link"), Link::Forward);
        assert_eq!(g.link(at(1), at(2)).expect("link"), Link::Both);
        assert_eq!(g.link(at(0), at(2)).expect("link"), Link::None);
    }

    #[test]
    fn count_halves_two_way_pairs() {
        let g = graph_with_arcs(3, &[(0, 1), (1, 0), (1, 2)]);
        assert_eq!(
            g.count(),
            ArcStats {
                one_way: 1,
                two_way: 1,
                isolated: 1,
            }
        );
    }

    #[test]
    fn count_treats_sinks_as_isolated() {
        let g = graph_with_arcs(4, &[(0, 1), (2, 2)]);
        let stats = g.count();
        assert_eq!(stats.isolated, 2);
        assert_eq!(stats.one_way, 2);
        assert_eq!(stats.two_way, 0);
    }

    #[test]
    fn count_on_empty_graph_is_zero() {
        let g = graph_with_arcs(0, &[]);
        assert_eq!(g.count(), ArcStats::default());
    }
}
