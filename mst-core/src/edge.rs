//! Canonical undirected-edge representation and the deterministic total
//! order used everywhere an MST algorithm needs to break a tie.

use std::cmp::Ordering;

/// An undirected, integer-weighted edge, canonicalised so `source <= target`.
///
/// Equality and ordering are purely structural: two edges compare equal iff
/// all three fields match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
}

impl Edge {
    /// Builds an edge from an unordered vertex pair, storing the smaller id
    /// as `source` and the larger as `target`.
    #[must_use]
    pub fn new(a: usize, b: usize, weight: i64) -> Self {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Packs the edge as the `[source, target, weight]` wire triple used by
    /// the MPI codec, truncating vertex ids to `i64` since graphs are
    /// bounded well under `i64::MAX` in practice.
    #[must_use]
    pub fn to_wire(self) -> [i64; 3] {
        #[expect(
            clippy::cast_possible_wrap,
            reason = "vertex ids fit comfortably in i64 for any graph this solver can hold in memory"
        )]
        [self.source as i64, self.target as i64, self.weight]
    }

    /// Rebuilds an edge from a `[source, target, weight]` wire triple.
    #[must_use]
    pub fn from_wire(triple: [i64; 3]) -> Self {
        #[expect(
            clippy::cast_sign_loss,
            reason = "wire triples always carry non-negative vertex ids produced by to_wire"
        )]
        Self {
            source: triple[0] as usize,
            target: triple[1] as usize,
            weight: triple[2],
        }
    }
}

impl Ord for Edge {
    /// The canonical edge total order: lower weight first, then lower
    /// source, then lower target. Consistent with a stable sort; edges equal
    /// on all three fields may keep arbitrary relative order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_endpoint_order() {
        let edge = Edge::new(5, 2, 7);
        assert_eq!(edge.source(), 2);
        assert_eq!(edge.target(), 5);
        assert_eq!(edge.weight(), 7);
    }

    #[test]
    fn order_compares_weight_then_source_then_target() {
        let lighter = Edge::new(9, 9, 1);
        let heavier = Edge::new(0, 0, 2);
        assert!(lighter < heavier);

        let low_source = Edge::new(0, 5, 3);
        let high_source = Edge::new(1, 2, 3);
        assert!(low_source < high_source);

        let low_target = Edge::new(0, 1, 3);
        let high_target = Edge::new(0, 2, 3);
        assert!(low_target < high_target);
    }

    #[test]
    fn wire_round_trips() {
        let edge = Edge::new(3, 11, 42);
        assert_eq!(Edge::from_wire(edge.to_wire()), edge);
    }

    #[test]
    fn sort_is_stable_under_full_ties() {
        let mut edges = vec![Edge::new(1, 2, 5), Edge::new(1, 2, 5)];
        edges.sort();
        assert_eq!(edges, vec![Edge::new(1, 2, 5), Edge::new(1, 2, 5)]);
    }
}
