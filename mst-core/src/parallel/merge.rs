//! Two-way stable merge on the canonical edge order, shared by parallel
//! Kruskal's per-step reduction.

use crate::edge::Edge;

/// Merges two edge lists that are each already sorted by the canonical
/// edge order, preserving that order. Ties are broken towards `right`, via a
/// strict less-than comparison on the left element.
pub(crate) fn merge_sorted(left: &[Edge], right: &[Edge]) -> Vec<Edge> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() || j < right.len() {
        let take_left = j >= right.len() || (i < left.len() && left[i] < right[j]);
        if take_left {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_two_sorted_lists_into_order() {
        let left = vec![Edge::new(0, 1, 1), Edge::new(0, 2, 5)];
        let right = vec![Edge::new(1, 2, 2), Edge::new(2, 3, 4)];
        let merged = merge_sorted(&left, &right);
        let mut expected = merged.clone();
        expected.sort_unstable();
        assert_eq!(merged, expected);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn merging_a_forest_with_itself_is_a_no_op_under_dedup() {
        // Property #7: a forest merged with itself yields the same
        // multiset of edges (duplicated), and re-selecting via union-find
        // collapses back to the original forest.
        let forest = vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)];
        let merged = merge_sorted(&forest, &forest);
        assert_eq!(merged.len(), forest.len() * 2);
        for edge in &forest {
            assert_eq!(merged.iter().filter(|e| *e == edge).count(), 2);
        }
    }

    #[test]
    fn empty_inputs_are_handled() {
        assert!(merge_sorted(&[], &[]).is_empty());
        let right = vec![Edge::new(0, 1, 1)];
        assert_eq!(merge_sorted(&[], &right), right);
    }
}
