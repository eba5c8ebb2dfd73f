//! Overlap resolution
//!
//! Reduces a set of intervals to a non-overlapping subset by greedy
//! longest-first selection: candidates are visited by descending size
//! (ties by ascending start), each one is kept unless an already kept
//! interval overlaps it, and the survivors are returned by ascending start.
//!
//! Whenever two intervals overlap the longer one wins. There is no global
//! leftmost guarantee: a short match can survive next to a longer one that
//! lost against a third, even longer, match further right.

mod interval_tree;

pub use interval_tree::IntervalTree;

use crate::emit::Interval;
use std::cmp::Ordering;

/// Order used for selection: larger first, then leftmost
fn by_priority<T: Interval>(a: &T, b: &T) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.start().cmp(&b.start()))
}

/// Keep the longest intervals so that no two survivors overlap.
///
/// Identical ranges keep their input order, so the first one wins.
pub fn remove_overlaps<T: Interval>(intervals: Vec<T>) -> Vec<T> {
    let total = intervals.len();
    if total < 2 {
        return intervals;
    }

    let mut accepted = {
        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by(|&a, &b| by_priority(&intervals[a], &intervals[b]));

        let tree = IntervalTree::new(&intervals);
        let mut discarded = vec![false; total];
        let mut accepted = Vec::new();

        for idx in order {
            if discarded[idx] {
                continue;
            }
            accepted.push(idx);
            for other in tree.overlapping(&intervals[idx]) {
                if other != idx {
                    discarded[other] = true;
                }
            }
        }
        accepted
    };

    accepted.sort_by_key(|&idx| intervals[idx].start());

    if accepted.len() < total {
        tracing::debug!(
            kept = accepted.len(),
            discarded = total - accepted.len(),
            "resolved overlapping emits"
        );
    }

    let mut slots: Vec<Option<T>> = intervals.into_iter().map(Some).collect();
    accepted
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}
