//! Centered interval tree over a borrowed slice of intervals
//!
//! Each node stores the intervals that contain its center point; intervals
//! entirely to the left or right of the point go to the matching subtree.
//! Queries return slice indices so callers can keep their own bookkeeping.

use crate::emit::Interval;

#[derive(Debug)]
struct Node {
    point: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    /// Indices of intervals containing `point`
    members: Vec<usize>,
}

impl Node {
    fn build<T: Interval>(items: &[T], indices: Vec<usize>) -> Option<Box<Node>> {
        let min_start = indices.iter().map(|&i| items[i].start()).min()?;
        let max_end = indices.iter().map(|&i| items[i].end()).max()?;
        let point = min_start + (max_end - min_start) / 2;

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut members = Vec::new();

        for idx in indices {
            let interval = &items[idx];
            if interval.end() < point {
                left.push(idx);
            } else if interval.start() > point {
                right.push(idx);
            } else {
                members.push(idx);
            }
        }

        Some(Box::new(Node {
            point,
            left: Self::build(items, left),
            right: Self::build(items, right),
            members,
        }))
    }

    fn collect<T: Interval, Q: Interval + ?Sized>(
        &self,
        items: &[T],
        query: &Q,
        out: &mut Vec<usize>,
    ) {
        if query.end() < self.point {
            // Members reach the point, so only their start can miss the query
            out.extend(
                self.members
                    .iter()
                    .copied()
                    .filter(|&i| items[i].start() <= query.end()),
            );
            if let Some(left) = &self.left {
                left.collect(items, query, out);
            }
        } else if query.start() > self.point {
            out.extend(
                self.members
                    .iter()
                    .copied()
                    .filter(|&i| items[i].end() >= query.start()),
            );
            if let Some(right) = &self.right {
                right.collect(items, query, out);
            }
        } else {
            out.extend_from_slice(&self.members);
            if let Some(left) = &self.left {
                left.collect(items, query, out);
            }
            if let Some(right) = &self.right {
                right.collect(items, query, out);
            }
        }
    }
}

/// Interval tree answering "which intervals overlap this one" queries
#[derive(Debug)]
pub struct IntervalTree<'a, T: Interval> {
    items: &'a [T],
    root: Option<Box<Node>>,
}

impl<'a, T: Interval> IntervalTree<'a, T> {
    /// Build a tree over every interval in `items`
    pub fn new(items: &'a [T]) -> Self {
        let root = Node::build(items, (0..items.len()).collect());
        Self { items, root }
    }

    /// Indices of all intervals overlapping `query`, in no particular order
    pub fn overlapping<Q: Interval + ?Sized>(&self, query: &Q) -> Vec<usize> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect(self.items, query, &mut out);
        }
        out
    }

    /// Number of intervals in the tree
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the tree holds no intervals
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
