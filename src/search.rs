// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Threshold queries over a built tree.
//!
//! Both traversals visit the same nodes in the same order: pre-order from the
//! root, children in attach order. At each visited node the query distance is
//! computed once; the node is emitted when `dist <= threshold`, and an edge is
//! descended only when its label lies in `[dist - threshold, dist + threshold]`.
//!
//! Why skipping the other edges is safe: every item behind an edge labeled `L`
//! is at exactly distance `L` from the edge's parent (the routing invariant,
//! see [`crate::tree`]). For such an item `y` and query `q`, the triangle
//! inequality gives `|d(parent, q) - d(parent, y)| <= d(y, q)`, so when `L`
//! falls outside the window, `d(y, q) > threshold` for the direct child - and
//! recursively for everything below it.
//!
//! [`BkTree::find`] materializes the matches; [`BkTree::find_iter`] is the
//! lazy equivalent, an explicit-stack iterator that does just enough work per
//! `next()` to reach the following match. A full drain performs exactly the
//! work `find` does, and dropping the iterator early costs nothing - queries
//! never touch tree state.

use std::fmt;

use crate::metric::Metric;
use crate::tree::{BkTree, NodeId};

/// Error type for malformed queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The threshold was negative. Distances are non-negative, so there is
    /// no sensible result set; rejecting loudly beats returning garbage.
    NegativeThreshold { threshold: i64 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NegativeThreshold { threshold } => {
                write!(f, "query threshold {} is negative", threshold)
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Reject negative thresholds, widen valid ones to the distance domain.
fn validate_threshold(threshold: i64) -> Result<usize, QueryError> {
    usize::try_from(threshold).map_err(|_| QueryError::NegativeThreshold { threshold })
}

impl<I, M: Metric<I>> BkTree<I, M> {
    /// Every indexed item within `threshold` of `query`, in deterministic
    /// pre-order (a matching node precedes its matching descendants; children
    /// in attach order).
    ///
    /// `threshold` 0 returns only items the metric places at distance 0 from
    /// the query - for edit distance, exact equals. An empty tree returns an
    /// empty vec. A negative threshold is an error, even on an empty tree.
    pub fn find(&self, query: &I, threshold: i64) -> Result<Vec<&I>, QueryError> {
        let threshold = validate_threshold(threshold)?;
        let mut matches = Vec::new();
        if !self.nodes.is_empty() {
            self.collect(NodeId::ROOT, query, threshold, &mut matches);
        }
        Ok(matches)
    }

    fn collect<'a>(&'a self, id: NodeId, query: &I, threshold: usize, out: &mut Vec<&'a I>) {
        let node = &self.nodes[id.as_usize()];
        let dist = self.metric.distance(&node.item, query);
        if dist <= threshold {
            out.push(&node.item);
        }
        let lo = dist.saturating_sub(threshold);
        let hi = dist + threshold;
        for edge in &node.edges {
            if (lo..=hi).contains(&edge.label) {
                self.collect(edge.child, query, threshold, out);
            }
        }
    }

    /// Lazy [`find`](Self::find): yields the identical items in the identical
    /// order, but pulls them on demand.
    ///
    /// Each call returns a fresh iterator starting from the root; stop
    /// pulling to abandon the query early. Distances are computed per visited
    /// node exactly as in `find`, so draining the iterator costs the same as
    /// the eager call.
    pub fn find_iter<'a>(
        &'a self,
        query: &'a I,
        threshold: i64,
    ) -> Result<Find<'a, I, M>, QueryError> {
        let threshold = validate_threshold(threshold)?;
        let pending = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![NodeId::ROOT]
        };
        Ok(Find {
            tree: self,
            query,
            threshold,
            pending,
        })
    }
}

/// Lazy traversal state: the nodes still to visit, nearest-to-emission first.
///
/// Children are pushed in reverse attach order, so popping reproduces the
/// recursive pre-order of [`BkTree::find`] exactly.
#[derive(Debug)]
pub struct Find<'a, I, M> {
    tree: &'a BkTree<I, M>,
    query: &'a I,
    threshold: usize,
    pending: Vec<NodeId>,
}

impl<'a, I, M: Metric<I>> Iterator for Find<'a, I, M> {
    type Item = &'a I;

    fn next(&mut self) -> Option<&'a I> {
        while let Some(id) = self.pending.pop() {
            let node = &self.tree.nodes[id.as_usize()];
            let dist = self.tree.metric.distance(&node.item, self.query);
            let lo = dist.saturating_sub(self.threshold);
            let hi = dist + self.threshold;
            for edge in node.edges.iter().rev() {
                if (lo..=hi).contains(&edge.label) {
                    self.pending.push(edge.child);
                }
            }
            if dist <= self.threshold {
                return Some(&node.item);
            }
        }
        None
    }
}
