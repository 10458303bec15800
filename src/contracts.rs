// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the metric laws.
//!
//! The tree assumes its metric satisfies identity, symmetry, and the triangle
//! inequality, and never verifies this in release builds - a broken metric
//! yields a structurally valid tree that quietly returns wrong results. These
//! contracts spot-check the first two laws during insertion:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure during development**: a bad metric fails the first
//!    test that builds a tree with it, not the hundredth query against it
//!
//! The triangle inequality is not spot-checked here - doing it honestly needs
//! item triples the insertion path never has in hand. The property suite
//! covers it for the bundled metric.

use crate::metric::Metric;

/// Check the identity law for one item: `d(x, x) = 0`.
///
/// # Panics (debug builds only)
/// Panics if the metric reports a nonzero self-distance.
#[inline]
pub fn check_metric_identity<I, M: Metric<I>>(metric: &M, item: &I) {
    debug_assert!(
        metric.distance(item, item) == 0,
        "metric contract violation: d(x, x) != 0"
    );
}

/// Check the symmetry law for one computed distance: `d(a, b) = d(b, a)`.
///
/// `dist` is the already-computed forward distance, so debug builds pay one
/// extra metric call per check rather than two.
///
/// # Panics (debug builds only)
/// Panics if the reverse distance disagrees with `dist`.
#[inline]
pub fn check_metric_symmetry<I, M: Metric<I>>(metric: &M, a: &I, b: &I, dist: usize) {
    debug_assert!(
        metric.distance(b, a) == dist,
        "metric contract violation: d(b, a) = {} but d(a, b) = {}",
        metric.distance(b, a),
        dist
    );
}
