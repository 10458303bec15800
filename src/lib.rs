// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy membership search over metric spaces using BK-trees.
//!
//! Index a static collection of items once, then answer "everything within
//! distance `t` of this query" without scanning the whole collection. The
//! index exploits the triangle inequality to prune entire subtrees, so it
//! works with any real metric - the bundled [`Levenshtein`] edit distance,
//! or any closure satisfying the metric laws.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ levenshtein.rs │────▶│  metric.rs  │────▶│   tree.rs    │
//! │ (edit distance,│     │ (Metric,    │     │ (BkTree,     │
//! │  bounded check)│     │ Levenshtein)│     │  build)      │
//! └────────────────┘     └─────────────┘     └──────┬───────┘
//!                                                   │
//!                        ┌─────────────┐     ┌──────▼───────┐
//!                        │ contracts.rs│     │  search.rs   │
//!                        │ (debug-only │     │ (find,       │
//!                        │ metric laws)│     │  find_iter)  │
//!                        └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use neomys::{BkTree, Levenshtein};
//!
//! let words = ["abyss", "almond", "clump", "cubic", "cuba", "adopt",
//!              "abused", "chronic", "abutted", "cube", "clown", "admix",
//!              "almsman"];
//! let tree = BkTree::build(words, Levenshtein);
//!
//! // Eager: all words within 3 edits of "cuba", in traversal order
//! let hits = tree.find(&"cuba", 3).unwrap();
//! assert_eq!(hits, vec![&"clump", &"cubic", &"cuba", &"cube"]);
//!
//! // Lazy: same items, pulled on demand
//! let first = tree.find_iter(&"cuba", 3).unwrap().next();
//! assert_eq!(first, Some(&"clump"));
//! ```
//!
//! The tree is immutable once built; concurrent queries from any number of
//! threads are safe without locks.

// Module declarations
pub mod contracts;
mod levenshtein;
mod metric;
mod search;
mod tree;

// Re-exports for public API
pub use levenshtein::{levenshtein, levenshtein_within};
pub use metric::{Levenshtein, Metric};
pub use search::{Find, QueryError};
pub use tree::BkTree;
