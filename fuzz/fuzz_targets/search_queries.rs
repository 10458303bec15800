// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tree construction and threshold queries.
//!
//! Builds a tree from an arbitrary corpus and cross-checks every query
//! against a brute-force scan. If the pruning ever skips a true match or
//! invents a false one, this target finds the corpus that proves it.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use neomys::{levenshtein, BkTree, Levenshtein};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    corpus: Vec<String>,
    query: String,
    threshold: u8,
}

fuzz_target!(|input: SearchInput| {
    // Cap corpus and word sizes to keep each run fast
    let corpus: Vec<String> = input
        .corpus
        .into_iter()
        .take(40)
        .map(|word| word.chars().take(20).collect())
        .collect();
    let query: String = input.query.chars().take(20).collect();
    let threshold = usize::from(input.threshold % 8);

    let tree = BkTree::build(corpus.iter().cloned(), Levenshtein);

    // INVARIANT 1: the tree holds each distinct item exactly once
    let mut distinct = corpus.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(tree.len(), distinct.len());

    // INVARIANT 2: queries never panic and never err on valid thresholds
    let hits = tree.find(&query, threshold as i64).unwrap();

    // INVARIANT 3: exactly the brute-force result set, no duplicates
    let mut actual: Vec<&String> = hits.clone();
    actual.sort_unstable();
    actual.dedup();
    assert_eq!(actual.len(), hits.len(), "duplicate items in results");

    let expected: Vec<&String> = distinct
        .iter()
        .filter(|word| levenshtein(word, &query) <= threshold)
        .collect();
    assert_eq!(actual, expected, "tree disagrees with brute force");

    // INVARIANT 4: the lazy traversal is the same query, pulled slowly
    let lazy: Vec<&String> = tree.find_iter(&query, threshold as i64).unwrap().collect();
    assert_eq!(lazy, hits);

    // INVARIANT 5: negative thresholds are rejected, not absorbed
    assert!(tree.find(&query, -1).is_err());
});
