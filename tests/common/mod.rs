//! Shared test utilities and fixtures.

#![allow(dead_code)]

use neomys::{BkTree, Levenshtein};

// ============================================================================
// FIXTURE CORPUS
// ============================================================================

/// The thirteen-word corpus used across the scenario tests.
///
/// Chosen so that "cuba" and "abyss" queries have hand-checkable result sets
/// at small thresholds.
pub const WORDS: &[&str] = &[
    "abyss", "almond", "clump", "cubic", "cuba", "adopt", "abused", "chronic", "abutted", "cube",
    "clown", "admix", "almsman",
];

/// Build the fixture tree in canonical corpus order.
pub fn words_tree() -> BkTree<&'static str, Levenshtein> {
    BkTree::build(WORDS.iter().copied(), Levenshtein)
}

/// Exhaustive scan: the result set `find` must reproduce, as a sorted vec.
pub fn brute_force_matches(corpus: &[&'static str], query: &str, threshold: usize) -> Vec<&'static str> {
    let mut hits: Vec<&'static str> = corpus
        .iter()
        .copied()
        .filter(|word| neomys::levenshtein(word, query) <= threshold)
        .collect();
    hits.sort_unstable();
    hits.dedup();
    hits
}

/// Sort a `find` result for set comparison against the brute-force scan.
pub fn sorted(hits: Vec<&&'static str>) -> Vec<&'static str> {
    let mut hits: Vec<&'static str> = hits.into_iter().copied().collect();
    hits.sort_unstable();
    hits
}
