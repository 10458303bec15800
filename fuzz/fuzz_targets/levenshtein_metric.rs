// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance metric.
//!
//! The tree's pruning is only as sound as the metric laws, so this target
//! hammers identity, symmetry, the triangle inequality, and the agreement
//! between the exact and bounded implementations on arbitrary UTF-8.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use neomys::{levenshtein, levenshtein_within};

/// Three arbitrary strings: pairs exercise most laws, the triple exercises
/// the triangle inequality.
#[derive(Debug, Arbitrary)]
struct MetricInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fuzz_target!(|input: MetricInput| {
    // Cap lengths to keep the O(nm) DP from timing out
    let a: String = input.a.chars().take(60).collect();
    let b: String = input.b.chars().take(60).collect();
    let c: String = input.c.chars().take(60).collect();

    let d_ab = levenshtein(&a, &b);
    let d_ba = levenshtein(&b, &a);
    let d_ac = levenshtein(&a, &c);
    let d_bc = levenshtein(&b, &c);

    // INVARIANT 1: identity - self-distance is zero
    assert_eq!(levenshtein(&a, &a), 0, "d(a, a) != 0 for a={a:?}");

    // INVARIANT 2: symmetry
    assert_eq!(d_ab, d_ba, "asymmetric for a={a:?}, b={b:?}");

    // INVARIANT 3: separation - zero distance only between equal strings
    assert_eq!(d_ab == 0, a == b, "separation violated for a={a:?}, b={b:?}");

    // INVARIANT 4: triangle inequality
    assert!(
        d_ac <= d_ab + d_bc,
        "triangle violated: d(a,c)={d_ac} > d(a,b)={d_ab} + d(b,c)={d_bc}"
    );

    // INVARIANT 5: length bounds
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(la.abs_diff(lb) <= d_ab, "below length lower bound");
    assert!(d_ab <= la.max(lb), "above length upper bound");

    // INVARIANT 6: the bounded check is exact, early exits included
    let max = usize::from(input.max);
    assert_eq!(
        levenshtein_within(&a, &b, max),
        d_ab <= max,
        "within({a:?}, {b:?}, {max}) disagrees with distance {d_ab}"
    );
});
