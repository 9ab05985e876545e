//! Corrected counterparts for the quirks kept in [`crate::core::classic`]:
//! one survivor per run, a dedup that really copies, an append that really
//! checks uniqueness, a factor that is really applied, a reverse pair whose
//! names match their behavior, and total occurrence counts.

use std::collections::BTreeMap;

/// Keeps one survivor per run of adjacent equals. Full dedup on sorted input.
pub fn remove_duplicates(seq: &mut Vec<i64>) {
    seq.dedup();
}

/// Non-destructive dedup: the input stays untouched.
pub fn dedup_copied(seq: &[i64]) -> Vec<i64> {
    let mut deduped = seq.to_vec();
    deduped.dedup();
    deduped
}

/// Appends `value` only when it is not already present. Returns whether the
/// sequence grew.
pub fn append_unique(value: i64, seq: &mut Vec<i64>) -> bool {
    if seq.contains(&value) {
        return false;
    }
    seq.push(value);
    true
}

pub fn multiply_all(seq: &[i64], factor: i64) -> Vec<i64> {
    seq.iter().map(|&value| value * factor).collect()
}

pub fn reversed(seq: &[i64]) -> Vec<i64> {
    seq.iter().rev().copied().collect()
}

pub fn reverse_in_place(seq: &mut [i64]) {
    seq.reverse();
}

/// Total occurrence count for every value appearing more than once, in any
/// input order. Keyed by value, so iteration order is deterministic.
pub fn count_duplicates(seq: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &value in seq {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count > 1);
    counts
}
