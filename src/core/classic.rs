use std::collections::HashMap;

/// Quadratic comparison-swap sort, ascending, in place. Not stable.
pub fn sort(seq: &mut [i64]) {
    for i in 0..seq.len() {
        for j in 0..seq.len() {
            if seq[i] < seq[j] {
                seq.swap(i, j);
            }
        }
    }
}

/// Adjacent-pair duplicate scan. Expects `seq` sorted ascending and reports
/// each duplicated value once, at the end of its run. The lookahead past the
/// last element compares unequal to everything, so a run touching the end of
/// the sequence is still reported.
pub fn find_duplicates(seq: &[i64]) -> Vec<i64> {
    let mut duplicates = Vec::new();
    for i in 0..seq.len().saturating_sub(1) {
        if seq[i] == seq[i + 1] && seq.get(i + 2) != Some(&seq[i + 1]) {
            duplicates.push(seq[i]);
        }
    }
    duplicates
}

/// Replaces every occurrence of `old` with `new`, in place.
pub fn replace(old: i64, new: i64, seq: &mut [i64]) {
    for value in seq.iter_mut() {
        if *value == old {
            *value = new;
        }
    }
}

/// Appends `value` unconditionally. No uniqueness check is performed; callers
/// that need one want [`crate::core::strict::append_unique`].
pub fn append(value: i64, seq: &mut Vec<i64>) {
    seq.push(value);
}

/// Adjacent dedup with a growing removal window: every time `seq[i]` equals
/// `seq[i + 1]`, the `i + 1` elements starting at index `i` are removed
/// (clamped to the tail), then the scan advances. Late duplicates therefore
/// take neighbours with them, and a pair right at the end can survive.
/// The corrected behavior is [`crate::core::strict::remove_duplicates`].
pub fn remove_duplicates(seq: &mut Vec<i64>) {
    let mut i = 0;
    while i + 1 < seq.len() {
        if seq[i] == seq[i + 1] {
            let end = (2 * i + 1).min(seq.len());
            seq.drain(i..end);
        }
        i += 1;
    }
}

/// Dedups `seq` through [`remove_duplicates`] and returns a snapshot of the
/// result. The source is mutated as well; for a true copy-then-dedup use
/// [`crate::core::strict::dedup_copied`].
pub fn dedup_into_new(seq: &mut Vec<i64>) -> Vec<i64> {
    remove_duplicates(seq);
    seq.clone()
}

/// Multiplies every element by the literal 10 into a new vector. The `factor`
/// argument is accepted and ignored.
pub fn multiply_all(seq: &[i64], _factor: i64) -> Vec<i64> {
    seq.iter().map(|&value| value * 10).collect()
}

pub fn reverse_as_mutable(seq: &[i64]) -> Vec<i64> {
    reversed(seq)
}

/// Same behavior as [`reverse_as_mutable`]: neither variant touches its input.
pub fn reverse_as_immutable(seq: &[i64]) -> Vec<i64> {
    reversed(seq)
}

fn reversed(seq: &[i64]) -> Vec<i64> {
    seq.iter().rev().copied().collect()
}

/// Counts adjacent-equal transitions in a sorted sequence, keyed by a display
/// label with a trailing space ("43 repeated "). A run of length n counts as
/// n - 1, not as n occurrences. Total counts live in
/// [`crate::core::strict::count_duplicates`].
pub fn find_duplicates_and_count(seq: &[i64]) -> HashMap<String, usize> {
    let mut duplicates = HashMap::new();
    for i in 0..seq.len().saturating_sub(1) {
        if seq[i] == seq[i + 1] {
            *duplicates
                .entry(format!("{} repeated ", seq[i]))
                .or_insert(0) += 1;
        }
    }
    duplicates
}
