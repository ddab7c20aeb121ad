//! Frequency helpers shared by the stats groups.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value. Ties are broken by first-encountered order,
/// so the result is deterministic for a given row order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (i, v) in values.into_iter().enumerate() {
        counts.entry(v).or_insert((0, i)).0 += 1;
    }

    counts
        .into_iter()
        .min_by_key(|&(_, (count, first))| (Reverse(count), first))
        .map(|(v, _)| v)
}

/// Distinct values with their counts, descending by frequency.
/// Equal frequencies keep first-encountered order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (i, v) in values.into_iter().enumerate() {
        counts.entry(v).or_insert((0, i)).0 += 1;
    }

    let mut out: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(v, (count, first))| (v, count, first))
        .collect();
    out.sort_by_key(|&(_, count, first)| (Reverse(count), first));

    out.into_iter().map(|(v, count, _)| (v, count)).collect()
}
