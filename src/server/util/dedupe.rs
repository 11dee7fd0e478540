use std::{collections::HashSet, hash::Hash};

/// Keeps the candidates whose uniqueness key is not already present.
///
/// `existing` holds the keys already stored. Each kept candidate's key is added to it, so a
/// second candidate with the same key in one batch is dropped as well. Candidates for which
/// `key` returns `None` have no uniqueness constraint and are always kept.
///
/// # Arguments
/// - `candidates` - Rows that may need inserting, in insertion order
/// - `existing` - Keys already present in storage
/// - `key` - Extracts the uniqueness key of a candidate
///
/// # Returns
/// The candidates to insert, in their original order
pub fn insert_if_absent<T, K, F>(
    candidates: impl IntoIterator<Item = T>,
    existing: &mut HashSet<K>,
    key: F,
) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    candidates
        .into_iter()
        .filter(|candidate| match key(candidate) {
            Some(k) => existing.insert(k),
            None => true,
        })
        .collect()
}
