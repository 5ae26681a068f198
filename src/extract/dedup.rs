//! Order-preserving deduplication.
//!
//! An item survives only if its key has not appeared earlier in the sequence
//! being built. Applied after extraction and again after coordination
//! merging, since merging can create new collisions.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::extract::candidates::AspectCandidate;

/// Keep the first item for each key, preserving order.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen: FxHashSet<K> = FxHashSet::default();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(key(&item)) {
            out.push(item);
        }
    }
    out
}

/// Deduplicate candidates on their normalized form, first occurrence wins.
pub fn dedup_candidates(candidates: Vec<AspectCandidate>) -> Vec<AspectCandidate> {
    dedup_by_key(candidates, |c| c.norm.clone())
}
