//! Ordering validation: a custom node order must be a permutation of the
//! declared nodes.

use std::collections::{BTreeMap, BTreeSet};

use causeway_core::errors::{ModelError, ModelResult};

/// Check that `proposed` lists every name in `declared` exactly once.
///
/// On failure the error carries the exact symmetric difference between the
/// two name sets and any names the proposal repeats.
pub fn validate_ordering(declared: &[String], proposed: &[String]) -> ModelResult<()> {
    let declared_set: BTreeSet<&str> = declared.iter().map(String::as_str).collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in proposed {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    let proposed_set: BTreeSet<&str> = counts.keys().copied().collect();

    let difference: Vec<String> = declared_set
        .symmetric_difference(&proposed_set)
        .map(|s| s.to_string())
        .collect();
    let duplicates: Vec<String> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(name, _)| name.to_string())
        .collect();

    if difference.is_empty() && duplicates.is_empty() {
        Ok(())
    } else {
        Err(ModelError::OrderingMismatch {
            difference,
            duplicates,
        })
    }
}
