//! The comparison report: three partitions shaped like the input trees.

use std::collections::BTreeMap;

use confguard_types::ConfigValue;
use serde::Serialize;

/// One partition of a report: keys mapped to what was found under them.
///
/// `BTreeMap` keeps partition entries sorted, so reports are reproducible
/// regardless of how the source documents ordered their keys.
pub type Partition = BTreeMap<String, DiffValue>;

/// A single reported entry within a partition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffValue {
    /// A whole subtree recorded wholesale: the key existed on one side only,
    /// so there is nothing to diff field-by-field.
    Value(ConfigValue),
    /// A value conflict: both sides have the key, with unequal values (or a
    /// map on one side and a non-map on the other).
    Pair {
        left: ConfigValue,
        right: ConfigValue,
    },
    /// A nested partition: both sides have the key as a map, and the
    /// divergence lives deeper down.
    Nested(Partition),
}

/// The result of comparing two configuration trees.
///
/// Each partition is either empty or contains exactly the divergent keys,
/// nested to mirror where in the tree the divergence sits. Two identical
/// trees produce a report with all three partitions empty at every level.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DiffReport {
    /// Keys present in *left* but absent from *right*.
    pub extra_keys: Partition,
    /// Keys present in *right* but absent from *left*.
    pub missing_keys: Partition,
    /// Keys present in both sides with unequal values.
    pub mismatched_values: Partition,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two trees were identical.
    pub fn is_empty(&self) -> bool {
        self.extra_keys.is_empty()
            && self.missing_keys.is_empty()
            && self.mismatched_values.is_empty()
    }

    /// Number of extra keys, counted at the leaves.
    pub fn extra_count(&self) -> usize {
        count_leaves(&self.extra_keys)
    }

    /// Number of missing keys, counted at the leaves.
    pub fn missing_count(&self) -> usize {
        count_leaves(&self.missing_keys)
    }

    /// Number of mismatched values, counted at the leaves.
    pub fn mismatch_count(&self) -> usize {
        count_leaves(&self.mismatched_values)
    }
}

fn count_leaves(partition: &Partition) -> usize {
    partition
        .values()
        .map(|entry| match entry {
            DiffValue::Value(_) | DiffValue::Pair { .. } => 1,
            DiffValue::Nested(sub) => count_leaves(sub),
        })
        .sum()
}
