//! Recursive tree comparison.
//!
//! Walks two configuration maps level by level, classifying every key into
//! one of the three report partitions. Keys present on one side only are
//! recorded wholesale with their full subtree; keys that are maps on both
//! sides are recursed into; everything else is an equality check.

use confguard_types::{ConfigMap, ConfigValue};

use crate::report::{DiffReport, DiffValue};

/// Compare two configuration trees and produce a [`DiffReport`].
///
/// Pure and total: borrows both trees immutably, never fails for finite
/// acyclic inputs, and terminates after visiting each key once. Recursion
/// depth equals the nesting depth of the inputs; the loader caps document
/// depth, so trees arriving through it cannot exhaust the stack.
///
/// Classification per key:
/// - only in `left` -> `extra_keys`, subtree recorded wholesale
/// - only in `right` -> `missing_keys`, subtree recorded wholesale
/// - map on both sides -> recurse; each non-empty sub-partition is inserted
///   under the key in the corresponding partition at this level
/// - anything else -> `mismatched_values` if unequal, including the case
///   where one side is a map and the other is not (a type conflict is a
///   value mismatch, never a structural recursion)
pub fn compare(left: &ConfigMap, right: &ConfigMap) -> DiffReport {
    let mut report = DiffReport::new();

    // Keys on the left: extra, recursed, or mismatched.
    for (key, left_val) in left {
        match right.get(key) {
            None => {
                report
                    .extra_keys
                    .insert(key.clone(), DiffValue::Value(left_val.clone()));
            }
            Some(right_val) => match (left_val, right_val) {
                (ConfigValue::Map(left_sub), ConfigValue::Map(right_sub)) => {
                    let sub = compare(left_sub, right_sub);
                    if !sub.extra_keys.is_empty() {
                        report
                            .extra_keys
                            .insert(key.clone(), DiffValue::Nested(sub.extra_keys));
                    }
                    if !sub.missing_keys.is_empty() {
                        report
                            .missing_keys
                            .insert(key.clone(), DiffValue::Nested(sub.missing_keys));
                    }
                    if !sub.mismatched_values.is_empty() {
                        report
                            .mismatched_values
                            .insert(key.clone(), DiffValue::Nested(sub.mismatched_values));
                    }
                }
                _ => {
                    if left_val != right_val {
                        report.mismatched_values.insert(
                            key.clone(),
                            DiffValue::Pair {
                                left: left_val.clone(),
                                right: right_val.clone(),
                            },
                        );
                    }
                }
            },
        }
    }

    // Keys only on the right: missing from the left.
    for (key, right_val) in right {
        if !left.contains_key(key) {
            report
                .missing_keys
                .insert(key.clone(), DiffValue::Value(right_val.clone()));
        }
    }

    report
}
