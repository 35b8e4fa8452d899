//! Line-oriented text rendering of a [`DiffReport`].
//!
//! One section per partition, in the order missing / extra / mismatched.
//! Nested partitions indent two spaces per level; a whole subtree recorded
//! under an absent key prints on a single line.

use std::fmt::Write;

use crate::report::{DiffReport, DiffValue, Partition};

const INDENT: &str = "  ";

/// Render one partition, indented `depth` levels. Each line is terminated
/// with a newline; an empty partition renders as the empty string.
pub fn partition_to_text(partition: &Partition, depth: usize) -> String {
    let mut out = String::new();
    write_partition(&mut out, partition, depth);
    out
}

fn write_partition(out: &mut String, partition: &Partition, depth: usize) {
    let pad = INDENT.repeat(depth);
    for (key, entry) in partition {
        match entry {
            DiffValue::Value(value) => {
                let _ = writeln!(out, "{pad}{key}: {value}");
            }
            DiffValue::Pair { left, right } => {
                let _ = writeln!(out, "{pad}{key}: left = {left}, right = {right}");
            }
            DiffValue::Nested(sub) => {
                let _ = writeln!(out, "{pad}{key}:");
                write_partition(out, sub, depth + 1);
            }
        }
    }
}

impl DiffReport {
    /// The full text report: three titled sections, `None` when a
    /// partition is empty.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let sections = [
            ("Missing keys", &self.missing_keys),
            ("Extra keys", &self.extra_keys),
            ("Mismatched values", &self.mismatched_values),
        ];
        for (title, partition) in sections {
            let _ = writeln!(out, "{title}:");
            if partition.is_empty() {
                let _ = writeln!(out, "{INDENT}None");
            } else {
                write_partition(&mut out, partition, 1);
            }
        }
        out
    }
}
