//! Diff engine for ConfigGuard.
//!
//! Compares two configuration trees and produces a structured report
//! classifying every divergent key as missing, extra, or value-mismatched.
//! The report mirrors the nesting of the inputs: a difference three maps
//! deep shows up three maps deep in the report, never flattened.
//!
//! # Key Types
//!
//! - [`DiffReport`] -- The three-partition comparison result
//! - [`DiffValue`] -- One reported entry (wholesale subtree, value pair, or nested partition)
//! - [`compare`] -- The comparison itself

pub mod compare;
pub mod render;
pub mod report;

pub use compare::compare;
pub use report::{DiffReport, DiffValue, Partition};
