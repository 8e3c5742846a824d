//! Structural sanity checks a caller runs on a freshly decoded [`Root`].
//!
//! These aren't part of decoding: a graph that fails them still decoded without error. They live
//! here so that callers agree on what a usable graph looks like.

use std::fmt;

use crate::schema::{Container, DataOrError, Root};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root has no container data, or the container holds no entries.
    NoEntries,
    /// The first entry has no name.
    FirstEntryUnnamed,
    /// No entry holds any records.
    NoRecords,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvariantViolation::NoEntries => f.write_str("Container data has no entries"),
            InvariantViolation::FirstEntryUnnamed => f.write_str("First entry has no name"),
            InvariantViolation::NoRecords => f.write_str("No entry has any records"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Check that the root's container data has entries, that the first one is named, and that at
/// least one of them has records.
pub fn check_root(root: &Root) -> Result<(), InvariantViolation> {
    let entries = root
        .p6()
        .and_then(DataOrError::data)
        .map(Container::p1)
        .unwrap_or(&[]);
    let first = entries.first().ok_or(InvariantViolation::NoEntries)?;
    if first.p1().is_none() {
        return Err(InvariantViolation::FirstEntryUnnamed);
    }
    if entries.iter().all(|e| e.p2().is_empty()) {
        return Err(InvariantViolation::NoRecords);
    }
    Ok(())
}
