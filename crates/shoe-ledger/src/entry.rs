//! The entry type recorded by the counting ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_increment;

/// One recorded count adjustment.
///
/// The label is an opaque display tag (a card rank, or "Low"/"Hi"); the
/// value is the entry's signed contribution to the running count. Entries
/// are immutable once created and belong to either the ledger's history
/// or its redo buffer at any given time, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountEntry {
    label: String,
    value: f64,
}

impl CountEntry {
    /// Create a new entry. The label should be a short, non-empty
    /// display tag; the value may be positive, negative, or zero.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The display tag this adjustment was recorded under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The signed count contribution.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for CountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, format_increment(self.value))
    }
}
