//! The counting ledger: one shoe's append-only history with bounded
//! undo/redo.
//!
//! [`CountingLedger`] owns the chronological entry history and the redo
//! buffer. All mutation goes through four atomic operations (`record`,
//! `undo`, `redo`, `reset`); every derived quantity is computed on read.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{LedgerConfig, CARDS_PER_DECK, TRUE_COUNT_DECK_FLOOR};
use crate::entry::CountEntry;
use crate::error::ConfigError;

/// Append-only count history for one shoe, with bounded undo/redo.
///
/// `record` is the only forward transition; `undo` and `redo` form an
/// invertible pair governed by two policy bounds from [`LedgerConfig`]:
///
/// - at most `undo_budget` undos since the last record or reset;
/// - at most `redo_cap` undone entries retained, oldest dropped first.
///
/// Mutations never fail. An undo past the budget (or past an empty
/// history) and a redo from an empty buffer return `None` and leave the
/// ledger untouched, so callers may invoke them unconditionally.
#[derive(Clone, Debug)]
pub struct CountingLedger {
    config: LedgerConfig,
    /// Chronological history, oldest first. An entry lives here or in
    /// the redo buffer, never both.
    history: Vec<CountEntry>,
    /// Undone entries eligible for replay, most recently undone last.
    redo: VecDeque<CountEntry>,
    /// Undos spent since the last record or reset.
    undos_used: u32,
}

impl Default for CountingLedger {
    fn default() -> Self {
        Self {
            config: LedgerConfig::default(),
            history: Vec::new(),
            redo: VecDeque::new(),
            undos_used: 0,
        }
    }
}

impl CountingLedger {
    /// Create a ledger from a validated configuration.
    pub fn new(config: LedgerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            history: Vec::new(),
            redo: VecDeque::new(),
            undos_used: 0,
        })
    }

    /// Create a ledger for a shoe of `decks_total` decks with the
    /// default undo/redo policy.
    pub fn with_decks(decks_total: f64) -> Result<Self, ConfigError> {
        Self::new(LedgerConfig::with_decks(decks_total))
    }

    /// The configuration this ledger was created with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Record a count adjustment.
    ///
    /// Appends an entry to the history, discards any pending redo
    /// lineage, and restores the full undo budget. Never fails; returns
    /// the appended entry.
    pub fn record(&mut self, label: impl Into<String>, value: f64) -> CountEntry {
        let entry = CountEntry::new(label, value);
        self.history.push(entry.clone());
        // A fresh adjustment invalidates the redo lineage.
        self.redo.clear();
        self.undos_used = 0;
        entry
    }

    /// Undo the most recent entry, within the undo budget.
    ///
    /// Pops the history tail into the redo buffer and spends one unit of
    /// budget. Returns the undone entry, or `None` (leaving all state
    /// unchanged) when the history is empty or the budget since the last
    /// record/reset is spent. Running out of budget is rate limiting,
    /// not an error.
    pub fn undo(&mut self) -> Option<CountEntry> {
        if !self.can_undo() {
            return None;
        }
        let entry = self.history.pop()?;
        if self.config.redo_cap > 0 {
            if self.redo.len() >= self.config.redo_cap {
                self.redo.pop_front(); // cap reached: drop the oldest pending entry
            }
            self.redo.push_back(entry.clone());
        }
        self.undos_used += 1;
        Some(entry)
    }

    /// Replay the most recently undone entry.
    ///
    /// Appends it back to the history tail and hands one unit of undo
    /// budget back. Returns the restored entry, or `None` if nothing is
    /// pending redo.
    pub fn redo(&mut self) -> Option<CountEntry> {
        let entry = self.redo.pop_back()?;
        self.history.push(entry.clone());
        if self.undos_used > 0 {
            // A redo reverses an undo.
            self.undos_used -= 1;
        }
        Some(entry)
    }

    /// Clear the shoe in place: history, redo buffer, and undo usage.
    /// The configuration is untouched.
    pub fn reset(&mut self) {
        self.history.clear();
        self.redo.clear();
        self.undos_used = 0;
    }

    // ---------------------------------------------------------------
    // Derived queries
    // ---------------------------------------------------------------

    /// Sum of all recorded values in the history.
    pub fn running_count(&self) -> f64 {
        self.history.iter().map(CountEntry::value).sum()
    }

    /// Number of entries in the history (cards seen this shoe).
    pub fn cards_seen(&self) -> usize {
        self.history.len()
    }

    /// Estimated undealt decks: total minus seen over 52, floored at
    /// zero.
    pub fn decks_remaining(&self) -> f64 {
        (self.config.decks_total - self.cards_seen() as f64 / CARDS_PER_DECK).max(0.0)
    }

    /// Running count normalized by the estimated decks remaining.
    ///
    /// Zero while the history is empty. The denominator is clamped to
    /// [`TRUE_COUNT_DECK_FLOOR`] so a nearly empty shoe cannot blow the
    /// normalization up.
    pub fn true_count(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.running_count() / self.decks_remaining().max(TRUE_COUNT_DECK_FLOOR)
    }

    /// Whether an undo would currently succeed.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.undos_used < self.config.undo_budget
    }

    /// Whether a redo would currently succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Read-only chronological view of the history, oldest first.
    pub fn history(&self) -> &[CountEntry] {
        &self.history
    }

    /// Returns `true` if nothing is currently recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Snapshot all derived aggregates at once.
    pub fn totals(&self) -> Totals {
        Totals {
            running_count: self.running_count(),
            true_count: self.true_count(),
            cards_seen: self.cards_seen(),
            decks_remaining: self.decks_remaining(),
        }
    }
}

/// One consistent snapshot of the ledger's derived aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all recorded values.
    pub running_count: f64,
    /// Running count normalized by estimated decks remaining.
    pub true_count: f64,
    /// Number of entries in the history.
    pub cards_seen: usize,
    /// Estimated undealt decks, never negative.
    pub decks_remaining: f64,
}
