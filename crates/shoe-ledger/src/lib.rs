//! Counting core for Shoe, a card-counting practice engine.
//!
//! This crate is the heart of Shoe. It provides:
//! - `CountEntry`, one labeled signed adjustment
//! - `CountingLedger`, the append-only history for one shoe with a
//!   bounded undo/redo policy
//! - Derived aggregates (running count, true count, cards seen, decks
//!   remaining) computed on read, plus a `Totals` snapshot
//! - `LedgerConfig` with the deck count and the undo/redo policy bounds
//! - Deterministic, locale-independent display formatting
//!
//! Everything here is plain, self-contained data: no I/O, no global
//! state, no background work. Presentation layers call the four mutation
//! operations and read the derived queries.

pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod ledger;

pub use config::{
    LedgerConfig, CARDS_PER_DECK, DEFAULT_DECKS_TOTAL, DEFAULT_REDO_CAP, DEFAULT_UNDO_BUDGET,
    TRUE_COUNT_DECK_FLOOR,
};
pub use entry::CountEntry;
pub use error::ConfigError;
pub use format::{format_history, format_increment, format_true_count};
pub use ledger::{CountingLedger, Totals};
