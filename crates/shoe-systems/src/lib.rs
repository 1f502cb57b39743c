//! Counting systems for Shoe, a card-counting practice engine.
//!
//! This crate defines the contract data the counting modes rely on:
//! - `Rank`, the thirteen card ranks with their display labels
//! - `CountingSystem`, the supported systems (Hi-Lo and Wong Halves)
//! - `CountAction`, one labeled adjustment a system offers
//! - `HiLoClass`, the low/neutral/high partition of the simple system
//!
//! Tables here are data, not logic: the ledger that accumulates the
//! adjustments lives in `shoe-ledger`.

pub mod error;
pub mod rank;
pub mod system;

pub use error::SystemError;
pub use rank::Rank;
pub use system::{CountAction, CountingSystem, HiLoClass, HI_ACTION, LOW_ACTION};
