use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cards per deck, the divisor for deck-depletion estimates.
pub const CARDS_PER_DECK: f64 = 52.0;

/// Default number of decks in a freshly shuffled shoe.
pub const DEFAULT_DECKS_TOTAL: f64 = 6.0;

/// Default number of consecutive undos allowed since the last record or
/// reset.
pub const DEFAULT_UNDO_BUDGET: u32 = 5;

/// Default maximum number of undone entries retained for redo.
pub const DEFAULT_REDO_CAP: usize = 20;

/// Minimum deck denominator when deriving the true count. Keeps the
/// normalization from blowing up as the shoe runs out of cards.
pub const TRUE_COUNT_DECK_FLOOR: f64 = 0.25;

/// Configuration for one counting session's ledger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Total decks in the shoe at session start. Must be positive and
    /// finite; fixed for the lifetime of the ledger.
    pub decks_total: f64,
    /// How many consecutive undos are allowed since the last record or
    /// reset. Zero disables undo entirely.
    pub undo_budget: u32,
    /// Maximum undone entries retained for redo; the oldest pending
    /// entry is dropped first when the cap is exceeded. Zero retains
    /// nothing.
    pub redo_cap: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            decks_total: DEFAULT_DECKS_TOTAL,
            undo_budget: DEFAULT_UNDO_BUDGET,
            redo_cap: DEFAULT_REDO_CAP,
        }
    }
}

impl LedgerConfig {
    /// A default-policy configuration for a shoe of `decks_total` decks.
    pub fn with_decks(decks_total: f64) -> Self {
        Self {
            decks_total,
            ..Default::default()
        }
    }

    /// Check that the configuration describes a usable shoe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.decks_total.is_finite() || self.decks_total <= 0.0 {
            return Err(ConfigError::InvalidDeckCount(self.decks_total));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_policy_constants() {
        let config = LedgerConfig::default();
        assert_eq!(config.decks_total, DEFAULT_DECKS_TOTAL);
        assert_eq!(config.undo_budget, DEFAULT_UNDO_BUDGET);
        assert_eq!(config.redo_cap, DEFAULT_REDO_CAP);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_decks_keeps_default_policy() {
        let config = LedgerConfig::with_decks(2.0);
        assert_eq!(config.decks_total, 2.0);
        assert_eq!(config.undo_budget, DEFAULT_UNDO_BUDGET);
        assert_eq!(config.redo_cap, DEFAULT_REDO_CAP);
    }

    #[test]
    fn validate_rejects_unusable_deck_counts() {
        for decks in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = LedgerConfig::with_decks(decks);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidDeckCount(_))),
                "decks_total = {decks} should be rejected"
            );
        }
    }

    #[test]
    fn validate_accepts_fractional_decks() {
        assert!(LedgerConfig::with_decks(0.5).validate().is_ok());
        assert!(LedgerConfig::with_decks(8.0).validate().is_ok());
    }

    #[test]
    fn serde_roundtrip() {
        let config = LedgerConfig {
            decks_total: 4.0,
            undo_budget: 3,
            redo_cap: 7,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LedgerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
