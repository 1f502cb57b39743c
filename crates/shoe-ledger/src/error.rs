use thiserror::Error;

/// Errors produced when configuring a ledger.
///
/// Core mutations never fail; construction is the only fallible surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("decks_total must be positive and finite, got {0}")]
    InvalidDeckCount(f64),
}
