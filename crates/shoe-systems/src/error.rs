use thiserror::Error;

/// Errors produced when parsing system or rank names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("unknown card rank: {0:?}")]
    UnknownRank(String),

    #[error("unknown counting system: {0:?}")]
    UnknownSystem(String),
}
