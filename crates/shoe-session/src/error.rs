//! Error types for the session crate.

use thiserror::Error;

use crate::command::Command;
use crate::input::KeyEvent;

/// Errors that can occur while setting up sessions and screens.
///
/// Applying commands never fails; these cover construction and
/// configuration surfaces only.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// The ledger configuration was rejected.
    #[error("ledger config: {0}")]
    Config(#[from] shoe_ledger::ConfigError),

    /// A keymap could not be built or a preference was invalid.
    #[error("keymap: {0}")]
    Keymap(#[from] KeymapError),
}

/// Errors produced when building keymaps or editing hotkey preferences.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeymapError {
    /// One event bound to two different commands.
    #[error("key {event} is bound to conflicting commands")]
    Conflict {
        event: KeyEvent,
        existing: Command,
        incoming: Command,
    },

    /// A preference referenced a hotkey group that does not exist.
    #[error("unknown hotkey group: {0:?}")]
    UnknownGroup(String),
}

/// Convenience alias for session results.
pub type SessionResult<T> = Result<T, SessionError>;
