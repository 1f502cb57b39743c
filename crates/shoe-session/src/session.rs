//! One counting session: a system plus the ledger tracking its shoe.

use tracing::debug;

use shoe_ledger::{format_history, CountingLedger, LedgerConfig, Totals};
use shoe_systems::CountingSystem;

use crate::command::{Command, Outcome};
use crate::error::SessionResult;

/// A live practice session.
///
/// The session owns its ledger exclusively; it is created when the user
/// starts a mode and dropped when they leave it. All counting logic
/// stays in the ledger — the session just translates commands and reads
/// state back out for display.
#[derive(Clone, Debug)]
pub struct Session {
    system: CountingSystem,
    ledger: CountingLedger,
}

impl Session {
    /// Start a session for `system` over a shoe described by `config`.
    pub fn start(system: CountingSystem, config: LedgerConfig) -> SessionResult<Self> {
        let ledger = CountingLedger::new(config)?;
        Ok(Self { system, ledger })
    }

    /// The counting system this session practices.
    pub fn system(&self) -> CountingSystem {
        self.system
    }

    /// Read access to the ledger.
    pub fn ledger(&self) -> &CountingLedger {
        &self.ledger
    }

    /// Apply one command to the ledger.
    ///
    /// Never fails: commands that cannot take effect (an undo past the
    /// budget or an empty history, a redo with nothing pending) report
    /// [`Outcome::Noop`].
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Record(action) => {
                Outcome::Recorded(self.ledger.record(action.label, action.value))
            }
            Command::Undo => match self.ledger.undo() {
                Some(entry) => Outcome::Undone(entry),
                None => Outcome::Noop,
            },
            Command::Redo => match self.ledger.redo() {
                Some(entry) => Outcome::Redone(entry),
                None => Outcome::Noop,
            },
            Command::Reset => {
                self.ledger.reset();
                Outcome::Reset
            }
        };
        debug!(
            system = %self.system,
            command = ?command,
            changed = outcome.changed_state(),
            "command applied"
        );
        outcome
    }

    /// Snapshot of the ledger's derived aggregates.
    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Scrollback text for the current history.
    pub fn scrollback(&self) -> String {
        format_history(self.ledger.history())
    }
}
