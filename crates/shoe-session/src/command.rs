use shoe_ledger::CountEntry;
use shoe_systems::CountAction;

/// A core ledger operation reachable from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Record the given adjustment.
    Record(CountAction),
    /// Take back the most recent entry, within the undo budget.
    Undo,
    /// Replay the most recently undone entry.
    Redo,
    /// Clear the shoe.
    Reset,
}

/// What applying a command did to the session's ledger.
///
/// `Noop` covers the benign refusals: an undo past its budget or an
/// empty history, a redo with nothing pending. It is a signal, not an
/// error.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// An entry was appended to the history.
    Recorded(CountEntry),
    /// The history tail moved to the redo buffer.
    Undone(CountEntry),
    /// A pending entry was restored to the history tail.
    Redone(CountEntry),
    /// History and redo buffer were cleared.
    Reset,
    /// Nothing changed.
    Noop,
}

impl Outcome {
    /// Returns `true` if the command changed ledger state.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Outcome::Noop)
    }

    /// The entry the command touched, if any.
    pub fn entry(&self) -> Option<&CountEntry> {
        match self {
            Outcome::Recorded(entry) | Outcome::Undone(entry) | Outcome::Redone(entry) => {
                Some(entry)
            }
            Outcome::Reset | Outcome::Noop => None,
        }
    }
}
