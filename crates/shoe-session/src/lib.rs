//! Session orchestration for Shoe, a card-counting practice engine.
//!
//! This crate is the seam between the counting core and whatever draws
//! it. It provides:
//! - `Key` / `KeyEvent` input events and `Command`, the core operations
//!   reachable from input
//! - `Keymap`, a declarative event-to-command table with conflict
//!   detection, plus the built-in Hi-Lo and Wong Halves binding tables
//! - The `Screen` lifecycle trait (`on_show` / `on_hide` with no-op
//!   defaults) and the counting screens that implement it
//! - `Session`, which applies commands to a ledger and reports
//!   UI-agnostic `Outcome`s
//! - `Flow`, the navigation state machine that owns the active screen
//!   and the session lifecycle
//!
//! Nothing here renders. A presentation layer feeds events in, reads
//! totals and scrollback out, and owns every pixel itself.

pub mod command;
pub mod error;
pub mod flow;
pub mod input;
pub mod keymap;
pub mod screen;
pub mod session;

pub use command::{Command, Outcome};
pub use error::{KeymapError, SessionError, SessionResult};
pub use flow::Flow;
pub use input::{Key, KeyEvent};
pub use keymap::{HotkeyGroup, HotkeyPrefs, Keymap, HILO_GROUPS, HILO_RANK_KEYS, WONG_CARD_KEYS};
pub use screen::{CountingScreen, ModeSelection, Screen, ScreenId, StartMenu};
pub use session::Session;
