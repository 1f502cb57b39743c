//! The navigation flow: start menu, mode selection, counting screens.
//!
//! [`Flow`] owns exactly one screen at a time and runs the lifecycle
//! contract on every transition (`on_hide` on the outgoing screen, then
//! `on_show` on the incoming one). Replacing a counting screen drops
//! it, which is how a session's ledger is discarded.

use tracing::{debug, info};

use shoe_ledger::LedgerConfig;
use shoe_systems::CountingSystem;

use crate::command::Outcome;
use crate::error::SessionResult;
use crate::input::KeyEvent;
use crate::screen::{CountingScreen, ModeSelection, Screen, ScreenId, StartMenu};

/// The active screen, stored by value.
#[derive(Clone, Debug)]
enum ActiveScreen {
    Start(StartMenu),
    Modes(ModeSelection),
    Counting(CountingScreen),
}

impl ActiveScreen {
    fn as_screen(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Start(screen) => screen,
            ActiveScreen::Modes(screen) => screen,
            ActiveScreen::Counting(screen) => screen,
        }
    }

    fn id(&self) -> ScreenId {
        match self {
            ActiveScreen::Start(screen) => screen.id(),
            ActiveScreen::Modes(screen) => screen.id(),
            ActiveScreen::Counting(screen) => screen.id(),
        }
    }
}

/// The practice app's navigation state machine.
///
/// Rendering is someone else's job: the flow hands out screen ids,
/// sessions, and outcomes, and the presentation layer draws whatever it
/// wants with them.
#[derive(Clone, Debug)]
pub struct Flow {
    screen: ActiveScreen,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow {
    /// A flow resting on the start menu.
    pub fn new() -> Self {
        let mut screen = ActiveScreen::Start(StartMenu);
        screen.as_screen().on_show();
        Self { screen }
    }

    /// Which screen is active.
    pub fn current(&self) -> ScreenId {
        self.screen.id()
    }

    /// Go to the mode-selection screen.
    ///
    /// Legal from anywhere. Leaving a counting screen this way discards
    /// its session for good.
    pub fn open_mode_selection(&mut self) {
        self.transition(ActiveScreen::Modes(ModeSelection));
    }

    /// Return from mode selection to the start menu.
    pub fn back_to_start(&mut self) {
        self.transition(ActiveScreen::Start(StartMenu));
    }

    /// Start a fresh counting session, replacing whatever is active.
    ///
    /// On a config error the current screen stays in place.
    pub fn start_session(
        &mut self,
        system: CountingSystem,
        config: LedgerConfig,
    ) -> SessionResult<()> {
        let screen = CountingScreen::new(system, config)?;
        info!(system = %system, decks = config.decks_total, "session started");
        self.transition(ActiveScreen::Counting(screen));
        Ok(())
    }

    /// Key input for the active screen.
    ///
    /// Only counting screens consume keys; everywhere else this returns
    /// `None`.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Outcome> {
        match &mut self.screen {
            ActiveScreen::Counting(screen) => screen.handle_key(event),
            _ => None,
        }
    }

    /// The live counting screen, if one is active.
    pub fn counting(&self) -> Option<&CountingScreen> {
        match &self.screen {
            ActiveScreen::Counting(screen) => Some(screen),
            _ => None,
        }
    }

    /// Mutable access to the live counting screen.
    pub fn counting_mut(&mut self) -> Option<&mut CountingScreen> {
        match &mut self.screen {
            ActiveScreen::Counting(screen) => Some(screen),
            _ => None,
        }
    }

    fn transition(&mut self, mut next: ActiveScreen) {
        let from = self.screen.id();
        self.screen.as_screen().on_hide();
        next.as_screen().on_show();
        debug!(from = ?from, to = ?next.id(), "screen changed");
        self.screen = next;
    }
}
