//! The screen lifecycle contract and the screens themselves.
//!
//! Every screen implements [`Screen`]: an `id` plus `on_show`/`on_hide`
//! hooks with no-op defaults. The flow calls the hooks on every
//! transition, so a screen never has to be probed for optional
//! behavior.

use serde::{Deserialize, Serialize};
use tracing::debug;

use shoe_ledger::LedgerConfig;
use shoe_systems::CountingSystem;

use crate::command::Outcome;
use crate::error::SessionResult;
use crate::input::KeyEvent;
use crate::keymap::{HotkeyPrefs, Keymap};
use crate::session::Session;

/// Identifies each screen in the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    StartMenu,
    ModeSelection,
    HiLo,
    WongHalves,
}

/// Lifecycle contract every screen implements.
///
/// `on_show` runs when the screen becomes the active screen, `on_hide`
/// just before it stops being active. Both default to no-ops, so
/// stateless screens only implement `id`.
pub trait Screen {
    /// Which screen this is.
    fn id(&self) -> ScreenId;

    /// Called when the screen becomes the active screen.
    fn on_show(&mut self) {}

    /// Called before the screen stops being the active screen.
    fn on_hide(&mut self) {}
}

/// The landing screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct StartMenu;

impl Screen for StartMenu {
    fn id(&self) -> ScreenId {
        ScreenId::StartMenu
    }
}

/// The screen where a counting system and deck count are chosen.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeSelection;

impl Screen for ModeSelection {
    fn id(&self) -> ScreenId {
        ScreenId::ModeSelection
    }
}

/// A live counting screen: one session plus its resolved keymap.
///
/// The keymap is resolved from the declarative tables when the screen
/// is built and rebuilt only when a preference toggles. Showing and
/// hiding the screen gates whether key events dispatch at all, matching
/// how shortcut bindings follow the active screen.
#[derive(Clone, Debug)]
pub struct CountingScreen {
    session: Session,
    prefs: HotkeyPrefs,
    keymap: Keymap,
    active: bool,
}

impl CountingScreen {
    /// Build a counting screen with default hotkey preferences.
    pub fn new(system: CountingSystem, config: LedgerConfig) -> SessionResult<Self> {
        Self::with_prefs(system, config, HotkeyPrefs::default())
    }

    /// Build a counting screen with explicit hotkey preferences.
    pub fn with_prefs(
        system: CountingSystem,
        config: LedgerConfig,
        prefs: HotkeyPrefs,
    ) -> SessionResult<Self> {
        let session = Session::start(system, config)?;
        let keymap = Keymap::for_system(system, &prefs)?;
        Ok(Self {
            session,
            prefs,
            keymap,
            active: false,
        })
    }

    /// The session this screen drives.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access for collaborators that apply commands
    /// directly (on-screen buttons rather than keys).
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Current hotkey preferences.
    pub fn prefs(&self) -> &HotkeyPrefs {
        &self.prefs
    }

    /// The currently resolved keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Whether this screen is the active screen.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable one Hi-Lo shortcut group, rebuilding the
    /// keymap.
    pub fn set_group_enabled(&mut self, name: &str, enabled: bool) -> SessionResult<()> {
        self.prefs.set_group_enabled(name, enabled)?;
        self.rebuild_keymap()
    }

    /// Turn rank mode on or off, rebuilding the keymap.
    pub fn set_rank_mode(&mut self, enabled: bool) -> SessionResult<()> {
        self.prefs.set_rank_mode(enabled);
        self.rebuild_keymap()
    }

    fn rebuild_keymap(&mut self) -> SessionResult<()> {
        self.keymap = Keymap::for_system(self.session.system(), &self.prefs)?;
        debug!(
            system = %self.session.system(),
            bindings = self.keymap.len(),
            "keymap rebuilt"
        );
        Ok(())
    }

    /// Resolve and apply a key event.
    ///
    /// Returns `Some` when a binding fired — the outcome may still be
    /// [`Outcome::Noop`] for an out-of-budget undo or an empty redo —
    /// and `None` when the event is unbound or the screen is hidden.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Outcome> {
        if !self.active {
            return None;
        }
        let command = self.keymap.resolve(event)?;
        Some(self.session.apply(command))
    }
}

impl Screen for CountingScreen {
    fn id(&self) -> ScreenId {
        match self.session.system() {
            CountingSystem::HiLo => ScreenId::HiLo,
            CountingSystem::WongHalves => ScreenId::WongHalves,
        }
    }

    fn on_show(&mut self) {
        self.active = true;
    }

    fn on_hide(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::error::{KeymapError, SessionError};

    fn hilo_screen() -> CountingScreen {
        CountingScreen::new(CountingSystem::HiLo, LedgerConfig::default()).unwrap()
    }

    #[test]
    fn marker_screens_use_the_default_lifecycle() {
        let mut start = StartMenu;
        let mut modes = ModeSelection;
        assert_eq!(start.id(), ScreenId::StartMenu);
        assert_eq!(modes.id(), ScreenId::ModeSelection);
        // Defaults are callable no-ops.
        start.on_show();
        start.on_hide();
        modes.on_show();
        modes.on_hide();
    }

    #[test]
    fn screen_id_follows_the_system() {
        assert_eq!(hilo_screen().id(), ScreenId::HiLo);
        let wong =
            CountingScreen::new(CountingSystem::WongHalves, LedgerConfig::default()).unwrap();
        assert_eq!(wong.id(), ScreenId::WongHalves);
    }

    #[test]
    fn hidden_screens_ignore_keys() {
        let mut screen = hilo_screen();
        assert!(!screen.is_active());
        assert_eq!(screen.handle_key(KeyEvent::char('l')), None);

        screen.on_show();
        assert!(screen.is_active());
        let outcome = screen.handle_key(KeyEvent::char('l')).unwrap();
        assert_eq!(outcome.entry().unwrap().label(), "Low");
    }

    #[test]
    fn on_hide_deactivates_key_handling() {
        let mut screen = hilo_screen();
        screen.on_show();
        assert!(screen.handle_key(KeyEvent::char('h')).is_some());

        screen.on_hide();
        assert_eq!(screen.handle_key(KeyEvent::char('h')), None);
        // The session state survives hiding.
        assert_eq!(screen.session().ledger().cards_seen(), 1);
    }

    #[test]
    fn unbound_keys_are_distinguished_from_noops() {
        let mut screen = hilo_screen();
        screen.on_show();
        // Unbound key: no binding fired.
        assert_eq!(screen.handle_key(KeyEvent::char('p')), None);
        // Bound key on an empty ledger: the binding fired but refused.
        assert_eq!(screen.handle_key(KeyEvent::ctrl('z')), Some(Outcome::Noop));
    }

    #[test]
    fn toggling_a_group_rebuilds_the_keymap() {
        let mut screen = hilo_screen();
        screen.on_show();
        screen.set_group_enabled("letters", false).unwrap();

        assert_eq!(screen.handle_key(KeyEvent::char('l')), None);
        assert!(screen.handle_key(KeyEvent::char('a')).is_some());

        screen.set_group_enabled("letters", true).unwrap();
        assert!(screen.handle_key(KeyEvent::char('l')).is_some());
    }

    #[test]
    fn rank_mode_toggle_adds_and_removes_bindings() {
        let mut screen = hilo_screen();
        screen.on_show();
        assert_eq!(screen.handle_key(KeyEvent::char('5')), None);

        screen.set_rank_mode(true).unwrap();
        let outcome = screen.handle_key(KeyEvent::char('5')).unwrap();
        assert_eq!(outcome.entry().unwrap().label(), "Low");

        screen.set_rank_mode(false).unwrap();
        assert_eq!(screen.handle_key(KeyEvent::char('5')), None);
    }

    #[test]
    fn unknown_group_toggles_error() {
        let mut screen = hilo_screen();
        assert!(matches!(
            screen.set_group_enabled("numpad", true),
            Err(SessionError::Keymap(KeymapError::UnknownGroup(_)))
        ));
    }

    #[test]
    fn buttons_can_drive_the_session_directly() {
        let mut screen = hilo_screen();
        // No on_show: buttons do not depend on key activation.
        let outcome = screen
            .session_mut()
            .apply(Command::Record(shoe_systems::LOW_ACTION));
        assert!(outcome.changed_state());
        assert_eq!(screen.session().totals().running_count, 1.0);
    }
}
