//! Declarative keyboard shortcut tables.
//!
//! A [`Keymap`] is an immutable mapping from input event to core
//! command, built once from the binding tables below and rebuilt only
//! when a preference toggles. Nothing mutates bindings at dispatch
//! time; resolution is a plain lookup.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use shoe_systems::{CountingSystem, Rank, HI_ACTION, LOW_ACTION};

use crate::command::Command;
use crate::error::KeymapError;
use crate::input::{Key, KeyEvent};

/// A named, independently toggleable set of Hi-Lo shortcut keys.
#[derive(Clone, Copy, Debug)]
pub struct HotkeyGroup {
    /// Stable name used in preferences.
    pub name: &'static str,
    /// Human-readable title for preference UIs.
    pub title: &'static str,
    /// Keys that record the Low action.
    pub low_keys: &'static [KeyEvent],
    /// Keys that record the Hi action.
    pub hi_keys: &'static [KeyEvent],
}

/// The six Hi-Lo shortcut groups, all enabled by default.
pub const HILO_GROUPS: [HotkeyGroup; 6] = [
    HotkeyGroup {
        name: "letters",
        title: "Letters",
        low_keys: &[KeyEvent::char('l')],
        hi_keys: &[KeyEvent::char('h')],
    },
    HotkeyGroup {
        name: "adjacent",
        title: "A / D",
        low_keys: &[KeyEvent::char('a')],
        hi_keys: &[KeyEvent::char('d')],
    },
    HotkeyGroup {
        name: "symbols",
        title: "Minus / Plus",
        low_keys: &[KeyEvent::char('-')],
        hi_keys: &[KeyEvent::char('+'), KeyEvent::char('=')],
    },
    HotkeyGroup {
        name: "horizontal_arrows",
        title: "Arrow Keys",
        low_keys: &[KeyEvent::key(Key::Left)],
        hi_keys: &[KeyEvent::key(Key::Right)],
    },
    HotkeyGroup {
        name: "vertical_arrows",
        title: "Vertical Arrows",
        low_keys: &[KeyEvent::key(Key::Down)],
        hi_keys: &[KeyEvent::key(Key::Up)],
    },
    HotkeyGroup {
        name: "brackets",
        title: "Brackets",
        low_keys: &[KeyEvent::char('[')],
        hi_keys: &[KeyEvent::char(']')],
    },
];

/// Hi-Lo rank-mode keys: each key names an observed rank, and the
/// binding records that rank's class action ("Low" or "Hi"). Neutral
/// ranks appear here for reference displays but bind nothing.
pub const HILO_RANK_KEYS: [(char, Rank); 13] = [
    ('2', Rank::Two),
    ('3', Rank::Three),
    ('4', Rank::Four),
    ('5', Rank::Five),
    ('6', Rank::Six),
    ('7', Rank::Seven),
    ('8', Rank::Eight),
    ('9', Rank::Nine),
    ('0', Rank::Ten),
    ('q', Rank::Jack),
    ('w', Rank::Queen),
    ('e', Rank::King),
    ('1', Rank::Ace),
];

/// Wong Halves card keys: one key per rank, laid out along the home
/// rows. Each records that rank's weighted action.
pub const WONG_CARD_KEYS: [(char, Rank); 13] = [
    ('q', Rank::Two),
    ('w', Rank::Three),
    ('e', Rank::Four),
    ('r', Rank::Five),
    ('a', Rank::Six),
    ('s', Rank::Seven),
    ('d', Rank::Eight),
    ('f', Rank::Nine),
    ('g', Rank::Ten),
    ('z', Rank::Jack),
    ('x', Rank::Queen),
    ('c', Rank::King),
    ('v', Rank::Ace),
];

/// Control shortcuts shared by every counting screen.
fn control_bindings() -> Vec<(KeyEvent, Command)> {
    vec![
        (KeyEvent::ctrl('r'), Command::Reset),
        (KeyEvent::char(','), Command::Undo),
        (KeyEvent::char('<'), Command::Undo),
        (KeyEvent::ctrl('z'), Command::Undo),
        (KeyEvent::char('.'), Command::Redo),
        (KeyEvent::char('>'), Command::Redo),
        (KeyEvent::ctrl_shift('z'), Command::Redo),
    ]
}

/// Which optional Hi-Lo shortcut groups are active, plus the rank-mode
/// flag. Defaults to every group enabled with rank mode off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyPrefs {
    enabled_groups: BTreeSet<String>,
    rank_mode: bool,
}

impl Default for HotkeyPrefs {
    fn default() -> Self {
        Self {
            enabled_groups: HILO_GROUPS
                .iter()
                .map(|group| group.name.to_string())
                .collect(),
            rank_mode: false,
        }
    }
}

impl HotkeyPrefs {
    /// Enable or disable one shortcut group by name.
    pub fn set_group_enabled(&mut self, name: &str, enabled: bool) -> Result<(), KeymapError> {
        if !HILO_GROUPS.iter().any(|group| group.name == name) {
            return Err(KeymapError::UnknownGroup(name.to_string()));
        }
        if enabled {
            self.enabled_groups.insert(name.to_string());
        } else {
            self.enabled_groups.remove(name);
        }
        Ok(())
    }

    /// Whether the named group is currently enabled.
    pub fn is_group_enabled(&self, name: &str) -> bool {
        self.enabled_groups.contains(name)
    }

    /// Turn rank mode on or off.
    pub fn set_rank_mode(&mut self, enabled: bool) {
        self.rank_mode = enabled;
    }

    /// Whether rank mode is on.
    pub fn rank_mode(&self) -> bool {
        self.rank_mode
    }
}

/// An immutable event-to-command table for one counting screen.
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    bindings: HashMap<KeyEvent, Command>,
}

impl Keymap {
    /// Build a keymap from declarative bindings.
    ///
    /// The same event may appear repeatedly with the same command (the
    /// tables overlap deliberately); binding one event to two different
    /// commands is a conflict error.
    pub fn from_bindings(
        bindings: impl IntoIterator<Item = (KeyEvent, Command)>,
    ) -> Result<Self, KeymapError> {
        let mut map = HashMap::new();
        for (event, command) in bindings {
            match map.get(&event) {
                Some(existing) if *existing != command => {
                    return Err(KeymapError::Conflict {
                        event,
                        existing: *existing,
                        incoming: command,
                    });
                }
                _ => {
                    map.insert(event, command);
                }
            }
        }
        Ok(Self { bindings: map })
    }

    /// The Hi-Lo keymap for the given preferences.
    pub fn hilo(prefs: &HotkeyPrefs) -> Result<Self, KeymapError> {
        let mut bindings = control_bindings();
        for group in &HILO_GROUPS {
            if !prefs.is_group_enabled(group.name) {
                continue;
            }
            for key in group.low_keys {
                bindings.push((*key, Command::Record(LOW_ACTION)));
            }
            for key in group.hi_keys {
                bindings.push((*key, Command::Record(HI_ACTION)));
            }
        }
        if prefs.rank_mode() {
            for (c, rank) in HILO_RANK_KEYS {
                // Neutral ranks have no action and stay unbound.
                if let Some(action) = CountingSystem::HiLo.action_for_rank(rank) {
                    bindings.push((KeyEvent::char(c), Command::Record(action)));
                }
            }
        }
        Self::from_bindings(bindings)
    }

    /// The Wong Halves keymap. No toggles; every rank has its key.
    pub fn wong_halves() -> Result<Self, KeymapError> {
        let mut bindings = control_bindings();
        for (c, rank) in WONG_CARD_KEYS {
            if let Some(action) = CountingSystem::WongHalves.action_for_rank(rank) {
                bindings.push((KeyEvent::char(c), Command::Record(action)));
            }
        }
        Self::from_bindings(bindings)
    }

    /// The keymap for a system under the given preferences.
    pub fn for_system(system: CountingSystem, prefs: &HotkeyPrefs) -> Result<Self, KeymapError> {
        match system {
            CountingSystem::HiLo => Self::hilo(prefs),
            CountingSystem::WongHalves => Self::wong_halves(),
        }
    }

    /// Resolve an event to its command.
    ///
    /// Uppercase letters fall back to their lowercase binding, so a
    /// shifted letter still fires the same command.
    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        if let Some(command) = self.bindings.get(&event) {
            return Some(*command);
        }
        if let Key::Char(c) = event.key {
            if c.is_ascii_uppercase() {
                let lowered = KeyEvent {
                    key: Key::Char(c.to_ascii_lowercase()),
                    ..event
                };
                return self.bindings.get(&lowered).copied();
            }
        }
        None
    }

    /// Number of bound events.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
