use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical key, independent of modifiers.
///
/// Character keys are identified by the character they produce, so a
/// shifted symbol arrives as the symbol itself (`<`, not Shift+`,`).
/// Keypad variants are not distinguished from their main-row characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

/// One keyboard input event as reported by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// A bare character press.
    pub const fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
            shift: false,
        }
    }

    /// A bare non-character key press.
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// A character chorded with Ctrl.
    pub const fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            shift: false,
        }
    }

    /// A character chorded with Ctrl and Shift.
    pub const fn ctrl_shift(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            shift: true,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_modifiers() {
        assert_eq!(
            KeyEvent::char('l'),
            KeyEvent {
                key: Key::Char('l'),
                ctrl: false,
                shift: false
            }
        );
        assert!(KeyEvent::ctrl('z').ctrl);
        assert!(!KeyEvent::ctrl('z').shift);
        assert!(KeyEvent::ctrl_shift('z').ctrl);
        assert!(KeyEvent::ctrl_shift('z').shift);
    }

    #[test]
    fn display_reads_like_a_shortcut_hint() {
        assert_eq!(KeyEvent::char('l').to_string(), "L");
        assert_eq!(KeyEvent::char('[').to_string(), "[");
        assert_eq!(KeyEvent::ctrl('r').to_string(), "Ctrl+R");
        assert_eq!(KeyEvent::ctrl_shift('z').to_string(), "Ctrl+Shift+Z");
        assert_eq!(KeyEvent::key(Key::Left).to_string(), "Left");
    }

    #[test]
    fn events_distinguish_modifiers() {
        assert_ne!(KeyEvent::char('z'), KeyEvent::ctrl('z'));
        assert_ne!(KeyEvent::ctrl('z'), KeyEvent::ctrl_shift('z'));
    }

    #[test]
    fn serde_roundtrip() {
        for event in [
            KeyEvent::char('a'),
            KeyEvent::ctrl('r'),
            KeyEvent::key(Key::Up),
        ] {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: KeyEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
