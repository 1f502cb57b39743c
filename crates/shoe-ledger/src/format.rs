//! Deterministic display formatting for counts.
//!
//! All helpers are pure and locale-independent; tests pin their exact
//! output so presentation layers can rely on it.

use crate::entry::CountEntry;

/// Format a signed increment for display.
///
/// Rounds to two decimal places, snaps near-zero to `+0`, renders
/// integral values without a fraction, and trims one trailing redundant
/// zero: `1.0` → `+1`, `-0.5` → `-0.5`, `1.5` → `+1.5`, `0.0` → `+0`.
pub fn format_increment(value: f64) -> String {
    let mut rounded = (value * 100.0).round() / 100.0;
    if rounded.abs() < 1e-9 {
        rounded = 0.0;
    }
    if (rounded - rounded.round()).abs() < 1e-9 {
        return format!("{:+}", rounded.round() as i64);
    }
    let mut text = format!("{rounded:+.2}");
    if text.ends_with('0') {
        text.pop();
    }
    text
}

/// Format a true count with a fixed sign and exactly two decimals.
pub fn format_true_count(value: f64) -> String {
    format!("{value:+.2}")
}

/// Render a history slice as scrollback text.
///
/// Entries appear oldest first as `label(increment)` separated by two
/// spaces; an empty history renders as `-`.
pub fn format_history(entries: &[CountEntry]) -> String {
    if entries.is_empty() {
        return "-".to_string();
    }
    entries
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("  ")
}
