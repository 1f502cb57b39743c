//! The supported counting systems and their action tables.
//!
//! A system is a fixed mapping from observed ranks to labeled signed
//! adjustments. Hi-Lo collapses the deck into two buttons ("Low" and
//! "Hi"); Wong Halves gives every rank its own fractional weight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SystemError;
use crate::rank::Rank;

/// One labeled counting adjustment a system offers.
///
/// The label goes into the ledger verbatim (and so into the scrollback);
/// the value is the entry's contribution to the running count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountAction {
    /// Display tag recorded with the adjustment.
    pub label: &'static str,
    /// Signed count contribution.
    pub value: f64,
}

/// The Hi-Lo "Low" action: a 2–6 left the shoe, count goes up one.
pub const LOW_ACTION: CountAction = CountAction {
    label: "Low",
    value: 1.0,
};

/// The Hi-Lo "Hi" action: a ten, face, or ace left the shoe, count goes
/// down one.
pub const HI_ACTION: CountAction = CountAction {
    label: "Hi",
    value: -1.0,
};

const HILO_ACTIONS: [CountAction; 2] = [LOW_ACTION, HI_ACTION];

/// Per-rank Wong Halves weights, in `Rank::ALL` order.
const WONG_HALVES_ACTIONS: [CountAction; 13] = [
    CountAction { label: "2", value: 0.5 },
    CountAction { label: "3", value: 1.0 },
    CountAction { label: "4", value: 1.0 },
    CountAction { label: "5", value: 1.5 },
    CountAction { label: "6", value: 1.0 },
    CountAction { label: "7", value: 0.5 },
    CountAction { label: "8", value: 0.0 },
    CountAction { label: "9", value: -0.5 },
    CountAction { label: "10", value: -1.0 },
    CountAction { label: "J", value: -1.0 },
    CountAction { label: "Q", value: -1.0 },
    CountAction { label: "K", value: -1.0 },
    CountAction { label: "A", value: -1.0 },
];

/// A counting system supported by the practice modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountingSystem {
    /// The simple two-button system: +1 for 2–6, −1 for 10–A.
    HiLo,
    /// The fractional per-rank weighting system.
    WongHalves,
}

impl CountingSystem {
    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            CountingSystem::HiLo => "Hi-Lo",
            CountingSystem::WongHalves => "Wong Halves",
        }
    }

    /// The labeled actions a presentation layer offers for this system.
    pub fn actions(self) -> &'static [CountAction] {
        match self {
            CountingSystem::HiLo => &HILO_ACTIONS,
            CountingSystem::WongHalves => &WONG_HALVES_ACTIONS,
        }
    }

    /// The adjustment recorded when a card of `rank` is observed.
    ///
    /// Hi-Lo returns `None` for the neutral ranks 7–9: observing one
    /// records nothing. Wong Halves covers every rank, including the
    /// zero-weight 8, which is still recorded.
    pub fn action_for_rank(self, rank: Rank) -> Option<CountAction> {
        match self {
            CountingSystem::HiLo => match HiLoClass::of(rank) {
                HiLoClass::Low => Some(LOW_ACTION),
                HiLoClass::Neutral => None,
                HiLoClass::High => Some(HI_ACTION),
            },
            CountingSystem::WongHalves => Some(WONG_HALVES_ACTIONS[rank as usize]),
        }
    }
}

impl fmt::Display for CountingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CountingSystem {
    type Err = SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hi-lo" | "hilo" => Ok(CountingSystem::HiLo),
            "wong halves" | "wong-halves" | "wong" => Ok(CountingSystem::WongHalves),
            _ => Err(SystemError::UnknownSystem(s.to_string())),
        }
    }
}

/// How the Hi-Lo system classifies a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiLoClass {
    /// Ranks 2–6; counted +1 as they leave the shoe.
    Low,
    /// Ranks 7–9; not counted at all.
    Neutral,
    /// Tens, faces, and aces; counted −1 as they leave the shoe.
    High,
}

impl HiLoClass {
    /// Classify a rank under Hi-Lo.
    pub fn of(rank: Rank) -> Self {
        match rank {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => HiLoClass::Low,
            Rank::Seven | Rank::Eight | Rank::Nine => HiLoClass::Neutral,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => HiLoClass::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hilo_offers_low_and_hi() {
        let actions = CountingSystem::HiLo.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].label, "Low");
        assert_eq!(actions[0].value, 1.0);
        assert_eq!(actions[1].label, "Hi");
        assert_eq!(actions[1].value, -1.0);
    }

    #[test]
    fn wong_halves_weights_match_the_published_table() {
        let expected = [
            (Rank::Two, 0.5),
            (Rank::Three, 1.0),
            (Rank::Four, 1.0),
            (Rank::Five, 1.5),
            (Rank::Six, 1.0),
            (Rank::Seven, 0.5),
            (Rank::Eight, 0.0),
            (Rank::Nine, -0.5),
            (Rank::Ten, -1.0),
            (Rank::Jack, -1.0),
            (Rank::Queen, -1.0),
            (Rank::King, -1.0),
            (Rank::Ace, -1.0),
        ];
        for (rank, weight) in expected {
            let action = CountingSystem::WongHalves.action_for_rank(rank).unwrap();
            assert_eq!(action.value, weight, "weight for rank {rank}");
        }
    }

    #[test]
    fn wong_halves_action_labels_match_rank_labels() {
        for rank in Rank::ALL {
            let action = CountingSystem::WongHalves.action_for_rank(rank).unwrap();
            assert_eq!(action.label, rank.label());
        }
    }

    #[test]
    fn wong_halves_table_covers_every_rank_once() {
        let actions = CountingSystem::WongHalves.actions();
        assert_eq!(actions.len(), 13);
        for (action, rank) in actions.iter().zip(Rank::ALL) {
            assert_eq!(action.label, rank.label());
        }
    }

    #[test]
    fn hilo_classifies_every_rank() {
        for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
            assert_eq!(HiLoClass::of(rank), HiLoClass::Low);
        }
        for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
            assert_eq!(HiLoClass::of(rank), HiLoClass::Neutral);
        }
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
            assert_eq!(HiLoClass::of(rank), HiLoClass::High);
        }
    }

    #[test]
    fn hilo_neutral_ranks_record_nothing() {
        for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
            assert_eq!(CountingSystem::HiLo.action_for_rank(rank), None);
        }
        assert_eq!(
            CountingSystem::HiLo.action_for_rank(Rank::Two),
            Some(LOW_ACTION)
        );
        assert_eq!(
            CountingSystem::HiLo.action_for_rank(Rank::Ace),
            Some(HI_ACTION)
        );
    }

    #[test]
    fn wong_halves_records_the_zero_weight_eight() {
        let action = CountingSystem::WongHalves
            .action_for_rank(Rank::Eight)
            .unwrap();
        assert_eq!(action.label, "8");
        assert_eq!(action.value, 0.0);
    }

    #[test]
    fn names_display_and_parse() {
        assert_eq!(CountingSystem::HiLo.to_string(), "Hi-Lo");
        assert_eq!(CountingSystem::WongHalves.to_string(), "Wong Halves");
        assert_eq!("Hi-Lo".parse::<CountingSystem>().unwrap(), CountingSystem::HiLo);
        assert_eq!("hilo".parse::<CountingSystem>().unwrap(), CountingSystem::HiLo);
        assert_eq!(
            "Wong Halves".parse::<CountingSystem>().unwrap(),
            CountingSystem::WongHalves
        );
        assert_eq!(
            "wong-halves".parse::<CountingSystem>().unwrap(),
            CountingSystem::WongHalves
        );
    }

    #[test]
    fn unknown_system_names_are_rejected() {
        assert!(matches!(
            "ko".parse::<CountingSystem>(),
            Err(SystemError::UnknownSystem(_))
        ));
    }

    #[test]
    fn system_serde_roundtrip() {
        for system in [CountingSystem::HiLo, CountingSystem::WongHalves] {
            let json = serde_json::to_string(&system).unwrap();
            let parsed: CountingSystem = serde_json::from_str(&json).unwrap();
            assert_eq!(system, parsed);
        }
    }
}
