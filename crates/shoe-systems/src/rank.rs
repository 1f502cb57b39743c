use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SystemError;

/// A card rank, two through ace.
///
/// Suits never matter for counting, so a rank is the whole identity of
/// an observed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The display label: `2`–`10` for number cards, `J`, `Q`, `K`, `A`
    /// for faces and aces. Tens are written out, not abbreviated.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" | "j" => Ok(Rank::Jack),
            "Q" | "q" => Ok(Rank::Queen),
            "K" | "k" => Ok(Rank::King),
            "A" | "a" => Ok(Rank::Ace),
            _ => Err(SystemError::UnknownRank(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_thirteen_ranks_in_order() {
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(Rank::ALL[0], Rank::Two);
        assert_eq!(Rank::ALL[12], Rank::Ace);
        assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for rank in Rank::ALL {
            assert_eq!(rank.label().parse::<Rank>().unwrap(), rank);
        }
    }

    #[test]
    fn ten_is_written_out() {
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
    }

    #[test]
    fn lowercase_face_labels_parse() {
        assert_eq!("j".parse::<Rank>().unwrap(), Rank::Jack);
        assert_eq!("q".parse::<Rank>().unwrap(), Rank::Queen);
        assert_eq!("k".parse::<Rank>().unwrap(), Rank::King);
        assert_eq!("a".parse::<Rank>().unwrap(), Rank::Ace);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for label in ["1", "11", "T", "JQ", ""] {
            assert!(matches!(
                label.parse::<Rank>(),
                Err(SystemError::UnknownRank(_))
            ));
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Rank::Five.to_string(), "5");
        assert_eq!(Rank::Ace.to_string(), "A");
    }

    #[test]
    fn serde_roundtrip() {
        for rank in Rank::ALL {
            let json = serde_json::to_string(&rank).unwrap();
            let parsed: Rank = serde_json::from_str(&json).unwrap();
            assert_eq!(rank, parsed);
        }
    }
}
