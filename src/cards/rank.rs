//! Ranks, suits, and the rank-to-additions table.
//!
//! A rank fully determines what a card can contribute to the running total.
//! Suits are carried for display only and never affect legality.
//!
//! | Rank | Additions | Effect |
//! |---|---|---|
//! | 2–7 | face value | |
//! | 8 | 0 | skip |
//! | 9 | 0 | skip, reverses direction |
//! | 10 | -10 or +10 | |
//! | J / Q / K | 10 / 20 / 30 | |
//! | A | 1 or 11 | |
//! | Joker | 50 | wins on the pivot total |

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Candidate contributions a card may add to the running total.
///
/// Never empty. At most two entries, so it lives inline.
pub type Additions = SmallVec<[i32; 2]>;

/// Card rank.
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
    Joker,
}

impl Rank {
    /// The thirteen suited ranks, in deck-building order.
    pub const SUITED: [Rank; 13] = [
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

    /// Every rank including the joker.
    pub const ALL: [Rank; 14] = [
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
        Rank::Joker,
    ];

    /// Possible additions for this rank, in presentation order.
    ///
    /// Skip ranks report `{0}`; the engine zeroes their contribution
    /// regardless of what a caller passes in.
    #[must_use]
    pub fn additions(self) -> Additions {
        match self {
            Rank::Two => smallvec![2],
            Rank::Three => smallvec![3],
            Rank::Four => smallvec![4],
            Rank::Five => smallvec![5],
            Rank::Six => smallvec![6],
            Rank::Seven => smallvec![7],
            Rank::Eight | Rank::Nine => smallvec![0],
            Rank::Ten => smallvec![-10, 10],
            Rank::Jack => smallvec![10],
            Rank::Queen => smallvec![20],
            Rank::King => smallvec![30],
            Rank::Ace => smallvec![1, 11],
            Rank::Joker => smallvec![50],
        }
    }

    /// Does this rank offer more than one addition?
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        matches!(self, Rank::Ten | Rank::Ace)
    }

    /// Contributes zero to the total (8 and 9).
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Rank::Eight | Rank::Nine)
    }

    /// Flips play direction when played (9).
    #[must_use]
    pub const fn is_reversing(self) -> bool {
        matches!(self, Rank::Nine)
    }

    /// The joker.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Joker)
    }

    /// Amount this rank adds to the running total for a chosen addition.
    #[must_use]
    pub const fn effective_addition(self, chosen: i32) -> i32 {
        if self.is_skip() {
            0
        } else {
            chosen
        }
    }

    /// Face label used in narration.
    #[must_use]
    pub const fn label(self) -> &'static str {
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
            Rank::Joker => "Joker",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit. Decorative only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}
