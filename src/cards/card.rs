//! Card values and the standard 54-card list.

use serde::{Deserialize, Serialize};

use super::rank::{Additions, Rank, Suit};

/// Number of cards in a full deck: 13 ranks × 4 suits + 2 jokers.
pub const DECK_SIZE: usize = 54;

/// A playing card.
///
/// Cards are plain values. Jokers carry no suit, so the two jokers in a
/// deck compare equal; conservation checks count cards as a multiset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    /// Possible additions given the current total.
    ///
    /// The total is accepted for interface symmetry; the table depends on
    /// rank alone.
    #[must_use]
    pub fn possible_additions(&self, _current_total: i32) -> Additions {
        self.rank.additions()
    }

    /// Is `addition` one of this card's legal choices?
    #[must_use]
    pub fn allows(&self, addition: i32) -> bool {
        self.rank.additions().contains(&addition)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank, suit.symbol()),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// The 54 cards of a fresh deck, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::SUITED {
            cards.push(Card::new(rank, suit));
        }
    }
    cards.push(Card::joker());
    cards.push(Card::joker());
    cards
}
