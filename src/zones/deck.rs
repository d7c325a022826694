//! Draw pile with reshuffle-from-discard.
//!
//! The deck owns only the draw pile. The discard pile belongs to the caller
//! and is handed in on every draw so the deck can recycle it when it runs
//! dry. A card is always in exactly one of: a hand, the draw pile, the
//! discard pile.

use log::debug;
use rustc_hash::FxHashMap;

use crate::cards::{standard_deck, Card, DECK_SIZE};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;

/// Shuffled draw pile. The top card is the last element.
///
/// ## Usage
///
/// ```
/// use hundred_one::core::GameRng;
/// use hundred_one::zones::Deck;
///
/// let mut deck = Deck::standard(GameRng::new(1));
/// let mut discard = Vec::new();
///
/// let card = deck.draw(&mut discard).unwrap();
/// discard.push(card);
/// assert_eq!(deck.len(), 53);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    rng: GameRng,
    reshuffles: u32,
}

impl Deck {
    /// A fresh, shuffled 54-card deck.
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        let mut deck = Self::from_cards(standard_deck(), rng);
        deck.shuffle();
        deck
    }

    /// A draw pile in exactly the given order, top card last.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw_pile: cards,
            rng,
            reshuffles: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Cards in the draw pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.draw_pile
    }

    /// How many times the discard pile has been recycled.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    /// Would a draw yield a card?
    #[must_use]
    pub fn can_draw(&self, discard: &[Card]) -> bool {
        !self.draw_pile.is_empty() || !discard.is_empty()
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Take the top card, recycling `discard` first if the pile is empty.
    ///
    /// Returns `None` only when both piles are empty.
    pub fn draw(&mut self, discard: &mut Vec<Card>) -> Option<Card> {
        if self.draw_pile.is_empty() {
            if discard.is_empty() {
                return None;
            }
            self.draw_pile = std::mem::take(discard);
            self.shuffle();
            self.reshuffles += 1;
            debug!("recycled {} discards into the draw pile", self.draw_pile.len());
        }
        self.draw_pile.pop()
    }

    /// Return a just-drawn card to the top.
    pub fn put_back(&mut self, card: Card) {
        self.draw_pile.push(card);
    }
}

/// Count cards across piles as a multiset.
pub fn census<'a>(piles: impl IntoIterator<Item = &'a [Card]>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for pile in piles {
        for &card in pile {
            *counts.entry(card).or_insert(0) += 1;
        }
    }
    counts
}

/// Check that `piles` together hold exactly one standard deck.
pub fn verify_conservation<'a>(
    piles: impl IntoIterator<Item = &'a [Card]>,
) -> Result<(), EngineError> {
    let found = census(piles);
    let expected = census([standard_deck().as_slice()]);

    let total: usize = found.values().sum();
    if total != DECK_SIZE {
        return Err(EngineError::Conservation(format!(
            "expected {DECK_SIZE} cards, found {total}"
        )));
    }
    // Equal totals mean any missing card shows up as a surplus elsewhere.
    if let Some((card, count)) = found
        .iter()
        .find(|&(card, count)| expected.get(card) != Some(count))
    {
        return Err(EngineError::Conservation(format!(
            "{card} appears {count} times, expected {}",
            expected.get(card).copied().unwrap_or(0)
        )));
    }
    Ok(())
}
