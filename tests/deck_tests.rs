//! Deck behaviour: full-deck draws, reshuffles, and card conservation.

use std::collections::HashSet;

use proptest::prelude::*;

use hundred_one::cards::standard_deck;
use hundred_one::zones::{census, verify_conservation};
use hundred_one::{Card, Deck, GameRng, Rank, Suit, DECK_SIZE};

/// 54 draws from a fresh deck yield 54 distinct cards, then nothing.
#[test]
fn test_full_deck_draws_distinct_cards() {
    let mut deck = Deck::standard(GameRng::new(2024));
    let mut discard = Vec::new();

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = deck.draw(&mut discard).unwrap();
        assert!(seen.insert(card), "{card} drawn twice");
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(seen.iter().filter(|c| c.rank == Rank::Joker).count(), 2);
    assert_eq!(deck.draw(&mut discard), None);
}

/// Empty deck with three discards: one is drawn, two remain, discard empties.
#[test]
fn test_reshuffle_from_three_discards() {
    let discards = vec![
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::joker(),
    ];
    let mut deck = Deck::from_cards(Vec::new(), GameRng::new(5));
    let mut discard = discards.clone();

    let drawn = deck.draw(&mut discard).unwrap();

    assert!(discards.contains(&drawn));
    assert!(discard.is_empty());
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.reshuffle_count(), 1);
    assert!(!deck.cards().contains(&drawn));
}

/// Same seed, same shuffle.
#[test]
fn test_shuffle_is_seeded() {
    let a = Deck::standard(GameRng::new(77));
    let b = Deck::standard(GameRng::new(77));
    let c = Deck::standard(GameRng::new(78));

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
}

/// The census counts duplicates across piles.
#[test]
fn test_census_across_piles() {
    let pile_a = vec![Card::joker(), Card::new(Rank::Ace, Suit::Spades)];
    let pile_b = vec![Card::joker()];

    let counts = census([pile_a.as_slice(), pile_b.as_slice()]);

    assert_eq!(counts[&Card::joker()], 2);
    assert_eq!(counts[&Card::new(Rank::Ace, Suit::Spades)], 1);
    assert_eq!(counts.len(), 2);
}

proptest! {
    /// Any mix of draws and discards keeps exactly one deck in play.
    #[test]
    fn prop_draw_and_discard_conserves_cards(
        seed in any::<u64>(),
        steps in prop::collection::vec(any::<bool>(), 0..300),
    ) {
        let mut deck = Deck::standard(GameRng::new(seed));
        let mut discard = Vec::new();
        let mut hand: Vec<Card> = Vec::new();

        for draw in steps {
            if draw {
                if let Some(card) = deck.draw(&mut discard) {
                    hand.push(card);
                }
            } else if let Some(card) = hand.pop() {
                discard.push(card);
            }
            prop_assert!(
                verify_conservation([deck.cards(), discard.as_slice(), hand.as_slice()]).is_ok()
            );
        }
    }

    /// A draw returns `None` only when both piles are empty.
    #[test]
    fn prop_draw_none_only_when_exhausted(
        seed in any::<u64>(),
        in_deck in 0usize..=DECK_SIZE,
    ) {
        let mut cards = standard_deck();
        let discarded = cards.split_off(in_deck);
        let mut deck = Deck::from_cards(cards, GameRng::new(seed));
        let mut discard = discarded;

        let expected = !deck.is_empty() || !discard.is_empty();
        prop_assert_eq!(deck.can_draw(&discard), expected);
        prop_assert_eq!(deck.draw(&mut discard).is_some(), expected);
    }
}
