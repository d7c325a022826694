//! Player actions and the per-round action log.
//!
//! A turn is one of two moves:
//! - play a card from hand with a chosen addition
//! - draw the top card and play it immediately

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// A move returned by a human collaborator or the CPU policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play `hand[index]`, contributing `addition`.
    PlayFromHand { index: usize, addition: i32 },
    /// Draw a card and play it; the addition is chosen after the draw.
    DrawAndPlay,
}

impl PlayerAction {
    #[must_use]
    pub const fn play(index: usize, addition: i32) -> Self {
        PlayerAction::PlayFromHand { index, addition }
    }
}

/// A resolved play, kept in round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,

    /// Card that hit the table. `None` when the turn was skipped.
    pub card: Option<Card>,

    /// Addition as chosen (skip ranks record their nominal 0).
    pub addition: i32,

    /// Whether the card came from the player's hand.
    pub from_hand: bool,

    /// Turn number within the round, starting at 1.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn played(player: PlayerId, card: Card, addition: i32, from_hand: bool, turn: u32) -> Self {
        Self {
            player,
            card: Some(card),
            addition,
            from_hand,
            turn,
        }
    }

    #[must_use]
    pub fn skipped(player: PlayerId, turn: u32) -> Self {
        Self {
            player,
            card: None,
            addition: 0,
            from_hand: false,
            turn,
        }
    }
}
