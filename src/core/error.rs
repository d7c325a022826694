//! Engine error type.
//!
//! Running out of cards is never an error: an empty draw pile with an empty
//! discard just means "no card", and the engine falls back. Errors here are
//! contract violations by a collaborator or a broken invariant.

use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("hand index {index} is out of range for a hand of {hand_size}")]
    InvalidHandIndex { index: usize, hand_size: usize },

    #[error("{addition} is not a legal addition for {card}")]
    IllegalAddition { card: Card, addition: i32 },

    #[error("the round has already ended")]
    RoundOver,

    #[error("joker win fired with no previous actor recorded")]
    NoPreviousActor,

    #[error("invalid rules config: {0}")]
    InvalidConfig(String),

    #[error("a match needs at least 2 players, got {got}")]
    TooFewPlayers { got: usize },

    #[error("a deck can only deal to {max} players, got {got}")]
    TooManyPlayers { got: usize, max: usize },

    #[error("card conservation violated: {0}")]
    Conservation(String),
}

impl EngineError {
    /// Was this raised by an action the collaborator should not have returned?
    #[must_use]
    pub fn is_invalid_action(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidHandIndex { .. } | EngineError::IllegalAddition { .. }
        )
    }
}
