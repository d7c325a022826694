//! Who makes the decisions: the CPU policy and the external collaborators.
//!
//! ## Key Types
//!
//! - `HumanInput`: Blocking request/response boundary for human seats
//! - `RosterSource`: Supplies the player list once before a match
//! - `cpu`: Pure CPU decision functions
//! - `Autopilot`: `HumanInput` that answers with the CPU policy
//! - `ScriptedInput`: `HumanInput` that replays queued answers
//!
//! Collaborators must return legal moves. The engine does not re-prompt;
//! it rejects an illegal move with an `EngineError` and leaves the turn
//! unplayed.

pub mod cpu;
pub mod scripted;

pub use scripted::{Autopilot, ScriptedInput};

use crate::cards::Card;
use crate::core::{Player, PlayerAction, PlayerId, PlayerSeed};

/// Source of moves for human seats.
pub trait HumanInput {
    /// Ask a human for their move.
    ///
    /// Must return `PlayFromHand` with an in-range index and a legal
    /// addition for that card, or `DrawAndPlay`.
    fn request_action(&mut self, seat: PlayerId, player: &Player, total: i32) -> PlayerAction;

    /// Ask a human to pick between a card's additions.
    ///
    /// Only called for cards with more than one addition. Must return a
    /// member of `card.possible_additions(total)`.
    fn request_addition(&mut self, seat: PlayerId, card: Card, total: i32) -> i32;
}

/// Source of the roster, consulted once before the match starts.
pub trait RosterSource {
    fn request_player_roster(&mut self) -> Vec<PlayerSeed>;
}

impl RosterSource for Vec<PlayerSeed> {
    fn request_player_roster(&mut self) -> Vec<PlayerSeed> {
        self.clone()
    }
}
