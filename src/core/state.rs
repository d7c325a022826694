//! Round bookkeeping: running total, seat order, and flow count.
//!
//! `RoundState` is created fresh each round and dropped once an outcome
//! fires. It holds no cards; the deck and discard pile live beside it in
//! `rules::Round`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Play direction around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Seat step: +1 or -1.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Turn-engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the current player's action.
    #[default]
    AwaitingAction,
    /// An action is being applied.
    Resolving,
    /// A bust or joker win fired; no further turns.
    RoundEnded,
}

/// Per-round counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    player_count: usize,

    /// Running total. Reset to 0 at round start and after each flow.
    pub total: i32,

    pub direction: Direction,

    /// Seat whose turn it is.
    pub current: PlayerId,

    /// Seat that took the immediately preceding turn, if any.
    pub previous: Option<PlayerId>,

    /// Flows so far this round.
    pub flow_count: u32,

    /// Turns taken so far this round.
    pub turn: u32,

    pub phase: RoundPhase,
}

impl RoundState {
    #[must_use]
    pub fn new(player_count: usize, starting: PlayerId) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(starting.index() < player_count, "Starting seat out of range");

        Self {
            player_count,
            total: 0,
            direction: Direction::Forward,
            current: starting,
            previous: None,
            flow_count: 0,
            turn: 0,
            phase: RoundPhase::AwaitingAction,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::RoundEnded
    }

    /// Flip play direction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// The seat that would act next in the current direction.
    #[must_use]
    pub fn next_seat(&self) -> PlayerId {
        self.current.offset(self.direction.step(), self.player_count)
    }

    /// Record the current seat as previous actor and move on.
    pub fn advance(&mut self) {
        self.previous = Some(self.current);
        self.current = self.next_seat();
        self.phase = RoundPhase::AwaitingAction;
    }
}
