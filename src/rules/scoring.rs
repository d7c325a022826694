//! Round-end scoring.
//!
//! `penalty = flow_count + 1`. A bust costs the loser the penalty; a joker
//! win moves the penalty from the loser to the winner. Other seats are
//! untouched and nothing is clamped.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::outcome::RoundOutcome;
use crate::core::{Player, PlayerId, PlayerMap};

/// A score adjustment applied at round end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    pub player: PlayerId,
    pub delta: i64,
    /// Score after the change.
    pub score: i64,
}

pub type ScoreChanges = SmallVec<[ScoreChange; 2]>;

#[must_use]
pub const fn penalty(flow_count: u32) -> i64 {
    flow_count as i64 + 1
}

/// Per-seat deltas for an outcome, without touching any scores.
#[must_use]
pub fn score_deltas(outcome: RoundOutcome, flow_count: u32) -> SmallVec<[(PlayerId, i64); 2]> {
    let stake = penalty(flow_count);
    match outcome {
        RoundOutcome::Bust { loser } => smallvec![(loser, -stake)],
        RoundOutcome::JokerWin { winner, loser } => smallvec![(winner, stake), (loser, -stake)],
    }
}

/// Apply an outcome to the roster's scores.
pub fn apply_scoring(
    outcome: RoundOutcome,
    flow_count: u32,
    players: &mut PlayerMap<Player>,
) -> ScoreChanges {
    score_deltas(outcome, flow_count)
        .into_iter()
        .map(|(player, delta)| {
            let seat = &mut players[player];
            seat.score += delta;
            ScoreChange {
                player,
                delta,
                score: seat.score,
            }
        })
        .collect()
}
