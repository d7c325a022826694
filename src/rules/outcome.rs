//! Play classification.
//!
//! Checked in order: joker win, bust, flow, normal. A joker win looks at
//! the total *before* the play; bust and flow look at the total after the
//! effective addition.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{PlayerId, RulesConfig};

/// How a single play resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Joker on the pivot total. Ends the round.
    JokerWin,
    /// New total above the threshold. Ends the round.
    Bust,
    /// New total exactly on the flow value. Total resets, round continues.
    Flow,
    /// Total advances, round continues.
    Normal,
}

impl Resolution {
    #[must_use]
    pub fn ends_round(self) -> bool {
        matches!(self, Resolution::JokerWin | Resolution::Bust)
    }
}

/// Classify playing `rank` on `total_before` with the given effective addition.
#[must_use]
pub fn classify(rank: Rank, total_before: i32, effective: i32, config: &RulesConfig) -> Resolution {
    if rank.is_wild() && total_before == config.wild_pivot {
        return Resolution::JokerWin;
    }

    let new_total = total_before + effective;
    if new_total > config.threshold {
        Resolution::Bust
    } else if new_total == config.flow_value {
        Resolution::Flow
    } else {
        Resolution::Normal
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    Bust { loser: PlayerId },
    JokerWin { winner: PlayerId, loser: PlayerId },
}

impl RoundOutcome {
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        match *self {
            RoundOutcome::Bust { loser } | RoundOutcome::JokerWin { loser, .. } => loser,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match *self {
            RoundOutcome::Bust { .. } => None,
            RoundOutcome::JokerWin { winner, .. } => Some(winner),
        }
    }
}
