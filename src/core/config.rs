//! Rule constants.
//!
//! The modelled variants are the bust threshold, the flow value, the wild
//! pivot, and the match floor. The CPU policy's tuning constants live here
//! too so a table can be tuned without touching the policy.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Rule constants for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// A play busts when the new total exceeds this.
    pub threshold: i32,

    /// A play that lands exactly here is a flow.
    pub flow_value: i32,

    /// A joker played on exactly this total wins the round.
    pub wild_pivot: i32,

    /// The match ends once any score is at or below this.
    pub floor: i64,

    /// Cards dealt to each player at round start.
    pub hand_size: usize,

    /// CPU bonus for a candidate that lands on `flow_value`.
    pub flow_bonus: i32,

    /// CPU scores a skip play as `total - skip_penalty`.
    pub skip_penalty: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            threshold: 101,
            flow_value: 101,
            wild_pivot: 100,
            floor: -5,
            hand_size: 2,
            flow_bonus: 5,
            skip_penalty: 1,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_flow_value(mut self, flow_value: i32) -> Self {
        self.flow_value = flow_value;
        self
    }

    #[must_use]
    pub fn with_wild_pivot(mut self, pivot: i32) -> Self {
        self.wild_pivot = pivot;
        self
    }

    #[must_use]
    pub fn with_floor(mut self, floor: i64) -> Self {
        self.floor = floor;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Check that the constants describe a playable game.
    ///
    /// The pivot must be non-zero: every round opens at total 0 with no
    /// previous actor, so a zero pivot would allow a first-turn joker win.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.flow_value > self.threshold {
            return Err(EngineError::InvalidConfig(format!(
                "flow value {} is above the bust threshold {}",
                self.flow_value, self.threshold
            )));
        }
        if self.wild_pivot == 0 || self.wild_pivot >= self.threshold {
            return Err(EngineError::InvalidConfig(format!(
                "wild pivot {} must be non-zero and below the threshold {}",
                self.wild_pivot, self.threshold
            )));
        }
        if self.floor >= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "floor {} must be negative",
                self.floor
            )));
        }
        if self.hand_size == 0 {
            return Err(EngineError::InvalidConfig("hand size must be at least 1".into()));
        }
        Ok(())
    }
}
