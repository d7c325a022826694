//! Round rules: the turn engine, play classification, and scoring.
//!
//! - `engine`: `Round`, the per-turn state machine
//! - `outcome`: joker win / bust / flow / normal classification
//! - `scoring`: penalty and score changes at round end

pub mod engine;
pub mod outcome;
pub mod scoring;

pub use engine::{Round, TurnSummary};
pub use outcome::{classify, Resolution, RoundOutcome};
pub use scoring::{apply_scoring, penalty, score_deltas, ScoreChange, ScoreChanges};
