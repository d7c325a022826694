//! # hundred-one
//!
//! Rules engine for "101", a shedding-style card game played with a
//! 54-card deck (standard 52 plus two jokers).
//!
//! Players take turns adding a card's value to a shared running total.
//! Pushing the total past 101 loses the round; landing exactly on 101 is a
//! "flow" that resets the total and raises the stakes; a joker played when
//! the total is exactly 100 wins the round outright against the previous
//! player. Rounds repeat until some player's cumulative score reaches -5.
//!
//! ## Design Principles
//!
//! 1. **Single-threaded and deterministic**: every random choice goes
//!    through a seeded `GameRng`, so a seed fully determines a CPU-only match.
//!
//! 2. **Explicit collaborators**: human moves and the roster come from the
//!    `HumanInput` / `RosterSource` traits; narration goes out through an
//!    `EventSink`. The engine does no I/O of its own beyond the `log` facade.
//!
//! 3. **Configuration over constants**: thresholds, hand size, and the match
//!    floor live in `RulesConfig`.
//!
//! ## Modules
//!
//! - `cards`: Ranks, suits, and the addition table
//! - `core`: Players, RNG, configuration, actions, round state, errors
//! - `zones`: The deck and card-conservation checks
//! - `events`: Narration events and sinks
//! - `players`: CPU policy and the human/roster collaborator traits
//! - `rules`: Turn engine, play classification, scoring
//! - `game`: Match orchestration

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, Rank, Suit, DECK_SIZE};

pub use crate::core::{
    ActionRecord, Direction, EngineError, GameRng, GameRngState, Player, PlayerAction, PlayerId,
    PlayerKind, PlayerMap, PlayerSeed, RoundPhase, RoundState, RulesConfig,
};

pub use crate::zones::Deck;

pub use crate::events::{EventLog, EventSink, GameEvent, LogSink, NullSink};

pub use crate::players::{Autopilot, HumanInput, RosterSource, ScriptedInput};

pub use crate::rules::{Resolution, Round, RoundOutcome, TurnSummary};

pub use crate::game::{Match, MatchBuilder, MatchResult, RoundSummary};
