//! Core engine types: players, RNG, rule constants, actions, round state, errors.
//!
//! Everything here is plain data. Behaviour lives in `rules` (turn engine,
//! scoring), `players` (CPU policy), and `game` (match loop).

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, PlayerAction};
pub use config::RulesConfig;
pub use error::EngineError;
pub use player::{Player, PlayerId, PlayerKind, PlayerMap, PlayerSeed};
pub use rng::{GameRng, GameRngState};
pub use state::{Direction, RoundPhase, RoundState};
