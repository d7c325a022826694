//! Match orchestration.
//!
//! A match seats a fixed roster with score 0 and plays rounds until any
//! score is at or below the floor (-5 by default). Each round gets a fresh
//! shuffled 54-card deck, two cards per hand dealt round-robin from seat 0,
//! and a random starting seat. The match loser is the lowest score, first
//! seat on ties.

mod runner;

pub use runner::{Match, MatchBuilder, MatchResult, RoundSummary};
