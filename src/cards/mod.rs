//! Card model: ranks, suits, and card values.
//!
//! ## Key Types
//!
//! - `Rank`: Closed set of ranks with their addition table and effect predicates
//! - `Suit`: Decorative suit
//! - `Card`: A (rank, optional suit) value
//!
//! Rank effects are plain predicates (`is_skip`, `is_reversing`, `is_wild`)
//! over a finite lookup, not a trait hierarchy.

pub mod card;
pub mod rank;

pub use card::{standard_deck, Card, DECK_SIZE};
pub use rank::{Additions, Rank, Suit};
