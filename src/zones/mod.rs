//! Card locations outside of hands.
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled draw pile that recycles a caller-owned discard pile
//! - `census` / `verify_conservation`: Multiset checks over piles

pub mod deck;

pub use deck::{census, verify_conservation, Deck};
