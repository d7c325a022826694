//! CPU move selection.
//!
//! Pure functions over (hand, total, deck availability). No I/O, no RNG,
//! no event reporting, so they can be tested in isolation and reused for
//! automatic addition choices elsewhere in the engine.
//!
//! ## Scoring
//!
//! Each (card, addition) candidate gets a score:
//! - skip ranks: `total - skip_penalty`
//! - landing on the flow value: `new_total + flow_bonus`
//! - busting: `-100 - overshoot`
//! - otherwise: `new_total`
//!
//! Non-busting candidates always rank above busting ones, then by score.
//! Ties go to the earliest candidate in hand order.

use log::trace;

use crate::cards::{Card, Rank};
use crate::core::{PlayerAction, RulesConfig};

/// Score floor for a busting candidate, before the overshoot penalty.
pub const BUST_SCORE: i32 = -100;

/// One scored (card, addition) option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub addition: i32,
    pub score: i32,
    pub busts: bool,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        (!self.busts, self.score) > (!other.busts, other.score)
    }
}

/// Score playing `rank` with `addition` on `total`.
///
/// Returns the score and whether the play would bust.
#[must_use]
pub fn evaluate(rank: Rank, addition: i32, total: i32, config: &RulesConfig) -> (i32, bool) {
    if rank.is_skip() {
        return (total - config.skip_penalty, false);
    }

    let new_total = total + addition;
    if new_total > config.threshold {
        (BUST_SCORE - (new_total - config.threshold), true)
    } else if new_total == config.flow_value {
        (new_total + config.flow_bonus, false)
    } else {
        (new_total, false)
    }
}

/// Pick an addition for a card without asking anyone.
///
/// Single-choice cards use their only value; otherwise the value with the
/// best score wins.
#[must_use]
pub fn choose_automatic_addition(card: Card, total: i32, config: &RulesConfig) -> i32 {
    let additions = card.possible_additions(total);
    if additions.len() == 1 {
        return additions[0];
    }

    let mut best: Option<Candidate> = None;
    for &addition in &additions {
        let (score, busts) = evaluate(card.rank, addition, total, config);
        let candidate = Candidate {
            index: 0,
            addition,
            score,
            busts,
        };
        if best.map_or(true, |b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }

    best.map_or(additions[0], |b| b.addition)
}

/// Choose a move for a CPU seat.
///
/// `deck_available` is whether a draw would produce a card.
#[must_use]
pub fn decide(hand: &[Card], total: i32, deck_available: bool, config: &RulesConfig) -> PlayerAction {
    let mut best: Option<Candidate> = None;

    for (index, card) in hand.iter().enumerate() {
        for addition in card.possible_additions(total) {
            if card.rank.is_wild() && total == config.wild_pivot {
                trace!("cpu takes the joker win with hand[{index}]");
                return PlayerAction::play(index, addition);
            }

            let (score, busts) = evaluate(card.rank, addition, total, config);
            let candidate = Candidate {
                index,
                addition,
                score,
                busts,
            };
            trace!("cpu candidate {card} {addition:+}: score {score}, busts {busts}");

            if best.map_or(true, |b| candidate.beats(&b)) {
                best = Some(candidate);
            }
        }
    }

    match best {
        None => PlayerAction::DrawAndPlay,
        Some(b) if b.busts && deck_available => PlayerAction::DrawAndPlay,
        Some(b) => PlayerAction::play(b.index, b.addition),
    }
}
