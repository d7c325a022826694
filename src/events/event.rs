//! Narration events emitted by the engine.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Direction, PlayerId};
use crate::rules::RoundOutcome;

/// Something that happened at the table.
///
/// Events are observational only: nothing in the engine reads them back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        starting: PlayerId,
    },
    TurnStarted {
        player: PlayerId,
        total: i32,
    },
    CardPlayed {
        player: PlayerId,
        card: Card,
        addition: i32,
        from_hand: bool,
    },
    /// Nothing to draw and nothing in hand.
    TurnSkipped {
        player: PlayerId,
    },
    DeckReshuffled {
        cards: usize,
    },
    DirectionReversed {
        player: PlayerId,
        direction: Direction,
    },
    Flow {
        player: PlayerId,
        flow_count: u32,
    },
    Bust {
        loser: PlayerId,
        total: i32,
    },
    JokerWin {
        winner: PlayerId,
        loser: PlayerId,
    },
    ScoreChanged {
        player: PlayerId,
        delta: i64,
        score: i64,
    },
    RoundEnded {
        round: u32,
        outcome: RoundOutcome,
    },
    MatchEnded {
        loser: PlayerId,
        rounds: u32,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoundStarted { round, starting } => {
                write!(f, "round {round} starts with {starting}")
            }
            GameEvent::TurnStarted { player, total } => write!(f, "{player} to act at {total}"),
            GameEvent::CardPlayed {
                player,
                card,
                addition,
                from_hand,
            } => {
                let source = if *from_hand { "hand" } else { "deck" };
                write!(f, "{player} plays {card} for {addition:+} from {source}")
            }
            GameEvent::TurnSkipped { player } => write!(f, "{player} has nothing to play"),
            GameEvent::DeckReshuffled { cards } => {
                write!(f, "discard pile reshuffled into a {cards}-card deck")
            }
            GameEvent::DirectionReversed { player, direction } => {
                write!(f, "{player} reverses play to {direction:?}")
            }
            GameEvent::Flow { player, flow_count } => {
                write!(f, "{player} hits the flow (x{flow_count}), total resets")
            }
            GameEvent::Bust { loser, total } => write!(f, "{loser} busts at {total}"),
            GameEvent::JokerWin { winner, loser } => {
                write!(f, "{winner} wins with a joker on the pivot; {loser} loses")
            }
            GameEvent::ScoreChanged {
                player,
                delta,
                score,
            } => write!(f, "{player} {delta:+} -> {score}"),
            GameEvent::RoundEnded { round, .. } => write!(f, "round {round} over"),
            GameEvent::MatchEnded { loser, rounds } => {
                write!(f, "match over after {rounds} rounds; {loser} loses")
            }
        }
    }
}
