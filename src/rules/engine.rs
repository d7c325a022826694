//! Turn engine: one round of play.
//!
//! A `Round` owns the draw pile, the discard pile, and the round counters.
//! The roster is owned by the match and lent in for each turn; the engine
//! touches only the acting seat's hand (and, at round end, the scores of
//! the seats named by the outcome).
//!
//! ## Turn sequence
//!
//! 1. Obtain an action (human collaborator or CPU policy).
//! 2. Take the card: from hand, or from the deck. An empty deck falls back
//!    to the first hand card; an empty hand as well skips the turn.
//! 3. A reversing rank flips direction. Skip ranks contribute 0.
//! 4. Classify: joker win, bust, flow, or normal.
//! 5. Discard the card; a card played from hand is replaced by a draw.
//! 6. On a round-ending outcome apply scoring and stop; otherwise advance.

use im::Vector;
use log::{debug, info};

use super::outcome::{classify, Resolution, RoundOutcome};
use super::scoring::{apply_scoring, ScoreChanges};
use crate::cards::Card;
use crate::core::{
    ActionRecord, EngineError, Player, PlayerAction, PlayerId, PlayerKind, PlayerMap, RoundPhase,
    RoundState, RulesConfig,
};
use crate::events::{EventSink, GameEvent};
use crate::players::{cpu, HumanInput};
use crate::zones::{verify_conservation, Deck};

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: PlayerId,

    /// Card played, or `None` if the turn was skipped.
    pub card: Option<Card>,

    /// Addition as chosen.
    pub addition: i32,

    /// Classification, or `None` if the turn was skipped.
    pub resolution: Option<Resolution>,

    /// Running total after the turn.
    pub total: i32,

    /// Set when this turn ended the round.
    pub outcome: Option<RoundOutcome>,

    /// Score changes applied because the round ended.
    pub score_changes: ScoreChanges,
}

/// Where the played card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Hand,
    Deck,
    /// Deck empty, so the first hand card was played instead. Not replaced.
    HandFallback,
}

/// One round of play.
#[derive(Clone, Debug)]
pub struct Round {
    config: RulesConfig,
    state: RoundState,
    deck: Deck,
    discard: Vec<Card>,
    history: Vector<ActionRecord>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Start a round with the given draw pile and starting seat.
    #[must_use]
    pub fn new(config: RulesConfig, deck: Deck, player_count: usize, starting: PlayerId) -> Self {
        Self {
            config,
            state: RoundState::new(player_count, starting),
            deck,
            discard: Vec::new(),
            history: Vector::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Mutable counters, for setting up positions.
    pub fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Mutable discard pile, for setting up positions.
    pub fn discard_mut(&mut self) -> &mut Vec<Card> {
        &mut self.discard
    }

    /// Plays so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Clear every hand and deal `hand_size` cards each, one at a time,
    /// starting from seat 0.
    pub fn deal(&mut self, players: &mut PlayerMap<Player>) {
        for (_, player) in players.iter_mut() {
            player.hand.clear();
        }
        for _ in 0..self.config.hand_size {
            for seat in PlayerId::all(players.player_count()) {
                if let Some(card) = self.deck.draw(&mut self.discard) {
                    players[seat].hand.push(card);
                }
            }
        }
        debug!(
            "dealt {} cards to {} players, {} left in deck",
            self.config.hand_size,
            players.player_count(),
            self.deck.len()
        );
    }

    /// Check that deck, discard, and hands hold exactly one full deck.
    pub fn audit(&self, players: &PlayerMap<Player>) -> Result<(), EngineError> {
        let hands = players.values().map(|p| p.hand.as_slice());
        verify_conservation(
            [self.deck.cards(), self.discard.as_slice()]
                .into_iter()
                .chain(hands),
        )
    }

    /// Ask the current seat for a move.
    pub fn request_action(
        &self,
        players: &PlayerMap<Player>,
        human: &mut dyn HumanInput,
    ) -> PlayerAction {
        let seat = self.state.current;
        let player = &players[seat];
        match player.kind {
            PlayerKind::Human => human.request_action(seat, player, self.state.total),
            PlayerKind::Cpu => cpu::decide(
                &player.hand,
                self.state.total,
                self.deck.can_draw(&self.discard),
                &self.config,
            ),
        }
    }

    /// Obtain the current seat's move and apply it.
    pub fn play_turn(
        &mut self,
        players: &mut PlayerMap<Player>,
        human: &mut dyn HumanInput,
        sink: &mut dyn EventSink,
    ) -> Result<TurnSummary, EngineError> {
        if self.is_over() {
            return Err(EngineError::RoundOver);
        }
        sink.report(&GameEvent::TurnStarted {
            player: self.state.current,
            total: self.state.total,
        });
        let action = self.request_action(players, human);
        self.apply_action(players, action, human, sink)
    }

    /// Apply `action` for the current seat.
    ///
    /// An illegal action is rejected before anything moves, except that a
    /// drawn card given an illegal addition goes back on top of the deck.
    pub fn apply_action(
        &mut self,
        players: &mut PlayerMap<Player>,
        action: PlayerAction,
        human: &mut dyn HumanInput,
        sink: &mut dyn EventSink,
    ) -> Result<TurnSummary, EngineError> {
        if self.is_over() {
            return Err(EngineError::RoundOver);
        }

        let seat = self.state.current;
        let total = self.state.total;
        self.state.phase = RoundPhase::Resolving;

        let taken = match action {
            PlayerAction::PlayFromHand { index, addition } => {
                match take_from_hand(&mut players[seat], index, addition) {
                    Ok(card) => Some((card, addition, Source::Hand)),
                    Err(err) => {
                        self.state.phase = RoundPhase::AwaitingAction;
                        return Err(err);
                    }
                }
            }
            PlayerAction::DrawAndPlay => match self.draw(sink) {
                Some(card) => match self.addition_for(seat, &players[seat], card, human) {
                    Ok(addition) => Some((card, addition, Source::Deck)),
                    Err(err) => {
                        self.deck.put_back(card);
                        self.state.phase = RoundPhase::AwaitingAction;
                        return Err(err);
                    }
                },
                None if !players[seat].hand.is_empty() => {
                    let card = players[seat].hand.remove(0);
                    let addition = cpu::choose_automatic_addition(card, total, &self.config);
                    Some((card, addition, Source::HandFallback))
                }
                None => None,
            },
        };

        self.state.turn += 1;

        let Some((card, addition, source)) = taken else {
            debug!("{seat} has nothing to play; turn skipped");
            sink.report(&GameEvent::TurnSkipped { player: seat });
            self.history.push_back(ActionRecord::skipped(seat, self.state.turn));
            self.state.advance();
            return Ok(TurnSummary {
                player: seat,
                card: None,
                addition: 0,
                resolution: None,
                total,
                outcome: None,
                score_changes: ScoreChanges::new(),
            });
        };

        self.resolve(players, seat, card, addition, source, sink)
    }

    fn resolve(
        &mut self,
        players: &mut PlayerMap<Player>,
        seat: PlayerId,
        card: Card,
        addition: i32,
        source: Source,
        sink: &mut dyn EventSink,
    ) -> Result<TurnSummary, EngineError> {
        let total = self.state.total;
        let from_hand = source != Source::Deck;

        sink.report(&GameEvent::CardPlayed {
            player: seat,
            card,
            addition,
            from_hand,
        });
        self.history
            .push_back(ActionRecord::played(seat, card, addition, from_hand, self.state.turn));
        self.discard.push(card);

        if card.rank.is_reversing() {
            self.state.reverse();
            sink.report(&GameEvent::DirectionReversed {
                player: seat,
                direction: self.state.direction,
            });
        }

        let effective = card.rank.effective_addition(addition);
        let resolution = classify(card.rank, total, effective, &self.config);
        debug!("{seat} plays {card} ({addition:+}) on {total}: {resolution:?}");

        let outcome = match resolution {
            Resolution::JokerWin => {
                let loser = self.state.previous.ok_or(EngineError::NoPreviousActor)?;
                sink.report(&GameEvent::JokerWin { winner: seat, loser });
                Some(RoundOutcome::JokerWin { winner: seat, loser })
            }
            Resolution::Bust => {
                sink.report(&GameEvent::Bust {
                    loser: seat,
                    total: total + effective,
                });
                Some(RoundOutcome::Bust { loser: seat })
            }
            Resolution::Flow => {
                self.state.flow_count += 1;
                self.state.total = 0;
                sink.report(&GameEvent::Flow {
                    player: seat,
                    flow_count: self.state.flow_count,
                });
                None
            }
            Resolution::Normal => {
                self.state.total = total + effective;
                None
            }
        };

        if source == Source::Hand {
            if let Some(replacement) = self.draw(sink) {
                players[seat].hand.push(replacement);
            }
        }

        let mut score_changes = ScoreChanges::new();
        match outcome {
            Some(outcome) => {
                self.state.phase = RoundPhase::RoundEnded;
                self.outcome = Some(outcome);
                score_changes = apply_scoring(outcome, self.state.flow_count, players);
                for change in &score_changes {
                    sink.report(&GameEvent::ScoreChanged {
                        player: change.player,
                        delta: change.delta,
                        score: change.score,
                    });
                }
                info!(
                    "round over after {} turns with {} flows: {outcome:?}",
                    self.state.turn, self.state.flow_count
                );
            }
            None => self.state.advance(),
        }

        Ok(TurnSummary {
            player: seat,
            card: Some(card),
            addition,
            resolution: Some(resolution),
            total: self.state.total,
            outcome,
            score_changes,
        })
    }

    /// Draw one card, narrating a reshuffle if the discard was recycled.
    fn draw(&mut self, sink: &mut dyn EventSink) -> Option<Card> {
        let before = self.deck.reshuffle_count();
        let card = self.deck.draw(&mut self.discard);
        if self.deck.reshuffle_count() != before {
            sink.report(&GameEvent::DeckReshuffled {
                cards: self.deck.len() + 1,
            });
        }
        card
    }

    /// Addition for a drawn card: the only choice, the human's pick, or the
    /// CPU's automatic pick.
    fn addition_for(
        &self,
        seat: PlayerId,
        player: &Player,
        card: Card,
        human: &mut dyn HumanInput,
    ) -> Result<i32, EngineError> {
        let total = self.state.total;
        let additions = card.possible_additions(total);
        if additions.len() == 1 {
            return Ok(additions[0]);
        }
        match player.kind {
            PlayerKind::Human => {
                let addition = human.request_addition(seat, card, total);
                if additions.contains(&addition) {
                    Ok(addition)
                } else {
                    Err(EngineError::IllegalAddition { card, addition })
                }
            }
            PlayerKind::Cpu => Ok(cpu::choose_automatic_addition(card, total, &self.config)),
        }
    }
}

/// Remove `hand[index]` if the index and addition are legal.
fn take_from_hand(player: &mut Player, index: usize, addition: i32) -> Result<Card, EngineError> {
    let card = *player.hand.get(index).ok_or(EngineError::InvalidHandIndex {
        index,
        hand_size: player.hand.len(),
    })?;
    if !card.allows(addition) {
        return Err(EngineError::IllegalAddition { card, addition });
    }
    player.hand.remove(index);
    Ok(card)
}
