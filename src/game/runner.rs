//! Match orchestration.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::core::{
    EngineError, GameRng, Player, PlayerId, PlayerMap, PlayerSeed, RulesConfig,
};
use crate::events::{EventSink, GameEvent};
use crate::players::{HumanInput, RosterSource};
use crate::rules::{penalty, Round, RoundOutcome};
use crate::zones::Deck;

/// Result of one finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    pub round: u32,
    pub starting: PlayerId,
    pub outcome: RoundOutcome,
    pub flow_count: u32,
    pub penalty: i64,
    pub turns: u32,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub loser: PlayerId,
    pub rounds: u32,
    pub scores: PlayerMap<i64>,
}

/// A match: a fixed roster playing rounds until someone hits the floor.
#[derive(Clone, Debug)]
pub struct Match {
    config: RulesConfig,
    players: PlayerMap<Player>,
    rng: GameRng,
    rounds_played: u32,
    history: Vector<RoundSummary>,
}

/// Builder for creating a Match.
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: RulesConfig,
    seeds: Vec<PlayerSeed>,
    seed: Option<u64>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, seed: PlayerSeed) -> Self {
        self.seeds.push(seed);
        self
    }

    pub fn human(self, name: impl Into<String>) -> Self {
        self.player(PlayerSeed::human(name))
    }

    pub fn cpu(self, name: impl Into<String>) -> Self {
        self.player(PlayerSeed::cpu(name))
    }

    /// Append the collaborator's roster.
    pub fn roster(mut self, source: &mut dyn RosterSource) -> Self {
        self.seeds.extend(source.request_player_roster());
        self
    }

    /// Fix the RNG seed. Without one the match seeds from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the match.
    pub fn build(self) -> Result<Match, EngineError> {
        self.config.validate()?;

        let count = self.seeds.len();
        if count < 2 {
            return Err(EngineError::TooFewPlayers { got: count });
        }
        let max = (DECK_SIZE / self.config.hand_size).min(255);
        if count > max {
            return Err(EngineError::TooManyPlayers { got: count, max });
        }

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("new match: {count} players, seed {}", rng.seed());

        let players = PlayerMap::from_vec(self.seeds.into_iter().map(Player::new).collect());
        Ok(Match {
            config: self.config,
            players,
            rng,
            rounds_played: 0,
            history: Vector::new(),
        })
    }
}

impl Match {
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundSummary> {
        &self.history
    }

    /// Has any score reached the floor?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.values().any(|p| p.score <= self.config.floor)
    }

    /// Lowest score, first seat on ties.
    #[must_use]
    pub fn lowest_scorer(&self) -> PlayerId {
        let mut lowest = PlayerId::new(0);
        for (seat, player) in self.players.iter() {
            if player.score < self.players[lowest].score {
                lowest = seat;
            }
        }
        lowest
    }

    /// Set up the next round: fresh shuffled deck, fresh hands, random
    /// starting seat.
    pub fn start_round(&mut self, sink: &mut dyn EventSink) -> Round {
        let mut round_rng = self.rng.fork();
        let starting = PlayerId::new(round_rng.gen_range_usize(0..self.players.player_count()) as u8);
        let deck = Deck::standard(round_rng);

        let mut round = Round::new(self.config.clone(), deck, self.players.player_count(), starting);
        round.deal(&mut self.players);

        let number = self.rounds_played + 1;
        info!("round {number} starts with {starting}");
        sink.report(&GameEvent::RoundStarted {
            round: number,
            starting,
        });
        round
    }

    /// Play one full round.
    pub fn play_round(
        &mut self,
        human: &mut dyn HumanInput,
        sink: &mut dyn EventSink,
    ) -> Result<RoundSummary, EngineError> {
        let mut round = self.start_round(sink);
        let starting = round.state().current;

        let outcome = loop {
            let turn = round.play_turn(&mut self.players, human, sink)?;
            if let Some(outcome) = turn.outcome {
                break outcome;
            }
        };
        debug_assert!(round.audit(&self.players).is_ok(), "card conservation broken");

        self.rounds_played += 1;
        let flow_count = round.state().flow_count;
        let summary = RoundSummary {
            round: self.rounds_played,
            starting,
            outcome,
            flow_count,
            penalty: penalty(flow_count),
            turns: round.state().turn,
        };
        debug!("{summary:?}");
        sink.report(&GameEvent::RoundEnded {
            round: summary.round,
            outcome,
        });
        self.history.push_back(summary.clone());
        Ok(summary)
    }

    /// Play rounds until a score reaches the floor.
    pub fn run(
        &mut self,
        human: &mut dyn HumanInput,
        sink: &mut dyn EventSink,
    ) -> Result<MatchResult, EngineError> {
        while !self.is_over() {
            self.play_round(human, sink)?;
        }

        let loser = self.lowest_scorer();
        info!(
            "match over after {} rounds; {} ({}) loses",
            self.rounds_played, self.players[loser].name, loser
        );
        sink.report(&GameEvent::MatchEnded {
            loser,
            rounds: self.rounds_played,
        });

        Ok(MatchResult {
            loser,
            rounds: self.rounds_played,
            scores: PlayerMap::new(self.players.player_count(), |p| self.players[p].score),
        })
    }
}
