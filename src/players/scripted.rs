//! Non-interactive `HumanInput` implementations.

use std::collections::VecDeque;

use super::cpu;
use super::HumanInput;
use crate::cards::Card;
use crate::core::{Player, PlayerAction, PlayerId, RulesConfig};

/// Answers human prompts with the CPU policy.
///
/// Useful for all-CPU tables (where it is never consulted) and for letting
/// a human seat play itself.
#[derive(Clone, Debug, Default)]
pub struct Autopilot {
    config: RulesConfig,
}

impl Autopilot {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }
}

impl HumanInput for Autopilot {
    fn request_action(&mut self, _seat: PlayerId, player: &Player, total: i32) -> PlayerAction {
        cpu::decide(&player.hand, total, true, &self.config)
    }

    fn request_addition(&mut self, _seat: PlayerId, card: Card, total: i32) -> i32 {
        cpu::choose_automatic_addition(card, total, &self.config)
    }
}

/// Replays queued answers in order.
///
/// Once the action queue runs out it answers `DrawAndPlay`; once the
/// addition queue runs out it answers with the card's first addition.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<PlayerAction>,
    additions: VecDeque<i32>,
    prompts: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn with_additions(mut self, additions: impl IntoIterator<Item = i32>) -> Self {
        self.additions.extend(additions);
        self
    }

    /// How many times either prompt was called.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl HumanInput for ScriptedInput {
    fn request_action(&mut self, _seat: PlayerId, _player: &Player, _total: i32) -> PlayerAction {
        self.prompts += 1;
        self.actions.pop_front().unwrap_or(PlayerAction::DrawAndPlay)
    }

    fn request_addition(&mut self, _seat: PlayerId, card: Card, total: i32) -> i32 {
        self.prompts += 1;
        self.additions
            .pop_front()
            .unwrap_or_else(|| card.possible_additions(total)[0])
    }
}
