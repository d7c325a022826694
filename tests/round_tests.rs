//! Turn engine scenarios played through `Round` with stacked decks.

use hundred_one::core::{Direction, RoundPhase};
use hundred_one::rules::Resolution;
use hundred_one::{
    Card, Deck, EngineError, EventLog, GameEvent, GameRng, NullSink, Player, PlayerAction,
    PlayerId, PlayerMap, PlayerSeed, Rank, Round, RoundOutcome, RulesConfig, ScriptedInput, Suit,
};

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Diamonds)
}

fn cpus(n: usize) -> PlayerMap<Player> {
    PlayerMap::new(n, |p| Player::new(PlayerSeed::cpu(format!("cpu{}", p.0))))
}

/// A round whose draw pile is `n` low filler cards, starting at seat 0.
fn round(players: usize, filler: usize) -> Round {
    let cards = vec![card(Rank::Three); filler];
    Round::new(
        RulesConfig::default(),
        Deck::from_cards(cards, GameRng::new(7)),
        players,
        PlayerId::new(0),
    )
}

fn play(
    round: &mut Round,
    players: &mut PlayerMap<Player>,
    index: usize,
    addition: i32,
    sink: &mut EventLog,
) -> hundred_one::TurnSummary {
    round
        .apply_action(players, PlayerAction::play(index, addition), &mut ScriptedInput::new(), sink)
        .unwrap()
}

/// K, K, K, 10(+10) reach 100; the joker then wins against the previous seat.
#[test]
fn test_joker_on_100_wins_against_previous_player() {
    let mut players = cpus(3);
    players[PlayerId::new(0)].hand = vec![card(Rank::King), card(Rank::Ten)];
    players[PlayerId::new(1)].hand = vec![card(Rank::King), Card::joker()];
    players[PlayerId::new(2)].hand = vec![card(Rank::King), card(Rank::Two)];
    let mut round = round(3, 10);
    let mut log = EventLog::new();

    play(&mut round, &mut players, 0, 30, &mut log);
    play(&mut round, &mut players, 0, 30, &mut log);
    play(&mut round, &mut players, 0, 30, &mut log);
    assert_eq!(round.state().total, 90);

    // seat 0 holds [10, 3] after the replacement draw
    play(&mut round, &mut players, 0, 10, &mut log);
    assert_eq!(round.state().total, 100);

    // seat 1 holds [joker, 3]
    let summary = play(&mut round, &mut players, 0, 50, &mut log);

    let expected = RoundOutcome::JokerWin {
        winner: PlayerId::new(1),
        loser: PlayerId::new(0),
    };
    assert_eq!(summary.resolution, Some(Resolution::JokerWin));
    assert_eq!(summary.outcome, Some(expected));
    assert_eq!(round.outcome(), Some(expected));
    assert_eq!(round.state().phase, RoundPhase::RoundEnded);

    assert_eq!(players[PlayerId::new(1)].score, 1);
    assert_eq!(players[PlayerId::new(0)].score, -1);
    assert_eq!(players[PlayerId::new(2)].score, 0);
    assert!(log.events().iter().any(|e| matches!(
        e,
        GameEvent::JokerWin { winner, loser } if *winner == PlayerId::new(1) && *loser == PlayerId::new(0)
    )));
}

/// A joker off the pivot is just +50.
#[test]
fn test_joker_off_pivot_adds_fifty() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![Card::joker()];
    let mut round = round(2, 4);
    round.state_mut().total = 20;

    let summary = play(&mut round, &mut players, 0, 50, &mut EventLog::new());

    assert_eq!(summary.resolution, Some(Resolution::Normal));
    assert_eq!(round.state().total, 70);
    assert_eq!(round.state().current, PlayerId::new(1));
}

/// 95 + 7 busts the player who played it.
#[test]
fn test_bust_over_threshold() {
    let mut players = cpus(3);
    players[PlayerId::new(0)].hand = vec![card(Rank::Seven)];
    let mut round = round(3, 4);
    round.state_mut().total = 95;
    let mut log = EventLog::new();

    let summary = play(&mut round, &mut players, 0, 7, &mut log);

    assert_eq!(summary.outcome, Some(RoundOutcome::Bust { loser: PlayerId::new(0) }));
    assert!(round.is_over());
    assert_eq!(round.state().total, 95);
    assert_eq!(players[PlayerId::new(0)].score, -1);
    assert_eq!(players[PlayerId::new(1)].score, 0);
    assert!(log.events().contains(&GameEvent::Bust {
        loser: PlayerId::new(0),
        total: 102,
    }));
}

/// Exactly 101 is a flow: total resets and play continues.
#[test]
fn test_flow_resets_total_and_continues() {
    let mut players = cpus(3);
    players[PlayerId::new(0)].hand = vec![card(Rank::Ten)];
    let mut round = round(3, 4);
    round.state_mut().total = 91;

    let summary = play(&mut round, &mut players, 0, 10, &mut EventLog::new());

    assert_eq!(summary.resolution, Some(Resolution::Flow));
    assert_eq!(summary.outcome, None);
    assert_eq!(round.state().total, 0);
    assert_eq!(round.state().flow_count, 1);
    assert_eq!(round.state().current, PlayerId::new(1));
    assert!(!round.is_over());
}

/// Each flow raises the stakes by one.
#[test]
fn test_flow_escalates_penalty() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![card(Rank::Ten), card(Rank::Ace)];
    players[PlayerId::new(1)].hand = vec![card(Rank::King), card(Rank::Queen)];
    let mut round = round(2, 6);
    let mut sink = EventLog::new();

    round.state_mut().total = 91;
    play(&mut round, &mut players, 0, 10, &mut sink);
    round.state_mut().total = 71;
    play(&mut round, &mut players, 0, 30, &mut sink);
    assert_eq!(round.state().flow_count, 2);

    // seat 0: [A, 3] at 0 after the second flow
    round.state_mut().total = 100;
    play(&mut round, &mut players, 0, 11, &mut sink);

    assert_eq!(round.outcome(), Some(RoundOutcome::Bust { loser: PlayerId::new(0) }));
    assert_eq!(players[PlayerId::new(0)].score, -3);
    assert_eq!(players[PlayerId::new(1)].score, 0);
}

/// A 9 reverses direction; an 8 passes without changing the total.
#[test]
fn test_nine_reverses_and_eight_skips() {
    let mut players = cpus(4);
    players[PlayerId::new(0)].hand = vec![card(Rank::Nine)];
    players[PlayerId::new(3)].hand = vec![card(Rank::Eight)];
    players[PlayerId::new(2)].hand = vec![card(Rank::Two)];
    let mut round = round(4, 6);
    round.state_mut().total = 40;
    let mut log = EventLog::new();

    play(&mut round, &mut players, 0, 0, &mut log);
    assert_eq!(round.state().direction, Direction::Backward);
    assert_eq!(round.state().current, PlayerId::new(3));
    assert_eq!(round.state().total, 40);

    play(&mut round, &mut players, 0, 0, &mut log);
    assert_eq!(round.state().direction, Direction::Backward);
    assert_eq!(round.state().current, PlayerId::new(2));
    assert_eq!(round.state().total, 40);

    play(&mut round, &mut players, 0, 2, &mut log);
    assert_eq!(round.state().current, PlayerId::new(1));
    assert_eq!(round.state().total, 42);
    assert_eq!(round.state().previous, Some(PlayerId::new(2)));

    let reversals = log
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::DirectionReversed { .. }))
        .count();
    assert_eq!(reversals, 1);
}

/// Two 9s in a row restore the original direction.
#[test]
fn test_double_reverse_restores_direction() {
    let mut players = cpus(3);
    players[PlayerId::new(0)].hand = vec![card(Rank::Nine)];
    players[PlayerId::new(2)].hand = vec![card(Rank::Nine)];
    let mut round = round(3, 4);

    play(&mut round, &mut players, 0, 0, &mut EventLog::new());
    assert_eq!(round.state().current, PlayerId::new(2));
    play(&mut round, &mut players, 0, 0, &mut EventLog::new());

    assert_eq!(round.state().direction, Direction::Forward);
    assert_eq!(round.state().current, PlayerId::new(0));
}

/// A card played from hand is replaced from the deck; a drawn card is not.
#[test]
fn test_replacement_only_for_hand_plays() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![card(Rank::Four), card(Rank::Five)];
    players[PlayerId::new(1)].hand = vec![card(Rank::Six), card(Rank::Seven)];
    let mut round = Round::new(
        RulesConfig::default(),
        Deck::from_cards(vec![card(Rank::Two), card(Rank::Queen)], GameRng::new(0)),
        2,
        PlayerId::new(0),
    );
    let mut sink = NullSink;

    round
        .apply_action(&mut players, PlayerAction::DrawAndPlay, &mut ScriptedInput::new(), &mut sink)
        .unwrap();
    assert_eq!(round.state().total, 20);
    assert_eq!(players[PlayerId::new(0)].hand.len(), 2);

    round
        .apply_action(&mut players, PlayerAction::play(1, 7), &mut ScriptedInput::new(), &mut sink)
        .unwrap();
    assert_eq!(round.state().total, 27);
    assert_eq!(players[PlayerId::new(1)].hand, vec![card(Rank::Six), card(Rank::Two)]);
    assert!(round.deck().is_empty());
}

/// A human seat picks the addition for an ambiguous drawn card.
#[test]
fn test_human_chooses_drawn_addition() {
    let mut players = PlayerMap::from_vec(vec![
        Player::new(PlayerSeed::human("Ana")),
        Player::new(PlayerSeed::cpu("Bot")),
    ]);
    let mut round = Round::new(
        RulesConfig::default(),
        Deck::from_cards(vec![card(Rank::Ace)], GameRng::new(0)),
        2,
        PlayerId::new(0),
    );
    let mut input = ScriptedInput::new()
        .with_actions([PlayerAction::DrawAndPlay])
        .with_additions([11]);

    let summary = round.play_turn(&mut players, &mut input, &mut NullSink).unwrap();

    assert_eq!(summary.addition, 11);
    assert_eq!(round.state().total, 11);
    assert_eq!(input.prompts(), 2);
}

/// Empty deck and discard: the first hand card is played automatically.
#[test]
fn test_empty_deck_falls_back_to_first_hand_card() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![card(Rank::Five), card(Rank::Six)];
    let mut round = round(2, 0);
    let mut log = EventLog::new();

    let summary = round
        .apply_action(&mut players, PlayerAction::DrawAndPlay, &mut ScriptedInput::new(), &mut log)
        .unwrap();

    assert_eq!(summary.card, Some(card(Rank::Five)));
    assert_eq!(round.state().total, 5);
    assert_eq!(players[PlayerId::new(0)].hand, vec![card(Rank::Six)]);
    assert_eq!(round.discard(), &[card(Rank::Five)]);
    assert!(log.events().contains(&GameEvent::CardPlayed {
        player: PlayerId::new(0),
        card: card(Rank::Five),
        addition: 5,
        from_hand: true,
    }));
}

/// Nothing to draw and nothing in hand: the turn passes.
#[test]
fn test_turn_skipped_when_nothing_to_play() {
    let mut players = cpus(3);
    let mut round = round(3, 0);
    round.state_mut().total = 33;
    let mut log = EventLog::new();

    let summary = round
        .apply_action(&mut players, PlayerAction::DrawAndPlay, &mut ScriptedInput::new(), &mut log)
        .unwrap();

    assert_eq!(summary.card, None);
    assert_eq!(summary.resolution, None);
    assert_eq!(round.state().total, 33);
    assert_eq!(round.state().current, PlayerId::new(1));
    assert_eq!(round.state().previous, Some(PlayerId::new(0)));
    assert_eq!(round.state().turn, 1);
    assert!(log.events().contains(&GameEvent::TurnSkipped { player: PlayerId::new(0) }));
    assert!(round.history()[0].card.is_none());
}

/// A skip rank only accepts 0.
#[test]
fn test_skip_rank_rejects_nonzero_addition() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![card(Rank::Eight)];
    let mut round = round(2, 2);

    let err = round
        .apply_action(&mut players, PlayerAction::play(0, 8), &mut ScriptedInput::new(), &mut NullSink)
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::IllegalAddition {
            card: card(Rank::Eight),
            addition: 8
        }
    );
    assert_eq!(players[PlayerId::new(0)].hand.len(), 1);
}

/// CPU seats drive a stacked round to a bust through `play_turn`.
#[test]
fn test_cpu_round_plays_to_completion() {
    let mut players = cpus(2);
    players[PlayerId::new(0)].hand = vec![card(Rank::King), card(Rank::Queen)];
    players[PlayerId::new(1)].hand = vec![card(Rank::King), card(Rank::Queen)];
    let mut round = Round::new(
        RulesConfig::default(),
        Deck::from_cards(vec![card(Rank::King); 12], GameRng::new(0)),
        2,
        PlayerId::new(0),
    );
    let mut input = ScriptedInput::new();

    let mut turns = 0;
    while !round.is_over() {
        round.play_turn(&mut players, &mut input, &mut NullSink).unwrap();
        turns += 1;
        assert!(turns < 50);
    }

    let loser = round.outcome().map(|o| o.loser()).unwrap();
    assert_eq!(players[loser].score, -1);
    assert_eq!(input.prompts(), 0);
}
