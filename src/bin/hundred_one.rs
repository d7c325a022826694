//! Terminal front-end: play 101 against CPU seats, or watch CPUs play.

use clap::Parser;
use dialoguer::{Input, Select};
use log::{error, warn};

use hundred_one::{
    Card, EngineError, EventSink, GameEvent, HumanInput, MatchBuilder, Player, PlayerAction,
    PlayerId, PlayerSeed, RosterSource, RulesConfig,
};

#[derive(Parser)]
#[command(name = "hundred_one")]
#[command(about = "Play the card game 101 in the terminal")]
struct Args {
    /// Number of human seats
    #[arg(long, default_value = "1")]
    humans: usize,

    /// Number of CPU seats
    #[arg(long, default_value = "2")]
    cpus: usize,

    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Score at or below which the match ends
    #[arg(long, default_value = "-5", allow_hyphen_values = true)]
    floor: i64,

    /// Cards dealt to each player
    #[arg(long, default_value = "2")]
    hand_size: usize,

    /// Print events as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Asks for human names on the terminal; CPUs are numbered.
struct ConsoleRoster {
    humans: usize,
    cpus: usize,
}

impl RosterSource for ConsoleRoster {
    fn request_player_roster(&mut self) -> Vec<PlayerSeed> {
        let mut roster = Vec::with_capacity(self.humans + self.cpus);
        for i in 1..=self.humans {
            let fallback = format!("Player {i}");
            let name = Input::<String>::new()
                .with_prompt(format!("Name for human {i}"))
                .default(fallback.clone())
                .interact_text()
                .unwrap_or(fallback);
            roster.push(PlayerSeed::human(name));
        }
        for i in 1..=self.cpus {
            roster.push(PlayerSeed::cpu(format!("CPU {i}")));
        }
        roster
    }
}

/// Prompts human seats with arrow-key menus.
struct Console;

impl HumanInput for Console {
    fn request_action(&mut self, _seat: PlayerId, player: &Player, total: i32) -> PlayerAction {
        let mut choices = Vec::new();
        let mut labels = Vec::new();
        for (index, card) in player.hand.iter().enumerate() {
            for addition in card.possible_additions(total) {
                choices.push(PlayerAction::play(index, addition));
                labels.push(format!("{card} ({addition:+})"));
            }
        }
        choices.push(PlayerAction::DrawAndPlay);
        labels.push("Draw and play the top card".to_string());

        let selection = Select::new()
            .with_prompt(format!("\n{} at {total}", player.name))
            .items(labels.as_slice())
            .default(0)
            .interact();
        match selection {
            Ok(i) => choices[i],
            Err(err) => {
                warn!("prompt failed ({err}); drawing instead");
                PlayerAction::DrawAndPlay
            }
        }
    }

    fn request_addition(&mut self, _seat: PlayerId, card: Card, total: i32) -> i32 {
        let additions = card.possible_additions(total);
        let labels: Vec<String> = additions.iter().map(|a| format!("{a:+}")).collect();
        let selection = Select::new()
            .with_prompt(format!("You drew {card} at {total}"))
            .items(labels.as_slice())
            .default(0)
            .interact()
            .unwrap_or(0);
        additions[selection]
    }
}

/// Prints every event, as text or JSON lines.
struct Narrator {
    json: bool,
    names: Vec<String>,
}

impl Narrator {
    fn name(&self, seat: PlayerId) -> &str {
        self.names.get(seat.index()).map_or("?", String::as_str)
    }
}

impl EventSink for Narrator {
    fn report(&mut self, event: &GameEvent) {
        if self.json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(err) => error!("could not encode event: {err}"),
            }
            return;
        }
        match event {
            GameEvent::TurnStarted { .. } => {}
            GameEvent::CardPlayed {
                player,
                card,
                addition,
                ..
            } => println!("{} plays {card} ({addition:+})", self.name(*player)),
            GameEvent::ScoreChanged {
                player,
                delta,
                score,
            } => println!("  {} {delta:+} => {score}", self.name(*player)),
            other => println!("{other}"),
        }
    }
}

fn main() -> Result<(), EngineError> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "warn" },
    ))
    .init();

    let config = RulesConfig::new()
        .with_floor(args.floor)
        .with_hand_size(args.hand_size);
    let mut builder = MatchBuilder::new()
        .config(config)
        .roster(&mut ConsoleRoster {
            humans: args.humans,
            cpus: args.cpus,
        });
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let mut game = builder.build()?;
    let mut narrator = Narrator {
        json: args.json,
        names: game.players().values().map(|p| p.name.clone()).collect(),
    };

    let result = game.run(&mut Console, &mut narrator)?;
    if !args.json {
        println!();
        for (seat, score) in result.scores.iter() {
            println!("{:>12}  {score:+}", narrator.name(seat));
        }
        println!(
            "{} loses after {} rounds",
            narrator.name(result.loser),
            result.rounds
        );
    }
    Ok(())
}
