//! mtg - play or simulate the two-player priority/stack game from a terminal.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mtg_engine::{
    cli::{Seat, SessionOutcome, TextGame},
    controllers::RandomController,
    core::{GameConfig, GameRng, PlayerId, DEFAULT_MAX_ACTIONS, DEFAULT_STARTING_LIFE},
    rules::GameEngine,
    simulation::simulate,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Controller type for a seat
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeatType {
    /// Text input from stdin
    Human,
    /// Uniformly random legal actions
    Random,
}

#[derive(Parser)]
#[command(name = "mtg")]
#[command(about = "Two-player priority and stack resolution game", long_about = None)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG, defaulting to warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play {
        /// Player 0 controller type
        #[arg(long, value_enum, default_value = "human")]
        p0: SeatType,

        /// Player 1 controller type
        #[arg(long, value_enum, default_value = "human")]
        p1: SeatType,

        /// Starting life for both players
        #[arg(long, default_value_t = DEFAULT_STARTING_LIFE, value_parser = clap::value_parser!(i64).range(1..))]
        life: i64,

        /// Seed for random seats
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run random-vs-random games and print a tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Starting life for both players
        #[arg(long, default_value_t = DEFAULT_STARTING_LIFE, value_parser = clap::value_parser!(i64).range(1..))]
        life: i64,

        /// Seed for the whole batch
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Give up on a game after this many actions (0 = never)
        #[arg(long, default_value_t = DEFAULT_MAX_ACTIONS)]
        max_actions: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Play {
        p0: SeatType::Human,
        p1: SeatType::Human,
        life: DEFAULT_STARTING_LIFE,
        seed: None,
    }) {
        Commands::Play { p0, p1, life, seed } => run_play(p0, p1, life, seed),
        Commands::Simulate {
            games,
            life,
            seed,
            max_actions,
        } => {
            let config = GameConfig::new(life).with_max_actions(max_actions);
            let summary = simulate(&config, games, seed);

            println!("Games:      {}", summary.games);
            println!("P0 wins:    {}", summary.wins[PlayerId::new(0)]);
            println!("P1 wins:    {}", summary.wins[PlayerId::new(1)]);
            println!("Draws:      {}", summary.draws);
            println!("Unfinished: {}", summary.unfinished);
            if summary.games > 0 {
                println!(
                    "Avg actions per game: {:.1}",
                    summary.total_actions as f64 / f64::from(summary.games)
                );
            }
            Ok(())
        }
    }
}

fn run_play(p0: SeatType, p1: SeatType, life: i64, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");
    let mut rng = GameRng::new(seed);

    let mut seat = |kind: SeatType| match kind {
        SeatType::Human => Seat::Human,
        SeatType::Random => Seat::Auto(Box::new(RandomController::new(rng.fork()))),
    };
    let seats = [seat(p0), seat(p1)];

    let stdin = io::stdin();
    let mut game = TextGame::new(GameEngine::new(life), seats, stdin.lock(), io::stdout());
    match game.run()? {
        SessionOutcome::Finished(result) => info!(?result, "game over"),
        SessionOutcome::Quit => info!("quit"),
        SessionOutcome::Aborted => info!("aborted"),
    }
    Ok(())
}
