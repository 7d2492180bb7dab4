//! Hex-Rust: play Hex against a Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `hex-rust` - Play as Blue against the AI on an 11x11 board
//! - `hex-rust play --human red` - Play as Red
//! - `hex-rust manual` - Two humans at one terminal
//! - `hex-rust selfplay` - Watch two AI players

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hex_rust::ai::{AiPlayer, Strategy};
use hex_rust::board::{Move, PathGoal, Player};
use hex_rust::constants::{DEFAULT_SIZE, N_SIMS, UCB_C};
use hex_rust::game::Game;

/// Hex-Rust: Hex with Monte Carlo and MCTS opponents
#[derive(Parser)]
#[command(name = "hex-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Edges Blue must connect; Red connects the other pair
    #[arg(long, global = true, value_enum, default_value_t = PathGoal::LeftToRight)]
    goal: PathGoal,

    /// Simulations per decision (mcts) or per candidate move (flat)
    #[arg(long, global = true, default_value_t = N_SIMS)]
    sims: usize,

    /// Move selection algorithm for the AI
    #[arg(long, global = true, value_enum, default_value_t = Strategy::Mcts)]
    engine: Strategy,

    /// UCB1 exploration constant
    #[arg(long, global = true, default_value_t = UCB_C)]
    exploration: f64,

    /// Fixed random seed (default: a fresh seed every run)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI, entering moves as "row col"
    Play {
        /// Color you play; Blue moves first
        #[arg(long, value_enum, default_value_t = Player::Blue)]
        human: Player,
    },
    /// Two humans take turns at the same terminal
    Manual,
    /// Let two AI players play each other
    Selfplay,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    ensure!(cli.size > 0, "board size must be at least 1");

    match cli.command {
        Some(Commands::Manual) => run_manual(&cli),
        Some(Commands::Selfplay) => run_selfplay(&cli),
        Some(Commands::Play { human }) => run_play(&cli, human),
        None => run_play(&cli, Player::Blue),
    }
}

fn make_ai(cli: &Cli, player: Player, seed_offset: u64) -> AiPlayer {
    let ai = match cli.seed {
        Some(seed) => AiPlayer::with_seed(player, cli.engine, seed.wrapping_add(seed_offset)),
        None => AiPlayer::new(player, cli.engine),
    };
    ai.simulations(cli.sims).exploration(cli.exploration)
}

fn announce(game: &Game) {
    if let Some(w) = game.winner() {
        println!("{}", game.board());
        println!("Player {w} wins after {} moves!", game.history().len());
    }
}

/// Read one line and try to play it for the player to move.
///
/// Bad input is reported and leaves the same player to move. Returns
/// `false` on "quit" or end of input.
fn human_turn<I>(game: &mut Game, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("Player {}, enter your move: ", game.to_move());
    io::stdout().flush().context("flushing stdout")?;
    let Some(line) = lines.next() else {
        return Ok(false);
    };
    let line = line.context("reading move from stdin")?;
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return Ok(false);
    }
    match line.parse::<Move>() {
        Ok(mv) => {
            if let Err(e) = game.play(mv) {
                eprintln!("{e}");
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    Ok(true)
}

fn run_manual(cli: &Cli) -> Result<()> {
    let mut game = Game::new(cli.size, cli.goal);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter moves as \"row col\", or \"quit\".");
    while !game.is_over() {
        println!("{}", game.board());
        if !human_turn(&mut game, &mut lines)? {
            return Ok(());
        }
    }
    announce(&game);
    Ok(())
}

fn run_play(cli: &Cli, human: Player) -> Result<()> {
    let mut game = Game::new(cli.size, cli.goal);
    let mut ai = make_ai(cli, human.opponent(), 0);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are {human}. Enter moves as \"row col\", or \"quit\".");
    while !game.is_over() {
        println!("{}", game.board());
        let mover = game.to_move();

        if mover == human {
            if !human_turn(&mut game, &mut lines)? {
                return Ok(());
            }
        } else {
            let mv = ai.choose_move(game.board(), game.goal())?;
            game.play(mv)?;
            println!("AI Player {mover} plays {mv}");
        }
    }
    announce(&game);
    Ok(())
}

fn run_selfplay(cli: &Cli) -> Result<()> {
    let mut game = Game::new(cli.size, cli.goal);
    let mut blue = make_ai(cli, Player::Blue, 0);
    let mut red = make_ai(cli, Player::Red, 1);

    while !game.is_over() {
        let mover = game.to_move();
        let ai = match mover {
            Player::Blue => &mut blue,
            Player::Red => &mut red,
        };
        let mv = ai.choose_move(game.board(), game.goal())?;
        game.play(mv)?;
        println!("{mover} plays {mv}");
    }
    announce(&game);
    Ok(())
}
