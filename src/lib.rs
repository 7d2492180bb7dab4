//! Hex-Rust: a Hex engine with Monte Carlo opponents.
//!
//! Hex is played on an NxN rhombus of hexagonal cells. Blue and Red take
//! turns placing stones; the first player to join their two opposite edges
//! with an unbroken chain wins. Draws are impossible.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, search budget and neighbor offsets
//! - [`board`] - Board state, players, moves
//! - [`connectivity`] - Edge-to-edge win detection
//! - [`playout`] - Random game simulation
//! - [`flat`] - Flat Monte Carlo move selection
//! - [`mcts`] - Monte Carlo Tree Search with UCB1
//! - [`ai`] - Computer player owning its random generator
//! - [`game`] - Turn tracking for a single game
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use hex_rust::ai::{AiPlayer, Strategy};
//! use hex_rust::board::{Move, PathGoal, Player};
//! use hex_rust::game::Game;
//!
//! let mut game = Game::new(5, PathGoal::LeftToRight);
//! game.play(Move::new(2, 2)).unwrap();
//!
//! let mut ai = AiPlayer::with_seed(Player::Red, Strategy::Mcts, 1).simulations(100);
//! let reply = ai.choose_move(game.board(), game.goal()).unwrap();
//! game.play(reply).unwrap();
//! println!("{}", game.board());
//! ```

pub mod ai;
pub mod board;
pub mod connectivity;
pub mod constants;
pub mod error;
pub mod flat;
pub mod game;
pub mod mcts;
pub mod playout;
