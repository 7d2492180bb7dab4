//! Computer player.
//!
//! An [`AiPlayer`] owns its random number generator for the whole game and
//! hands a private copy of the board to the chosen search.

use clap::ValueEnum;
use fastrand::Rng;
use tracing::info;

use crate::board::{Board, Move, PathGoal, Player};
use crate::error::SearchError;
use crate::flat::flat_search;
use crate::mcts::{MctsConfig, tree_search};

/// Move selection algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Flat Monte Carlo: `simulations` playouts per candidate move
    Flat,
    /// UCB1 tree search: `simulations` iterations per decision
    Mcts,
}

pub struct AiPlayer {
    player: Player,
    strategy: Strategy,
    config: MctsConfig,
    rng: Rng,
}

impl AiPlayer {
    /// Create an AI with a non-repeating seed and the default budget.
    pub fn new(player: Player, strategy: Strategy) -> Self {
        Self::with_rng(player, strategy, Rng::new())
    }

    /// Create an AI with a fixed seed, for reproducible games.
    pub fn with_seed(player: Player, strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(player, strategy, Rng::with_seed(seed))
    }

    fn with_rng(player: Player, strategy: Strategy, rng: Rng) -> Self {
        Self {
            player,
            strategy,
            config: MctsConfig::default(),
            rng,
        }
    }

    /// Set the simulation budget.
    pub fn simulations(mut self, simulations: usize) -> Self {
        self.config.simulations = simulations;
        self
    }

    /// Set the UCB1 exploration constant (tree search only).
    pub fn exploration(mut self, c: f64) -> Self {
        self.config.exploration = c;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Choose a move for this player on `board`. The board is not modified.
    pub fn choose_move(&mut self, board: &Board, goal: PathGoal) -> Result<Move, SearchError> {
        if board.is_full() {
            return Err(SearchError::NoLegalMoves);
        }
        let snapshot = board.clone();
        let mv = match self.strategy {
            Strategy::Flat => flat_search(
                &snapshot,
                self.player,
                goal,
                self.config.simulations,
                &mut self.rng,
            ),
            Strategy::Mcts => tree_search(&snapshot, self.player, goal, &self.config, &mut self.rng),
        }
        .ok_or(SearchError::NoLegalMoves)?;

        info!(player = %self.player, strategy = ?self.strategy, mv = %mv, "AI move");
        Ok(mv)
    }
}
