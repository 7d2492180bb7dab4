//! Turn tracking for a single game.
//!
//! [`Game`] validates and applies moves for the player to move, checks for a
//! winner after every move and alternates turns. It does no I/O.

use crate::board::{Board, Move, PathGoal, Player};
use crate::connectivity::has_winner;
use crate::error::MoveError;

pub struct Game {
    board: Board,
    goal: PathGoal,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<(Move, Player)>,
}

impl Game {
    /// New game on an empty `size`x`size` board. Blue moves first.
    pub fn new(size: usize, goal: PathGoal) -> Self {
        Self {
            board: Board::new(size),
            goal,
            to_move: Player::Blue,
            winner: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> PathGoal {
        self.goal
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Move, Player)] {
        &self.history
    }

    /// Play `mv` for the player to move.
    ///
    /// Returns the winner if this move completed a path. Illegal moves leave
    /// the game unchanged and the same player still to move.
    pub fn play(&mut self, mv: Move) -> Result<Option<Player>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mover = self.to_move;
        self.board.play(mv, mover)?;
        self.history.push((mv, mover));

        if has_winner(&self.board, mover, self.goal) {
            self.winner = Some(mover);
        } else {
            debug_assert!(!self.board.is_full(), "full board without a winner");
            self.to_move = mover.opponent();
        }
        Ok(self.winner)
    }
}
