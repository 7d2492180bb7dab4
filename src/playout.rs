//! Random playouts (rollouts) to the end of the game.
//!
//! A playout places uniformly random stones for alternating players until
//! one of them completes a path. Hex has no draws, so a playout always ends
//! with a winner after at most N*N moves.

use fastrand::Rng;

use crate::board::{Board, PathGoal, Player};
use crate::connectivity::{has_winner, winner};

/// Outcome of a single playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    pub winner: Player,
    /// Stones placed by the playout itself.
    pub moves: usize,
}

/// Play random moves on `board` starting with `to_move` until someone wins.
///
/// If the board already has a winner, no move is played. The board is left
/// in its final state.
pub fn rollout(board: &mut Board, to_move: Player, goal: PathGoal, rng: &mut Rng) -> Playout {
    if let Some(w) = winner(board, goal) {
        return Playout { winner: w, moves: 0 };
    }

    let mut empty = board.legal_moves();
    let mut mover = to_move;
    let mut moves = 0;

    while !empty.is_empty() {
        let mv = empty.swap_remove(rng.usize(..empty.len()));
        board.apply(mv, mover);
        moves += 1;
        if has_winner(board, mover, goal) {
            return Playout { winner: mover, moves };
        }
        mover = mover.opponent();
    }

    unreachable!("board filled without a connected player:\n{board}");
}
