//! Flat Monte Carlo move selection.
//!
//! Every legal move is evaluated independently by a fixed number of random
//! playouts, with no tree kept between samples. Cost is
//! O(moves * sims_per_move * N^2).

use fastrand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Move, PathGoal, Player};
use crate::playout::rollout;

/// Playout statistics for one candidate move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub mv: Move,
    pub wins: usize,
    pub sims: usize,
}

impl Candidate {
    /// Fraction of playouts won. Zero when no playouts were run.
    pub fn winrate(&self) -> f64 {
        if self.sims > 0 {
            self.wins as f64 / self.sims as f64
        } else {
            0.0
        }
    }
}

/// Evaluate every legal move for `player`, in row-major order.
pub fn evaluate_candidates(
    board: &Board,
    player: Player,
    goal: PathGoal,
    sims_per_move: usize,
    rng: &mut Rng,
) -> Vec<Candidate> {
    board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut after = board.clone();
            after.apply(mv, player);

            let wins = (0..sims_per_move)
                .filter(|_| {
                    let mut sim = after.clone();
                    rollout(&mut sim, player.opponent(), goal, rng).winner == player
                })
                .count();

            let candidate = Candidate {
                mv,
                wins,
                sims: sims_per_move,
            };
            trace!(mv = %mv, wins, sims = sims_per_move, "flat candidate");
            candidate
        })
        .collect()
}

/// Pick the move with the highest playout winrate for `player`.
///
/// Ties go to the earliest move in row-major order. Returns `None` only when
/// the board has no empty cell.
pub fn flat_search(
    board: &Board,
    player: Player,
    goal: PathGoal,
    sims_per_move: usize,
    rng: &mut Rng,
) -> Option<Move> {
    let candidates = evaluate_candidates(board, player, goal, sims_per_move, rng);
    let best = best_candidate(&candidates)?;
    debug!(
        mv = %best.mv,
        winrate = best.winrate(),
        candidates = candidates.len(),
        "flat search done"
    );
    Some(best.mv)
}

fn best_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for c in candidates {
        if best.is_none_or(|b| c.winrate() > b.winrate()) {
            best = Some(c);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(row: usize, col: usize, wins: usize, sims: usize) -> Candidate {
        Candidate {
            mv: Move::new(row, col),
            wins,
            sims,
        }
    }

    #[test]
    fn test_winrate_without_sims_is_zero() {
        assert_eq!(cand(0, 0, 0, 0).winrate(), 0.0);
        assert_eq!(cand(0, 0, 3, 4).winrate(), 0.75);
    }

    #[test]
    fn test_best_candidate_ties_go_to_first() {
        let cands = [cand(0, 0, 1, 2), cand(0, 1, 2, 4), cand(1, 0, 1, 4)];
        assert_eq!(best_candidate(&cands).map(|c| c.mv), Some(Move::new(0, 0)));

        let cands = [cand(0, 0, 1, 4), cand(0, 1, 3, 4), cand(1, 0, 3, 4)];
        assert_eq!(best_candidate(&cands).map(|c| c.mv), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_no_candidates() {
        assert!(best_candidate(&[]).is_none());
        let mut rng = Rng::with_seed(1);
        let mut board = Board::new(1);
        board.apply(Move::new(0, 0), Player::Blue);
        assert_eq!(flat_search(&board, Player::Red, PathGoal::LeftToRight, 10, &mut rng), None);
    }

    #[test]
    fn test_single_legal_move() {
        let mut board = Board::new(2);
        board.apply(Move::new(0, 0), Player::Blue);
        board.apply(Move::new(0, 1), Player::Red);
        board.apply(Move::new(1, 1), Player::Blue);
        for sims in [0, 1, 50] {
            let mut rng = Rng::with_seed(sims as u64);
            assert_eq!(
                flat_search(&board, Player::Red, PathGoal::LeftToRight, sims, &mut rng),
                Some(Move::new(1, 0))
            );
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // Blue needs (0,0) to finish the left-to-right chain on the top row.
        let mut board = Board::new(3);
        board.apply(Move::new(0, 1), Player::Blue);
        board.apply(Move::new(0, 2), Player::Blue);
        board.apply(Move::new(1, 0), Player::Red);
        board.apply(Move::new(1, 1), Player::Red);

        let mut rng = Rng::with_seed(42);
        let cands = evaluate_candidates(&board, Player::Blue, PathGoal::LeftToRight, 20, &mut rng);
        assert_eq!(cands.len(), 5);
        assert_eq!(cands[0].mv, Move::new(0, 0));
        assert_eq!(cands[0].wins, 20);
        assert!(cands.iter().all(|c| c.winrate() <= cands[0].winrate()));
        assert_eq!(
            flat_search(&board, Player::Blue, PathGoal::LeftToRight, 20, &mut rng),
            Some(Move::new(0, 0))
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::new(3);
        let snapshot = board.clone();
        let mut rng = Rng::with_seed(5);
        let mv = flat_search(&board, Player::Blue, PathGoal::TopToBottom, 5, &mut rng);
        assert!(mv.is_some_and(|m| board.is_legal(m)));
        assert_eq!(board, snapshot);
    }
}
