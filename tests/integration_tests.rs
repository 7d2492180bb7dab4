//! Integration tests for hex-rust
//!
//! Whole games and decisions driven through the public API, the way the
//! binary uses it.

use fastrand::Rng;
use hex_rust::ai::{AiPlayer, Strategy};
use hex_rust::board::{Board, Move, PathGoal, Player};
use hex_rust::connectivity::{has_winner, winner};
use hex_rust::error::{MoveError, SearchError};
use hex_rust::flat::flat_search;
use hex_rust::game::Game;
use hex_rust::mcts::{MctsConfig, SearchTree, tree_search};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place stones directly, bypassing turn order.
fn setpos(size: usize, blue: &[(usize, usize)], red: &[(usize, usize)]) -> Board {
    let mut board = Board::new(size);
    for &(r, c) in blue {
        board.apply(Move::new(r, c), Player::Blue);
    }
    for &(r, c) in red {
        board.apply(Move::new(r, c), Player::Red);
    }
    board
}

fn play_out(game: &mut Game, blue: &mut AiPlayer, red: &mut AiPlayer) -> Player {
    while !game.is_over() {
        let ai = match game.to_move() {
            Player::Blue => &mut *blue,
            Player::Red => &mut *red,
        };
        let mv = ai.choose_move(game.board(), game.goal()).unwrap();
        game.play(mv).unwrap();
    }
    game.winner().unwrap()
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_two_by_two_scenario() {
    let mut game = Game::new(2, PathGoal::LeftToRight);
    game.play(Move::new(0, 0)).unwrap();
    game.play(Move::new(1, 1)).unwrap();
    assert!(!has_winner(game.board(), Player::Blue, PathGoal::LeftToRight));
    assert_eq!(game.play(Move::new(0, 1)), Ok(Some(Player::Blue)));
    assert!(has_winner(game.board(), Player::Blue, PathGoal::LeftToRight));
}

#[test]
fn test_winding_path() {
    // Blue snakes from the left edge to the right edge through the middle
    let board = setpos(
        5,
        &[(4, 0), (3, 1), (2, 1), (2, 2), (1, 3), (1, 4)],
        &[(0, 0), (2, 0), (3, 2), (4, 4)],
    );
    assert!(has_winner(&board, Player::Blue, PathGoal::LeftToRight));
    assert_eq!(winner(&board, PathGoal::LeftToRight), Some(Player::Blue));
    // The same stones do not connect top to bottom
    assert!(!has_winner(&board, Player::Blue, PathGoal::TopToBottom));
}

#[test]
fn test_goal_swaps_red_edges() {
    // Red owns the whole left column
    let board = setpos(4, &[], &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert!(has_winner(&board, Player::Red, PathGoal::LeftToRight));
    assert!(!has_winner(&board, Player::Red, PathGoal::TopToBottom));
}

// =============================================================================
// Game flow
// =============================================================================

#[test]
fn test_invalid_moves_are_reported() {
    let mut game = Game::new(3, PathGoal::TopToBottom);
    assert_eq!(
        game.play(Move::new(3, 3)),
        Err(MoveError::OutOfBounds { row: 3, col: 3, size: 3 })
    );
    game.play(Move::new(1, 1)).unwrap();
    assert_eq!(game.play(Move::new(1, 1)), Err(MoveError::Occupied { row: 1, col: 1 }));
    assert_eq!(game.to_move(), Player::Red);
}

#[test]
fn test_selfplay_always_has_a_winner() {
    for (seed, strategy) in [(1, Strategy::Flat), (2, Strategy::Mcts), (3, Strategy::Mcts)] {
        for goal in [PathGoal::LeftToRight, PathGoal::TopToBottom] {
            let mut game = Game::new(4, goal);
            let mut blue = AiPlayer::with_seed(Player::Blue, strategy, seed).simulations(10);
            let mut red = AiPlayer::with_seed(Player::Red, strategy, seed + 100).simulations(10);
            let w = play_out(&mut game, &mut blue, &mut red);
            assert!(has_winner(game.board(), w, goal));
            assert!(!has_winner(game.board(), w.opponent(), goal));
            assert_eq!(game.history().len(), game.board().stone_count());
        }
    }
}

#[test]
fn test_ai_on_full_board() {
    let mut game = Game::new(1, PathGoal::LeftToRight);
    game.play(Move::new(0, 0)).unwrap();
    let mut ai = AiPlayer::with_seed(Player::Red, Strategy::Mcts, 5);
    assert_eq!(
        ai.choose_move(game.board(), game.goal()),
        Err(SearchError::NoLegalMoves)
    );
}

// =============================================================================
// Move selection
// =============================================================================

#[test]
fn test_flat_single_move() {
    let board = setpos(2, &[(0, 0), (1, 1)], &[(0, 1)]);
    let mut rng = Rng::with_seed(8);
    for sims in [0, 3, 30] {
        assert_eq!(
            flat_search(&board, Player::Red, PathGoal::TopToBottom, sims, &mut rng),
            Some(Move::new(1, 0))
        );
    }
}

#[test]
fn test_mcts_single_move() {
    let board = setpos(2, &[(0, 0), (1, 1)], &[(0, 1)]);
    let mut rng = Rng::with_seed(8);
    for sims in [0, 3, 30] {
        let cfg = MctsConfig { simulations: sims, ..MctsConfig::default() };
        assert_eq!(
            tree_search(&board, Player::Red, PathGoal::TopToBottom, &cfg, &mut rng),
            Some(Move::new(1, 0))
        );
    }
}

#[test]
fn test_mcts_zero_budget() {
    let board = Board::new(5);
    let mut tree = SearchTree::new(&board, Player::Blue, PathGoal::LeftToRight);
    assert_eq!(tree.best_move(), Some(Move::new(0, 0)));
    assert_eq!(tree.get(tree.root()).children.len(), 25);
}

#[test]
fn test_both_selectors_block_or_win() {
    // Blue to move can win at once with (0,0)
    let board = setpos(3, &[(0, 1), (0, 2)], &[(1, 0), (1, 1)]);
    let mut rng = Rng::with_seed(77);
    assert_eq!(
        flat_search(&board, Player::Blue, PathGoal::LeftToRight, 50, &mut rng),
        Some(Move::new(0, 0))
    );
    let cfg = MctsConfig { simulations: 500, ..MctsConfig::default() };
    assert_eq!(
        tree_search(&board, Player::Blue, PathGoal::LeftToRight, &cfg, &mut rng),
        Some(Move::new(0, 0))
    );
}
