//! Win detection by depth-first search over hexagonal neighbors.
//!
//! Which pair of edges a player must connect depends on the player and on
//! the game's [`PathGoal`] (which always names Blue's orientation):
//!
//! | Player | PathGoal    | Start edge | Target edge |
//! |--------|-------------|------------|-------------|
//! | Blue   | LeftToRight | col 0      | col N-1     |
//! | Blue   | TopToBottom | row 0      | row N-1     |
//! | Red    | LeftToRight | row 0      | row N-1     |
//! | Red    | TopToBottom | col 0      | col N-1     |

use crate::board::{Board, PathGoal, Player};

/// One of the four board edges a path can start or end on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Whether a cell lies on this edge of a `size`x`size` board.
    #[inline]
    pub fn contains(self, size: usize, row: usize, col: usize) -> bool {
        match self {
            Edge::Top => row == 0,
            Edge::Bottom => row + 1 == size,
            Edge::Left => col == 0,
            Edge::Right => col + 1 == size,
        }
    }

    /// Cells of this edge, in increasing order.
    fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Edge::Top => (0, i),
            Edge::Bottom => (size - 1, i),
            Edge::Left => (i, 0),
            Edge::Right => (i, size - 1),
        })
    }
}

/// The (start, target) edges `player` must connect.
pub fn edges(player: Player, goal: PathGoal) -> (Edge, Edge) {
    match (player, goal) {
        (Player::Blue, PathGoal::LeftToRight) | (Player::Red, PathGoal::TopToBottom) => {
            (Edge::Left, Edge::Right)
        }
        (Player::Blue, PathGoal::TopToBottom) | (Player::Red, PathGoal::LeftToRight) => {
            (Edge::Top, Edge::Bottom)
        }
    }
}

/// Check whether `player` has a chain of stones joining its two edges.
///
/// A single visited map is shared by every search started from the start
/// edge: cells reached by an earlier, failed search cannot lead to the
/// target edge either, and the first success returns immediately.
pub fn has_winner(board: &Board, player: Player, goal: PathGoal) -> bool {
    let size = board.size();
    if size == 0 {
        return false;
    }
    let (start, target) = edges(player, goal);
    let mut visited = vec![false; size * size];
    let mut stack = Vec::with_capacity(size * size);

    for (row, col) in start.cells(size) {
        if board.get(row, col) != Some(player) || visited[row * size + col] {
            continue;
        }
        visited[row * size + col] = true;
        stack.push((row, col));

        while let Some((r, c)) = stack.pop() {
            if target.contains(size, r, c) {
                return true;
            }
            for (nr, nc) in board.neighbors(r, c) {
                let ni = nr * size + nc;
                if !visited[ni] && board.get(nr, nc) == Some(player) {
                    visited[ni] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }
    false
}

/// The player whose path is complete, if any.
///
/// At most one player can be connected at a time, so Blue is checked first
/// only as a matter of order.
pub fn winner(board: &Board, goal: PathGoal) -> Option<Player> {
    [Player::Blue, Player::Red]
        .into_iter()
        .find(|&p| has_winner(board, p, goal))
}
