use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::constants::HEX_DELTA;
use crate::error::{MoveError, ParseMoveError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => write!(f, "BLUE"),
            Player::Red => write!(f, "RED"),
        }
    }
}

/// Edge-to-edge orientation that Blue must connect. Red connects the other
/// pair of edges. Fixed for the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PathGoal {
    LeftToRight,
    TopToBottom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row col"` or `"row,col"`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(ParseMoveError::Arity(s.trim().to_string()));
        }
        let coord = |p: &str| {
            p.parse::<usize>()
                .map_err(|_| ParseMoveError::Coordinate(p.to_string()))
        };
        Ok(Move::new(coord(parts[0])?, coord(parts[1])?))
    }
}

/// Cell occupancy for an NxN Hex board. Cells never revert to empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    stones: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Owner of a cell, `None` for empty or out-of-bounds cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// A move is legal iff it is on the board and the target cell is empty.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.in_bounds(mv) && self.cells[self.idx(mv.row, mv.col)].is_none()
    }

    /// Validate and place a stone.
    pub fn play(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if !self.in_bounds(mv) {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if self.get(mv.row, mv.col).is_some() {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.apply(mv, player);
        Ok(())
    }

    /// Place a stone without validation. The caller must have checked
    /// [`Board::is_legal`] first.
    #[inline]
    pub fn apply(&mut self, mv: Move, player: Player) {
        debug_assert!(self.is_legal(mv), "apply() on illegal move {mv}");
        let i = self.idx(mv.row, mv.col);
        self.cells[i] = Some(player);
        self.stones += 1;
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.cells.len() - self.stones);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[self.idx(row, col)].is_none() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Number of occupied cells.
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// In-bounds hexagonal neighbors of a cell.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        HEX_DELTA.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.size && c < self.size).then_some((r, c))
        })
    }
}

/// Staggered text dump: each row is shifted right by one column more
/// than the row above it.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:<2}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:width$}{row:>2} ", "", width = row)?;
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(Player::Blue) => 'B',
                    Some(Player::Red) => 'R',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
