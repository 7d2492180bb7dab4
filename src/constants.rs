//! Constants for board geometry and search parameters.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Tournament Hex is usually played on 11x11.
pub const DEFAULT_SIZE: usize = 11;

/// Offsets (row, col) to the six neighbors of a cell on a rhombic hex grid.
///
/// Rows are shifted half a cell to the right as they go down, so the
/// up-right and down-left diagonals are adjacent while the other two are not.
pub const HEX_DELTA: [(isize, isize); 6] = [
    (-1, 0), // up
    (-1, 1), // up-right
    (0, -1), // left
    (0, 1),  // right
    (1, -1), // down-left
    (1, 0),  // down
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default number of simulations per decision (MCTS) or per candidate (flat).
pub const N_SIMS: usize = 1000;

/// UCB1 exploration constant.
pub const UCB_C: f64 = 1.0;
