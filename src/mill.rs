//! Mill detection.
//!
//! A mill is three same-color pieces on one of the board's fixed straight
//! lines. Each of the 18 cells sits on one to three such lines; the table
//! below enumerates them per cell, derived from the physical board geometry
//! (the same source as the adjacency table in [`crate::constants`]).
//!
//! Detection is a pure membership test against current occupancy and is
//! color-symmetric by construction, which lets the opening generator reuse
//! it on a color-inverted board.

use crate::board::{Board, Side};
use crate::constants::CELLS;

/// Per-cell list of the straight lines through that cell.
///
/// Each line is the full triple of cell indices, including the cell itself.
pub const MILL_LINES: [&[[usize; 3]]; CELLS] = [
    &[[0, 2, 4]],                              // 0  a0
    &[[1, 3, 5], [1, 8, 17]],                  // 1  g0
    &[[0, 2, 4]],                              // 2  b1
    &[[1, 3, 5], [3, 7, 14]],                  // 3  f1
    &[[0, 2, 4]],                              // 4  c2
    &[[0, 3, 5], [5, 6, 11]],                  // 5  e2
    &[[5, 6, 11], [6, 7, 8]],                  // 6  e3
    &[[3, 7, 14], [6, 7, 8]],                  // 7  f3
    &[[1, 8, 17], [6, 7, 8]],                  // 8  g3
    &[[9, 12, 15], [9, 10, 11]],               // 9  c4
    &[[9, 10, 11], [10, 13, 16]],              // 10 d4
    &[[9, 10, 11], [5, 6, 11], [11, 14, 17]],  // 11 e4
    &[[9, 12, 15], [12, 13, 14]],              // 12 b5
    &[[10, 13, 16], [12, 13, 14]],             // 13 d5
    &[[12, 13, 14], [11, 14, 17], [3, 7, 14]], // 14 f5
    &[[9, 12, 15], [15, 16, 17]],              // 15 a6
    &[[10, 13, 16], [15, 16, 17]],             // 16 d6
    &[[1, 8, 17], [11, 14, 17], [15, 16, 17]], // 17 g6
];

/// True if the piece on `cell` completes at least one mill.
///
/// Returns false for an empty cell. For an occupied cell, checks whether
/// any line through it is monochromatic in the occupant's color.
pub fn closes_mill(cell: usize, board: &Board) -> bool {
    let piece = board.cell(cell);
    if board.is_empty(cell) {
        return false;
    }
    MILL_LINES[cell]
        .iter()
        .any(|line| line.iter().all(|&i| board.cell(i) == piece))
}

/// Number of occupied cells of `side` that sit in a completed mill.
///
/// A formed mill contributes 3 (once per member cell); the improved
/// mid/endgame estimator relies on this per-cell count and does not
/// deduplicate.
pub fn mill_cell_count(board: &Board, side: Side) -> usize {
    (0..CELLS)
        .filter(|&i| board.is_side(i, side) && closes_mill(i, board))
        .count()
}
