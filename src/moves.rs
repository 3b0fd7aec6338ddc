//! Phase-aware move generation.
//!
//! Moves are not materialized as separate values; each generated transition
//! is the resulting child board. Three families exist:
//!
//! - `Add` (opening): place a piece on any empty cell.
//! - `Slide` (mid/endgame): move a piece to an adjacent empty cell.
//! - `Hop` (flying): once a side is down to exactly 3 pieces, move any of
//!   its pieces to *any* empty cell.
//!
//! A move that closes a mill expands into one child per legal capture
//! target: every opponent piece not itself in a mill. If all opponent
//! pieces are protected by mills (or none exist), the pre-removal board is
//! emitted unchanged as a single no-op child; this is a fallback, not an
//! error.
//!
//! Iteration order is fixed (ascending source cell, ascending destination,
//! ascending capture target) so that searches picking the first maximal
//! child stay reproducible.

use crate::board::{Board, Side};
use crate::constants::{CELLS, EMPTY, FLYING_COUNT};
use crate::mill::closes_mill;

/// Which generation policy applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Placement phase: pieces are added, not moved.
    Opening,
    /// Sliding (or flying, once a side is at 3 pieces).
    MidEndgame,
}

/// Generate all child boards for `side` under the given phase.
pub fn generate(board: &Board, side: Side, phase: Phase) -> Vec<Board> {
    match phase {
        Phase::Opening => opening_moves(board, side),
        Phase::MidEndgame => midgame_moves(board, side),
    }
}

/// Placement moves for either side.
///
/// White is generated directly; Black reuses the same White-only generator
/// on a color-inverted board and inverts each child back. This works
/// because mill detection and placement are color-symmetric.
pub fn opening_moves(board: &Board, side: Side) -> Vec<Board> {
    match side {
        Side::White => generate_add(board),
        Side::Black => generate_add(&board.invert())
            .into_iter()
            .map(|child| child.invert())
            .collect(),
    }
}

/// Place a White piece on every empty cell, expanding mill closures.
fn generate_add(board: &Board) -> Vec<Board> {
    let mut children = Vec::new();
    for location in 0..CELLS {
        if !board.is_empty(location) {
            continue;
        }
        let child = board.with_cell(location, Side::White.byte());
        if closes_mill(location, &child) {
            generate_remove(&child, Side::White, &mut children);
        } else {
            children.push(child);
        }
    }
    children
}

/// Sliding and flying moves for `side`.
///
/// With exactly 3 pieces on the board the side flies: every piece may hop
/// to every empty cell. Otherwise pieces slide to adjacent empty cells.
pub fn midgame_moves(board: &Board, side: Side) -> Vec<Board> {
    let mut children = Vec::new();
    let flying = board.count(side) == FLYING_COUNT;

    for from in 0..CELLS {
        if !board.is_side(from, side) {
            continue;
        }
        if flying {
            for to in 0..CELLS {
                if board.is_empty(to) {
                    push_relocation(board, side, from, to, &mut children);
                }
            }
        } else {
            for &to in Board::neighbors(from) {
                if board.is_empty(to) {
                    push_relocation(board, side, from, to, &mut children);
                }
            }
        }
    }
    children
}

/// Move a piece from `from` to `to`, expanding mill closures.
fn push_relocation(board: &Board, side: Side, from: usize, to: usize, out: &mut Vec<Board>) {
    let child = board.with_cell(from, EMPTY).with_cell(to, side.byte());
    if closes_mill(to, &child) {
        generate_remove(&child, side, out);
    } else {
        out.push(child);
    }
}

/// Expand a mill-closing board into capture children.
///
/// One child per opponent piece not currently in a mill of its own color;
/// if every opponent piece is protected (or none exist), the board itself
/// is pushed unchanged.
pub fn generate_remove(board: &Board, mover: Side, out: &mut Vec<Board>) {
    let opponent = mover.opponent();
    let mut added = false;
    for location in 0..CELLS {
        if board.is_side(location, opponent) && !closes_mill(location, board) {
            out.push(board.with_cell(location, EMPTY));
            added = true;
        }
    }
    if !added {
        out.push(*board);
    }
}

/// Number of legal moves `side` has in the mid/endgame. Used by the static
/// estimators as a mobility term.
pub fn mobility(board: &Board, side: Side) -> usize {
    midgame_moves(board, side).len()
}
