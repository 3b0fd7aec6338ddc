//! Static position evaluation.
//!
//! Two formula families exist, one per game phase, each in a simple and an
//! improved flavor. Scores are signed from White's perspective: positive
//! favors White, negative favors Black, and a magnitude of
//! [`WIN_SCORE`](crate::constants::WIN_SCORE) marks a detected forced win.
//!
//! An [`Evaluator`] bundles the selected formula with the evaluated-position
//! counter. The counter is owned by whoever created the evaluator (one per
//! top-level search invocation) rather than living in process-wide state,
//! so independent searches never see each other's totals.

use crate::board::{Board, Side};
use crate::constants::{CENTER_CELLS, CENTER_WEIGHT, MILL_WEIGHT, PIECE_WEIGHT, WIN_SCORE};
use crate::mill::mill_cell_count;
use crate::moves::{mobility, Phase};

/// Which scoring formula to use within a phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Piece counts only (plus Black mobility in the mid/endgame).
    Simple,
    /// Adds center control (opening) or symmetric mobility and mill terms
    /// (mid/endgame).
    Improved,
}

/// A configured estimator plus its leaf-evaluation counter.
#[derive(Debug)]
pub struct Evaluator {
    pub phase: Phase,
    pub variant: Variant,
    /// Number of `estimate` calls made so far; incremented exactly once
    /// per call.
    pub evaluated: u64,
}

impl Evaluator {
    pub fn new(phase: Phase, variant: Variant) -> Self {
        Evaluator {
            phase,
            variant,
            evaluated: 0,
        }
    }

    /// Score a leaf position and count the evaluation.
    pub fn estimate(&mut self, board: &Board) -> i32 {
        self.evaluated += 1;
        match self.phase {
            Phase::Opening => opening_estimate(board, self.variant),
            Phase::MidEndgame => midgame_estimate(board, self.variant),
        }
    }
}

/// Opening estimate: piece-count difference, plus a center-control bonus
/// in the improved variant (+3 per White piece, -3 per Black piece on one
/// of the six center-adjacent cells).
fn opening_estimate(board: &Board, variant: Variant) -> i32 {
    let diff = board.count(Side::White) as i32 - board.count(Side::Black) as i32;
    match variant {
        Variant::Simple => diff,
        Variant::Improved => {
            let mut control = 0;
            for &cell in &CENTER_CELLS {
                if board.is_side(cell, Side::White) {
                    control += CENTER_WEIGHT;
                } else if board.is_side(cell, Side::Black) {
                    control -= CENTER_WEIGHT;
                }
            }
            diff + control
        }
    }
}

/// Mid/endgame estimate with terminal short-circuits.
///
/// The simple variant only checks Black for the zero-moves loss and only
/// penalizes Black's mobility; the improved variant is symmetric and adds
/// a mill term. Mill counts are per occupied cell (3 per formed mill).
fn midgame_estimate(board: &Board, variant: Variant) -> i32 {
    let white = board.count(Side::White) as i32;
    let black = board.count(Side::Black) as i32;
    let black_moves = mobility(board, Side::Black) as i32;

    match variant {
        Variant::Simple => {
            if black <= 2 {
                WIN_SCORE
            } else if white <= 2 {
                -WIN_SCORE
            } else if black_moves == 0 {
                WIN_SCORE
            } else {
                PIECE_WEIGHT * (white - black) - black_moves
            }
        }
        Variant::Improved => {
            let white_moves = mobility(board, Side::White) as i32;
            let white_mills = mill_cell_count(board, Side::White) as i32;
            let black_mills = mill_cell_count(board, Side::Black) as i32;
            if black <= 2 {
                WIN_SCORE
            } else if white <= 2 {
                -WIN_SCORE
            } else if black_moves == 0 {
                WIN_SCORE
            } else if white_moves == 0 {
                -WIN_SCORE
            } else {
                PIECE_WEIGHT * (white - black)
                    + (white_moves - black_moves)
                    + MILL_WEIGHT * (white_mills - black_mills)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_simple_piece_diff() {
        let mut eval = Evaluator::new(Phase::Opening, Variant::Simple);
        let board = Board::parse("WWxxxxxxxBxxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), 1);
        // Center occupancy is ignored by the simple formula.
        let board = Board::parse("xxxxWxxxxxxxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), 1);
    }

    #[test]
    fn test_opening_improved_center_control() {
        let mut eval = Evaluator::new(Phase::Opening, Variant::Improved);
        // White on center cell 4: 1 + 3.
        let board = Board::parse("xxxxWxxxxxxxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), 4);
        // Black on center cell 10 cancels it: (1 - 1) + (3 - 3).
        let board = Board::parse("xxxxWxxxxxBxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), 0);
        // Off-center pieces get no bonus.
        let board = Board::parse("Wxxxxxxxxxxxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), 1);
    }

    #[test]
    fn test_midgame_terminal_scores() {
        let mut eval = Evaluator::new(Phase::MidEndgame, Variant::Simple);
        // Black down to 2 pieces: White win.
        let board = Board::parse("WWWWxxxxxBBxxxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), WIN_SCORE);
        // White down to 2: Black win (checked after Black's count).
        let board = Board::parse("WWxxxxxxxBBBBxxxxx").unwrap();
        assert_eq!(eval.estimate(&board), -WIN_SCORE);
        // Full board: Black has zero moves.
        let board = Board::parse("WWWWWWWWWBBBBBBBBB").unwrap();
        assert_eq!(eval.estimate(&board), WIN_SCORE);
    }

    #[test]
    fn test_midgame_simple_formula() {
        let mut eval = Evaluator::new(Phase::MidEndgame, Variant::Simple);
        // 4 White vs 3 Black: the score is the weighted piece difference
        // minus Black's mobility (capture expansions included).
        let board = Board::parse("WWxWWxxxxBxBxBxxxx").unwrap();
        let black_moves = mobility(&board, Side::Black) as i32;
        assert!(black_moves > 0);
        assert_eq!(eval.estimate(&board), 1000 - black_moves);
    }

    #[test]
    fn test_midgame_improved_mill_term() {
        let mut eval = Evaluator::new(Phase::MidEndgame, Variant::Improved);
        // White mill 0-2-4 plus a fourth piece; four loose Black pieces.
        let board = Board::parse("WxWxWWxxxBxBxBxBxx").unwrap();
        let wm = mobility(&board, Side::White) as i32;
        let bm = mobility(&board, Side::Black) as i32;
        // whiteMills counts all 3 member cells, blackMills none.
        let expected = 1000 * (4 - 4) + (wm - bm) + 400 * 3;
        assert_eq!(eval.estimate(&board), expected);
    }

    #[test]
    fn test_counter_increments_once_per_call() {
        let mut eval = Evaluator::new(Phase::MidEndgame, Variant::Simple);
        let board = Board::parse("WWWWxxxxxBBBBxxxxx").unwrap();
        let first = eval.estimate(&board);
        assert_eq!(eval.evaluated, 1);
        let second = eval.estimate(&board);
        assert_eq!(eval.evaluated, 2);
        assert_eq!(first, second);
    }
}
