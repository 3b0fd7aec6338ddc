//! Constants for board geometry, search scoring, and learning parameters.
//!
//! The mill board has a single fixed topology: 18 intersections indexed
//! 0..17, each with a hard-coded neighbor list. Unlike square boards there
//! is no formula for adjacency; the table below *is* the board, and every
//! move-generation guarantee downstream depends on it being reproduced
//! exactly.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of intersections on the board.
pub const CELLS: usize = 18;

/// Adjacency table: the neighbors of each cell, indexed by cell.
///
/// Corners have 2-3 neighbors, cross-points have 4. Derived from the
/// physical board layout (coordinates a0..g6); never recomputed at runtime.
/// The table is not quite symmetric: edges 1 -> 11 and 8 -> 1 have no
/// reverse entry, an inherited quirk kept as-is.
pub const NEIGHBORS: [&[usize]; CELLS] = [
    &[1, 2, 15],       // 0  a0
    &[0, 3, 11],       // 1  g0
    &[0, 3, 4, 12],    // 2  b1
    &[1, 2, 5, 7],     // 3  f1
    &[2, 5, 9],        // 4  c2
    &[3, 4, 6],        // 5  e2
    &[5, 7, 11],       // 6  e3
    &[3, 6, 8, 14],    // 7  f3
    &[1, 7, 17],       // 8  g3
    &[4, 10, 12],      // 9  c4
    &[9, 11, 13],      // 10 d4
    &[6, 10, 14],      // 11 e4
    &[2, 9, 13, 15],   // 12 b5
    &[10, 12, 14, 16], // 13 d5
    &[7, 11, 13, 17],  // 14 f5
    &[0, 12, 16],      // 15 a6
    &[13, 15, 17],     // 16 d6
    &[8, 14, 16],      // 17 g6
];

/// Cells adjacent to the board center, used by the improved opening
/// estimator for its control bonus.
pub const CENTER_CELLS: [usize; 6] = [4, 5, 6, 9, 10, 11];

// =============================================================================
// Cell Contents (as bytes for direct comparison)
// =============================================================================

/// Empty intersection.
pub const EMPTY: u8 = b'x';

/// White piece.
pub const WHITE: u8 = b'W';

/// Black piece.
pub const BLACK: u8 = b'B';

// =============================================================================
// Game Phases
// =============================================================================

/// Plies in the placement phase (9 pieces per side).
pub const OPENING_PLIES: usize = 18;

/// Piece count at which a side may hop to any empty cell.
pub const FLYING_COUNT: usize = 3;

// =============================================================================
// Search Scoring
// =============================================================================

/// Score denoting a detected forced win for White (negated for Black).
pub const WIN_SCORE: i32 = 10_000;

/// Weight of the piece-count difference in the mid/endgame estimators.
pub const PIECE_WEIGHT: i32 = 1_000;

/// Weight of the mill-count difference in the improved mid/endgame estimator.
pub const MILL_WEIGHT: i32 = 400;

/// Per-piece bonus for occupying a center cell in the improved opening
/// estimator.
pub const CENTER_WEIGHT: i32 = 3;

// =============================================================================
// Q-Learning Parameters
// =============================================================================

/// Learning rate (alpha) for the temporal-difference update.
pub const LEARNING_RATE: f64 = 0.1;

/// Discount factor (gamma) for future value estimates.
pub const DISCOUNT_FACTOR: f64 = 0.9;

/// Probability of choosing a random action instead of the greedy one.
pub const EXPLORATION_RATE: f64 = 0.1;

/// Number of self-play training episodes.
pub const EPISODES: usize = 10_000;

/// Terminal reward magnitude in the full-game learner.
pub const TERMINAL_REWARD: f64 = 100.0;
