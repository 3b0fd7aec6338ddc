//! Morris-Rust: a mill-game ("Nine Men's Morris"-style) search engine.
//!
//! This crate computes the best move on the fixed 18-intersection mill
//! board across the game's placement, sliding, and flying phases. All
//! strategies consume the same substrate: one phase-aware move generator
//! and one color-symmetric mill detector.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, adjacency table, tuning parameters
//! - [`board`] - Board encoding, parsing, color inversion
//! - [`mill`] - Mill-line table and mill detection
//! - [`moves`] - Phase-aware move generation with capture expansion
//! - [`eval`] - Static evaluators and the evaluation counter
//! - [`search`] - Minimax and alpha-beta
//! - [`qlearning`] - Tabular Q-learning (opening and full-game variants)
//!
//! ## Example
//!
//! ```
//! use morris_rust::board::{Board, Side};
//! use morris_rust::eval::Variant;
//! use morris_rust::moves::Phase;
//! use morris_rust::search::{alphabeta, SearchLimits};
//!
//! // White to move on the empty board, three plies deep.
//! let outcome = alphabeta(
//!     &Board::empty(),
//!     Side::White,
//!     SearchLimits::depth(3),
//!     Phase::Opening,
//!     Variant::Improved,
//! );
//! println!("best: {} score: {}", outcome.board, outcome.score);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod mill;
pub mod moves;
pub mod qlearning;
pub mod search;
