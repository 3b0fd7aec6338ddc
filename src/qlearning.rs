//! Tabular Q-learning over the shared move-generation substrate.
//!
//! Two learned policies exist:
//!
//! - **Opening**: self-play over exactly 18 plies per episode (the whole
//!   placement phase), reward `whiteCount - blackCount` of the successor at
//!   every step.
//! - **Full game**: episodes run from a supplied start position to a
//!   terminal state (either side down to 2 pieces, or either side without a
//!   legal move), reward 0 until termination and +/-100 at it, signed by
//!   the side that just moved.
//!
//! Both use epsilon-greedy action selection (10% random) and the standard
//! temporal-difference update with alpha = 0.1, gamma = 0.9. An "action"
//! is the exact resulting board, so the Q-table maps board -> board ->
//! value. The table is an owned value passed into training and querying;
//! nothing lives in process-wide state and nothing is persisted.

use std::collections::HashMap;

use crate::board::{Board, Side};
use crate::constants::{
    DISCOUNT_FACTOR, EXPLORATION_RATE, LEARNING_RATE, OPENING_PLIES, TERMINAL_REWARD,
};
use crate::moves::{generate, midgame_moves, mobility, Phase};

/// Learned value estimates: state -> action -> expected value.
///
/// Created empty, populated by a training loop, read-only afterward.
#[derive(Default)]
pub struct QTable {
    values: HashMap<Board, HashMap<Board, f64>>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states with at least one learned action.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The stored value for `(state, action)`, defaulting to 0.
    pub fn value(&self, state: &Board, action: &Board) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// The largest stored action value for `state`, or 0 with no entry.
    pub fn max_value(&self, state: &Board) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// The action in `legal` with the largest stored value, or `None`
    /// when no legal action has an entry for `state`.
    ///
    /// Both sides record actions under the same board key, so a greedy
    /// lookup must never range over the raw entry: a state first visited
    /// by White may hold White placements that are illegal on Black's
    /// turn.
    pub fn best_legal_action(&self, state: &Board, legal: &[Board]) -> Option<Board> {
        let actions = self.values.get(state)?;
        legal
            .iter()
            .filter_map(|action| actions.get(action).map(|value| (action, value)))
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(action, _)| *action)
    }

    /// Apply the temporal-difference update
    /// `Q(s,a) += alpha * (r + gamma * max Q(s',.) - Q(s,a))`.
    pub fn update(&mut self, state: &Board, action: &Board, reward: f64, next: &Board) {
        let old = self.value(state, action);
        let future = self.max_value(next);
        let updated = old + LEARNING_RATE * (reward + DISCOUNT_FACTOR * future - old);
        self.values
            .entry(*state)
            .or_default()
            .insert(*action, updated);
    }
}

/// Epsilon-greedy choice among `legal` actions, falling back to a random
/// legal action when the table has no legal action stored for `state`.
fn select_action(table: &QTable, state: &Board, legal: &[Board]) -> Board {
    if fastrand::f64() < EXPLORATION_RATE {
        legal[fastrand::usize(..legal.len())]
    } else {
        table
            .best_legal_action(state, legal)
            .unwrap_or_else(|| legal[fastrand::usize(..legal.len())])
    }
}

/// Train the opening policy by self-play.
///
/// Each episode plays the full 18-ply placement phase from the empty
/// board; the starting side alternates with episode parity. The reward at
/// every step is the successor's piece-count difference.
pub fn train_opening(table: &mut QTable, episodes: usize) {
    for episode in 0..episodes {
        let mut board = Board::empty();
        let mut side = starting_side(episode);
        for _ in 0..OPENING_PLIES {
            let legal = generate(&board, side, Phase::Opening);
            let action = select_action(table, &board, &legal);
            let reward =
                action.count(Side::White) as f64 - action.count(Side::Black) as f64;
            table.update(&board, &action, reward, &action);
            board = action;
            side = side.opponent();
        }
    }
}

/// Train the full-game policy by self-play from `start`.
///
/// Episodes run until a terminal position; the starting side alternates
/// with episode parity. Reward is 0 at every non-terminal step and
/// +/-100 at termination, positive for the mover that forced it.
pub fn train_game(table: &mut QTable, start: &Board, episodes: usize) {
    for episode in 0..episodes {
        let mut board = *start;
        let mut side = starting_side(episode);
        while !is_terminal(&board) {
            let legal = midgame_moves(&board, side);
            let action = select_action(table, &board, &legal);
            let reward = terminal_reward(&action, side);
            table.update(&board, &action, reward, &action);
            board = action;
            side = side.opponent();
        }
    }
}

/// Pick the learned move for `side` at `board`: the legal action with the
/// largest stored value, or a random legal move when the table has learned
/// nothing for this side here. `None` only when no legal move exists at
/// all.
pub fn find_best_move(table: &QTable, board: &Board, side: Side, phase: Phase) -> Option<Board> {
    let legal = generate(board, side, phase);
    if legal.is_empty() {
        return None;
    }
    Some(
        table
            .best_legal_action(board, &legal)
            .unwrap_or_else(|| legal[fastrand::usize(..legal.len())]),
    )
}

fn starting_side(episode: usize) -> Side {
    if episode % 2 == 0 {
        Side::White
    } else {
        Side::Black
    }
}

/// Game over: either side is down to 2 pieces or has no legal move.
pub fn is_terminal(board: &Board) -> bool {
    board.count(Side::White) <= 2
        || board.count(Side::Black) <= 2
        || mobility(board, Side::White) == 0
        || mobility(board, Side::Black) == 0
}

/// Terminal reward from the perspective of `mover`, the side that just
/// produced `board`. Zero while the game is still live.
fn terminal_reward(board: &Board, mover: Side) -> f64 {
    let signed = |white_wins: bool| match (white_wins, mover) {
        (true, Side::White) | (false, Side::Black) => TERMINAL_REWARD,
        _ => -TERMINAL_REWARD,
    };
    if board.count(Side::White) <= 2 {
        signed(false)
    } else if board.count(Side::Black) <= 2 {
        signed(true)
    } else if mobility(board, Side::White) == 0 {
        signed(false)
    } else if mobility(board, Side::Black) == 0 {
        signed(true)
    } else {
        0.0
    }
}
