//! Depth-bounded game-tree search.
//!
//! Both strategies share the same recursion over `(board, depth, side)`:
//! at depth 0 the static estimator scores the position; otherwise every
//! generated child is searched at `depth - 1` with the side flipped and
//! the extremal child wins. Comparison is strict (`>` / `<`), so the
//! first child in generation order wins ties; combined with the fixed
//! generation order this makes results reproducible.
//!
//! Alpha-beta performs the identical recursion with a cutoff: after each
//! child is fully processed, iteration stops once `beta <= alpha`. No
//! move ordering is applied before pruning, so the saving depends entirely
//! on generation order. Pruning never changes the chosen board or score,
//! only the number of positions evaluated.
//!
//! Search is single-threaded and runs to completion; the only bounds are
//! the explicit [`SearchLimits`].

use crate::board::{Board, Side};
use crate::eval::{Evaluator, Variant};
use crate::moves::{generate, Phase};

/// Explicit bounds on a search invocation.
#[derive(Copy, Clone, Debug)]
pub struct SearchLimits {
    /// Plies to look ahead. Zero means "score the root statically".
    pub depth: u32,
    /// Optional cap on leaf evaluations; once spent, remaining nodes are
    /// scored statically instead of expanded.
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            max_nodes: None,
        }
    }
}

/// Outcome of one top-level search: the chosen one-ply-ahead board, the
/// root score, and the cumulative leaf-evaluation count of this
/// invocation.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub board: Board,
    pub score: i32,
    pub evaluated: u64,
}

/// Exhaustive minimax.
///
/// Visits the full tree; `evaluated` counts every leaf scored.
pub fn minimax(
    board: &Board,
    side: Side,
    limits: SearchLimits,
    phase: Phase,
    variant: Variant,
) -> SearchOutcome {
    let mut eval = Evaluator::new(phase, variant);
    let (child, score) = minimax_node(board, side, limits.depth, &limits, &mut eval);
    SearchOutcome {
        board: child,
        score,
        evaluated: eval.evaluated,
    }
}

fn minimax_node(
    board: &Board,
    side: Side,
    depth: u32,
    limits: &SearchLimits,
    eval: &mut Evaluator,
) -> (Board, i32) {
    if at_leaf(depth, limits, eval) {
        return (*board, eval.estimate(board));
    }

    let children = generate(board, side, eval.phase);
    if children.is_empty() {
        // No legal move: let the estimator's terminal branches score it.
        return (*board, eval.estimate(board));
    }

    let mut best: Option<(Board, i32)> = None;
    for child in children {
        let (_, score) = minimax_node(&child, side.opponent(), depth - 1, limits, eval);
        let better = match best {
            None => true,
            Some((_, best_score)) => match side {
                Side::White => score > best_score,
                Side::Black => score < best_score,
            },
        };
        if better {
            best = Some((child, score));
        }
    }
    best.unwrap()
}

/// Minimax with alpha-beta pruning.
///
/// Returns the same board and score as [`minimax`] for every position and
/// depth; only `evaluated` may be smaller.
pub fn alphabeta(
    board: &Board,
    side: Side,
    limits: SearchLimits,
    phase: Phase,
    variant: Variant,
) -> SearchOutcome {
    let mut eval = Evaluator::new(phase, variant);
    let (child, score) = alphabeta_node(
        board,
        side,
        limits.depth,
        i32::MIN,
        i32::MAX,
        &limits,
        &mut eval,
    );
    SearchOutcome {
        board: child,
        score,
        evaluated: eval.evaluated,
    }
}

#[allow(clippy::too_many_arguments)]
fn alphabeta_node(
    board: &Board,
    side: Side,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    limits: &SearchLimits,
    eval: &mut Evaluator,
) -> (Board, i32) {
    if at_leaf(depth, limits, eval) {
        return (*board, eval.estimate(board));
    }

    let children = generate(board, side, eval.phase);
    if children.is_empty() {
        return (*board, eval.estimate(board));
    }

    let mut best: Option<(Board, i32)> = None;
    for child in children {
        let (_, score) = alphabeta_node(
            &child,
            side.opponent(),
            depth - 1,
            alpha,
            beta,
            limits,
            eval,
        );
        let better = match best {
            None => true,
            Some((_, best_score)) => match side {
                Side::White => score > best_score,
                Side::Black => score < best_score,
            },
        };
        if better {
            best = Some((child, score));
        }
        match side {
            Side::White => alpha = alpha.max(score),
            Side::Black => beta = beta.min(score),
        }
        // Cutoff after the current child, so the child that triggers it
        // is still fully counted.
        if beta <= alpha {
            break;
        }
    }
    best.unwrap()
}

/// True when the node must be scored statically: depth exhausted, or the
/// evaluation budget (if any) is spent.
fn at_leaf(depth: u32, limits: &SearchLimits, eval: &Evaluator) -> bool {
    depth == 0
        || limits
            .max_nodes
            .is_some_and(|cap| eval.evaluated >= cap)
}
