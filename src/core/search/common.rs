use std::time::Duration;
use crate::core::board::{Board, CandidateMove};
use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;
use crate::core::search::time::TimeLeft;

/// State shared by every frame of one search.
pub struct SearchContext<'a, B: Board> {
    evaluator: &'a dyn Evaluator<B>,
    time_left: &'a dyn TimeLeft,
    time_margin: Duration,
    pub nodes_searched: u32,
}

impl<'a, B: Board> SearchContext<'a, B> {
    pub fn new(
        evaluator: &'a dyn Evaluator<B>,
        time_left: &'a dyn TimeLeft,
        time_margin: Duration,
    ) -> Self {
        Self {
            evaluator,
            time_left,
            time_margin,
            nodes_searched: 0,
        }
    }

    /// Static score, always from the searching player's side.
    pub fn score(&self, board: &B) -> Utility {
        self.evaluator.score(board, true)
    }

    pub fn out_of_time(&self) -> bool {
        self.time_left.time_left() < self.time_margin
    }

    /// Whether a node with `moves` at `depth` is scored instead of expanded.
    pub fn is_cutoff(&self, depth: u32, moves: &[CandidateMove<B::Move>]) -> bool {
        depth == 0 || self.out_of_time() || moves.is_empty()
    }
}

/// Whether `successor` has a different player to move than `board`.
pub fn changes_role<B: Board>(board: &B, successor: &B) -> bool {
    board.active_player() != successor.active_player()
}

/// The window a maximizer hands to a child whose value it multiplies by `weight`.
///
/// The bounds are divided through by `weight` and then widened by whole ulps
/// until `weight * child_alpha <= alpha` and `weight * child_beta >= beta` hold
/// in floating point. A child that fails outside its window then also fails
/// outside the parent's window once weighted. Weights that can't be divided
/// through get an open window.
pub fn child_window(alpha: Utility, beta: Utility, weight: f64) -> (Utility, Utility) {
    if weight == 1.0 {
        return (alpha, beta);
    }
    if !(weight.is_finite() && weight > 0.0) {
        return (Utility::NEG_INFINITY, Utility::INFINITY);
    }

    let mut child_alpha = alpha.0 / weight;
    while child_alpha * weight > alpha.0 {
        child_alpha = next_down(child_alpha);
    }

    let mut child_beta = beta.0 / weight;
    while child_beta * weight < beta.0 {
        child_beta = next_up(child_beta);
    }

    (Utility::new(child_alpha), Utility::new(child_beta))
}

/// The largest float below `x`.
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        x
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// The smallest float above `x`.
fn next_up(x: f64) -> f64 {
    -next_down(-x)
}
