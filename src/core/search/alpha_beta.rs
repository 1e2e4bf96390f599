use log::debug;
use crate::core::board::Board;
use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;
use crate::core::search::common::{changes_role, child_window, SearchContext};
use crate::core::search::search_result::SearchResult;
use crate::core::search::time::TimeLeft;
use crate::core::search::{SearchConfig, SearchError, SearchStrategy};

/// Minimax with alpha-beta pruning (fail-soft).
///
/// Finds the same move and value as [`Minimax`](crate::core::search::minimax::Minimax)
/// when started from the default open window.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
}

impl AlphaBeta {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl<B: Board> SearchStrategy<B> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(
        &self,
        board: &B,
        evaluator: &dyn Evaluator<B>,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<SearchResult<B::Move>, SearchError> {
        let mut context = SearchContext::new(evaluator, time_left, self.config.time_margin);

        Ok(search_alpha_beta(
            board,
            &mut context,
            depth,
            self.config.initial_alpha,
            self.config.initial_beta,
        ))
    }
}

pub fn search_alpha_beta<B: Board>(
    board: &B,
    context: &mut SearchContext<B>,
    depth: u32,
    mut alpha: Utility,
    beta: Utility,
) -> SearchResult<B::Move> {
    context.nodes_searched += 1;

    let moves = board.legal_moves();
    if context.is_cutoff(depth, &moves) {
        return SearchResult::terminal(context.score(board));
    }

    let mover = board.active_player();
    let mut result = SearchResult::terminal(Utility::NEG_INFINITY);

    for candidate in moves.iter() {
        let successor = board.forecast_move(&candidate.game_move, &mover);
        let weight = candidate.multiplier();
        let (child_alpha, child_beta) = child_window(alpha, beta, weight);
        let value = min_value(&successor, depth - 1, child_alpha, child_beta, context) * weight;

        if value > result.backed_up {
            result.best_move = Some(candidate.game_move.clone());
            result.changes_role = Some(changes_role(board, &successor));
            result.evaluation = Some(context.score(&successor));
            result.backed_up = value;
            debug!("alpha-beta: best move {:?} at {}", candidate.game_move, value);
        }

        alpha = alpha.max(result.backed_up);
        if alpha >= beta {
            break;
        }
    }

    result.nodes_searched = context.nodes_searched;
    result
}

fn max_value<B: Board>(
    board: &B,
    depth: u32,
    mut alpha: Utility,
    beta: Utility,
    context: &mut SearchContext<B>,
) -> Utility {
    context.nodes_searched += 1;

    let moves = board.legal_moves();
    if context.is_cutoff(depth, &moves) {
        return context.score(board);
    }

    let mover = board.active_player();
    let mut best_eval = Utility::NEG_INFINITY;

    for candidate in moves.iter() {
        let successor = board.forecast_move(&candidate.game_move, &mover);
        let weight = candidate.multiplier();
        let (child_alpha, child_beta) = child_window(alpha, beta, weight);
        let eval = min_value(&successor, depth - 1, child_alpha, child_beta, context) * weight;
        best_eval = best_eval.max(eval);

        alpha = alpha.max(best_eval);
        if alpha >= beta {
            return best_eval;
        }
    }

    best_eval
}

fn min_value<B: Board>(
    board: &B,
    depth: u32,
    alpha: Utility,
    mut beta: Utility,
    context: &mut SearchContext<B>,
) -> Utility {
    context.nodes_searched += 1;

    let moves = board.legal_moves();
    if context.is_cutoff(depth, &moves) {
        return context.score(board);
    }

    let mover = board.active_player();
    let mut best_eval = Utility::INFINITY;

    for candidate in moves.iter() {
        let successor = board.forecast_move(&candidate.game_move, &mover);
        let eval = max_value(&successor, depth - 1, alpha, beta, context);
        best_eval = best_eval.min(eval);

        beta = beta.min(best_eval);
        if beta <= alpha {
            return best_eval;
        }
    }

    best_eval
}
