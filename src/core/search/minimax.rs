use log::debug;
use crate::core::board::Board;
use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;
use crate::core::search::common::{changes_role, SearchContext};
use crate::core::search::search_result::SearchResult;
use crate::core::search::time::TimeLeft;
use crate::core::search::{SearchConfig, SearchError, SearchStrategy};

/// Plain minimax without pruning. The reference the pruned search is checked against.
#[derive(Copy, Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl<B: Board> SearchStrategy<B> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(
        &self,
        board: &B,
        evaluator: &dyn Evaluator<B>,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<SearchResult<B::Move>, SearchError> {
        let mut context = SearchContext::new(evaluator, time_left, self.config.time_margin);

        Ok(search_minimax(board, &mut context, depth))
    }
}

pub fn search_minimax<B: Board>(
    board: &B,
    context: &mut SearchContext<B>,
    depth: u32,
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
        let value = min_value(&successor, depth - 1, context) * candidate.multiplier();

        if value > result.backed_up {
            result.best_move = Some(candidate.game_move.clone());
            result.changes_role = Some(changes_role(board, &successor));
            result.evaluation = Some(context.score(&successor));
            result.backed_up = value;
            debug!("minimax: best move {:?} at {}", candidate.game_move, value);
        }
    }

    result.nodes_searched = context.nodes_searched;
    result
}

fn max_value<B: Board>(
    board: &B,
    depth: u32,
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
        let eval = min_value(&successor, depth - 1, context) * candidate.multiplier();
        best_eval = best_eval.max(eval);
    }

    best_eval
}

// The minimizer's own moves are taken at face value.
fn min_value<B: Board>(
    board: &B,
    depth: u32,
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
        let eval = max_value(&successor, depth - 1, context);
        best_eval = best_eval.min(eval);
    }

    best_eval
}
