use std::time::{Duration, Instant};
use log::{info, warn};
use crate::core::board::{Board, CandidateMove};
use crate::core::evaluation::{Evaluator, OpenMoveEval};
use crate::core::search::common::changes_role;
use crate::core::search::search_result::SearchResult;
use crate::core::search::time::TimeLeft;
use crate::core::search::{SearchAlgorithm, SearchConfig, SearchError, SearchStrategy};

pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Picks one move per turn with a fixed-depth search.
pub struct Agent<B: Board> {
    search_depth: u32,
    evaluator: Box<dyn Evaluator<B>>,
    strategy: Box<dyn SearchStrategy<B>>,
}

impl<B: Board> Agent<B> {
    /// Alpha-beta to `search_depth`, scored by open-move count.
    pub fn new(search_depth: u32) -> Self {
        Self::with_algorithm(
            search_depth,
            Box::new(OpenMoveEval),
            SearchAlgorithm::AlphaBeta,
            SearchConfig::default(),
        )
    }

    pub fn with_algorithm(
        search_depth: u32,
        evaluator: Box<dyn Evaluator<B>>,
        algorithm: SearchAlgorithm,
        config: SearchConfig,
    ) -> Self {
        Self::with_strategy(search_depth, evaluator, algorithm.strategy(config))
    }

    pub fn with_strategy(
        search_depth: u32,
        evaluator: Box<dyn Evaluator<B>>,
        strategy: Box<dyn SearchStrategy<B>>,
    ) -> Self {
        Self {
            search_depth,
            evaluator,
            strategy,
        }
    }

    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    /// Runs the full search and returns everything it found.
    pub fn search(
        &self,
        board: &B,
        time_left: &dyn TimeLeft,
    ) -> Result<SearchResult<B::Move>, SearchError> {
        self.strategy.search(board, self.evaluator.as_ref(), self.search_depth, time_left)
    }

    /// Chooses a move and whether it hands the turn to the other player.
    ///
    /// The search expands `board.legal_moves()`, so the board decides which
    /// moves are considered. `legal_moves` only says whether there is anything
    /// to play (`Ok(None)` if not) and supplies the fallback: when the search
    /// comes back empty (the budget was already inside the margin at the
    /// root), its first entry is played.
    pub fn decide_move(
        &self,
        board: &B,
        legal_moves: &[CandidateMove<B::Move>],
        time_left: &dyn TimeLeft,
    ) -> Result<Option<(B::Move, bool)>, SearchError> {
        let Some(first_move) = legal_moves.first() else {
            info!("no legal moves, passing");
            return Ok(None);
        };

        let now = Instant::now();
        let result = self.search(board, time_left)?;
        log_search_result(self.strategy.name(), &result, self.search_depth, now.elapsed());

        match (result.best_move, result.changes_role) {
            (Some(best_move), Some(changes_role)) => Ok(Some((best_move, changes_role))),
            _ => {
                warn!(
                    "{} found no move with {:?} left, playing {:?}",
                    self.strategy.name(),
                    time_left.time_left(),
                    first_move.game_move,
                );
                let successor = board.forecast_move(&first_move.game_move, &board.active_player());
                Ok(Some((first_move.game_move.clone(), changes_role(board, &successor))))
            },
        }
    }
}

impl<B: Board> Default for Agent<B> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

fn log_search_result<M: std::fmt::Debug>(
    algorithm: &str,
    result: &SearchResult<M>,
    depth: u32,
    duration: Duration,
) {
    let nodes = result.nodes_searched;
    let nodes_per_second = nodes as u128 * 1000 / duration.as_millis().max(1);

    info!(
        "{algorithm} depth {depth} value {} nodes {nodes} nps {nodes_per_second} time {} move {:?}",
        result.backed_up,
        duration.as_millis(),
        result.best_move,
    );
}
