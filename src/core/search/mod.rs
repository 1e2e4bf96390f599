use std::time::Duration;
use clap::ValueEnum;
use thiserror::Error;

use crate::core::board::Board;
use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;
use crate::core::search::alpha_beta::AlphaBeta;
use crate::core::search::minimax::Minimax;
use crate::core::search::search_result::SearchResult;
use crate::core::search::time::TimeLeft;

pub mod alpha_beta;
pub mod common;
pub mod minimax;
pub mod search_result;
pub mod time;


#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SearchError {
    #[error("search strategy `{0}` is not implemented")]
    NotImplemented(&'static str),
}

/// Bounds and margins the search starts from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub initial_alpha: Utility,
    pub initial_beta: Utility,
    /// Once less than this is left, every node is scored statically so the
    /// recursion unwinds before the deadline.
    pub time_margin: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_alpha: Utility::NEG_INFINITY,
            initial_beta: Utility::INFINITY,
            time_margin: Duration::from_millis(5),
        }
    }
}

/// A depth-bounded adversarial search, run from the maximizing player's side.
///
/// Strategies that do not override `search` report `SearchError::NotImplemented`
/// instead of returning a result.
pub trait SearchStrategy<B: Board> {
    fn name(&self) -> &'static str;

    fn search(
        &self,
        _board: &B,
        _evaluator: &dyn Evaluator<B>,
        _depth: u32,
        _time_left: &dyn TimeLeft,
    ) -> Result<SearchResult<B::Move>, SearchError> {
        Err(SearchError::NotImplemented(self.name()))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn strategy<B: Board>(self, config: SearchConfig) -> Box<dyn SearchStrategy<B>> {
        match self {
            SearchAlgorithm::Minimax => Box::new(Minimax::new(config)),
            SearchAlgorithm::AlphaBeta => Box::new(AlphaBeta::new(config)),
        }
    }
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        SearchAlgorithm::AlphaBeta
    }
}
