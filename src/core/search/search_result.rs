use crate::core::score::Utility;

/// The outcome of a top-level search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// `None` when the root had no legal moves, or was cut off before expansion.
    pub best_move: Option<M>,
    /// Whether playing `best_move` hands the turn to a different player.
    pub changes_role: Option<bool>,
    /// The static evaluation of the position `best_move` leads to.
    pub evaluation: Option<Utility>,
    /// The weighted, backed-up value of the root. Equals the static score of
    /// the root when it was not expanded.
    pub backed_up: Utility,
    pub nodes_searched: u32,
}

impl<M> SearchResult<M> {
    /// The result for a root that is not expanded.
    pub fn terminal(score: Utility) -> Self {
        Self {
            best_move: None,
            changes_role: None,
            evaluation: None,
            backed_up: score,
            nodes_searched: 1,
        }
    }

    /// Moves and values only; `nodes_searched` differs between algorithms.
    pub fn same_decision(&self, other: &SearchResult<M>) -> bool
        where M: PartialEq {
        self.best_move == other.best_move
            && self.changes_role == other.changes_role
            && self.evaluation == other.evaluation
            && self.backed_up == other.backed_up
    }
}
