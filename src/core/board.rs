use std::fmt::Debug;

/// A legal move together with the weight its outcome is scaled by.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateMove<M> {
    pub game_move: M,
    pub weight: Option<f64>,
}

impl<M> CandidateMove<M> {
    pub fn new(game_move: M) -> Self {
        Self {
            game_move,
            weight: None,
        }
    }

    pub fn weighted(game_move: M, weight: f64) -> Self {
        Self {
            game_move,
            weight: Some(weight),
        }
    }

    /// The multiplier applied at maximizing steps; unweighted moves count at face value.
    pub fn multiplier(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// What the search needs from a game: move generation, forecasting and turn bookkeeping.
///
/// `forecast_move` must not mutate `self`; every sibling is forecast from the same parent.
pub trait Board: Sized {
    type Move: Clone + Debug + PartialEq;
    type Player: Clone + Debug + PartialEq;

    /// Moves for the side to move.
    fn legal_moves(&self) -> Vec<CandidateMove<Self::Move>>;

    /// Moves the side not to move would have.
    fn opponent_moves(&self) -> Vec<CandidateMove<Self::Move>>;

    fn forecast_move(&self, game_move: &Self::Move, mover: &Self::Player) -> Self;

    fn active_player(&self) -> Self::Player;
}
