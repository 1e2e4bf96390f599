use crate::core::board::Board;
use crate::core::score::Utility;

/// A static evaluation of a position.
///
/// Implementations must be total and deterministic: any reachable position,
/// terminal ones included, gets a score, and a higher score is better for the
/// perspective named by `maximizing_player_turn`.
pub trait Evaluator<B: Board> {
    fn score(&self, board: &B, maximizing_player_turn: bool) -> Utility;
}

impl<B, F> Evaluator<B> for F
    where B: Board, F: Fn(&B, bool) -> Utility {
    fn score(&self, board: &B, maximizing_player_turn: bool) -> Utility {
        self(board, maximizing_player_turn)
    }
}

/// Mobility, counted for the side to move.
///
/// The maximizer perspective counts `legal_moves`, i.e. the moves of whoever
/// is to move in `board`, which at odd plies below the root is the opponent.
/// The minimizer perspective counts `opponent_moves`.
#[derive(Copy, Clone, Debug, Default)]
pub struct OpenMoveEval;

impl<B: Board> Evaluator<B> for OpenMoveEval {
    fn score(&self, board: &B, maximizing_player_turn: bool) -> Utility {
        match maximizing_player_turn {
            true => Utility::from(board.legal_moves().len()),
            false => Utility::from(board.opponent_moves().len()),
        }
    }
}

/// Moves of the side to move minus the other side's moves, negated for the minimizer.
#[derive(Copy, Clone, Debug, Default)]
pub struct MobilityDifferenceEval;

impl<B: Board> Evaluator<B> for MobilityDifferenceEval {
    fn score(&self, board: &B, maximizing_player_turn: bool) -> Utility {
        let difference = Utility::new(
            board.legal_moves().len() as f64 - board.opponent_moves().len() as f64
        );

        match maximizing_player_turn {
            true => difference,
            false => -difference,
        }
    }
}
