use std::cell::RefCell;
use rand::Rng;
use rand::rngs::StdRng;

use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;
use crate::core::search::search_result::SearchResult;
use crate::core::search::time::Unlimited;
use crate::core::search::{SearchAlgorithm, SearchConfig};
use crate::input::game_tree::{NodeValueEval, TreeEdge, TreeNode, TreePosition};

mod alpha_beta_equivalence;


/// Four root moves, weighted and turn-keeping edges, three plies deep.
pub const WEIGHTED_TREE: &str = include_str!("assets/weighted_tree.json");

/// Node values, recorded in the order they were scored.
#[derive(Debug, Default)]
pub struct RecordingEval {
    pub scored: RefCell<Vec<f64>>,
}

impl<'a> Evaluator<TreePosition<'a>> for RecordingEval {
    fn score(&self, board: &TreePosition<'a>, maximizing_player_turn: bool) -> Utility {
        self.scored.borrow_mut().push(board.value());
        NodeValueEval.score(board, maximizing_player_turn)
    }
}

impl RecordingEval {
    pub fn calls(&self) -> usize {
        self.scored.borrow().len()
    }
}

/// A node whose children are unweighted leaves.
pub fn fan(value: f64, leaves: &[f64]) -> TreeNode {
    TreeNode::with_children(
        value,
        leaves.iter()
            .enumerate()
            .map(|(index, leaf)| TreeEdge::new(&format!("leaf{index}"), TreeNode::leaf(*leaf)))
            .collect(),
    )
}

pub fn search_tree(
    algorithm: SearchAlgorithm,
    tree: &TreeNode,
    depth: u32,
) -> SearchResult<usize> {
    let strategy = algorithm.strategy::<TreePosition>(SearchConfig::default());

    strategy.search(&TreePosition::root(tree), &NodeValueEval, depth, &Unlimited)
        .expect("built-in strategies are implemented")
}

/// How leaf values and move weights are drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Arithmetic {
    /// Integer values, weights whose products are exact.
    Exact,
    /// Fractional values and weights, so weighting rounds.
    Rounding,
}

pub fn random_tree(rng: &mut StdRng, depth: u32, max_branching: usize, arithmetic: Arithmetic) -> TreeNode {
    let value = match arithmetic {
        Arithmetic::Exact => rng.gen_range(-20..=20) as f64,
        Arithmetic::Rounding => match rng.gen_range(0..4) {
            // quotients by the weights below are likely to round back unevenly
            0 => rng.gen_range(-20..=20) as f64 / [0.3, 0.7, 1.1][rng.gen_range(0..3)],
            1 => rng.gen_range(-20..=20) as f64 / 10.0,
            _ => rng.gen_range(-20.0..20.0),
        },
    };
    if depth == 0 {
        return TreeNode::leaf(value);
    }

    let weights: &[f64] = match arithmetic {
        Arithmetic::Exact => &[2.0, 3.0, 0.5, 0.0, -1.0],
        Arithmetic::Rounding => &[0.3, 0.7, 1.1, 2.5, 0.0, -0.3],
    };

    let branching = rng.gen_range(0..=max_branching);
    let children = (0..branching)
        .map(|index| {
            let node = random_tree(rng, depth - 1, max_branching, arithmetic);
            let edge = match rng.gen_range(0..2 * weights.len()) {
                pick if pick < weights.len() => TreeEdge::weighted(&index.to_string(), weights[pick], node),
                _ => TreeEdge::new(&index.to_string(), node),
            };

            match rng.gen_bool(0.1) {
                true => edge.keeping_turn(),
                false => edge,
            }
        })
        .collect();

    TreeNode::with_children(value, children)
}
