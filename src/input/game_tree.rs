//! A rule-free game: an explicit tree of positions, read from JSON or built in code.
//!
//! Every node carries a static value, every edge a label and an optional weight.
//! The player to move alternates along each edge unless the edge keeps the turn.

use std::fs;
use std::path::Path;
use serde::Deserialize;
use thiserror::Error;

use crate::core::board::{Board, CandidateMove};
use crate::core::evaluation::Evaluator;
use crate::core::score::Utility;

#[derive(Error, Debug)]
pub enum GameTreeError {
    #[error("failed to read game tree")]
    Io(#[from] std::io::Error),
    #[error("malformed game tree: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("move `{label}` has non-finite weight {weight}")]
    InvalidWeight {
        label: String,
        weight: f64,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TreeNode {
    pub value: f64,
    #[serde(default)]
    pub children: Vec<TreeEdge>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TreeEdge {
    pub label: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub keeps_turn: bool,
    pub node: TreeNode,
}

impl TreeNode {
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: f64, children: Vec<TreeEdge>) -> Self {
        Self { value, children }
    }

    /// Nodes in the subtree, this one included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|edge| edge.node.size()).sum::<usize>()
    }

    fn validate(&self) -> Result<(), GameTreeError> {
        for edge in self.children.iter() {
            if let Some(weight) = edge.weight.filter(|weight| !weight.is_finite()) {
                return Err(GameTreeError::InvalidWeight {
                    label: edge.label.clone(),
                    weight,
                });
            }
            edge.node.validate()?;
        }

        Ok(())
    }
}

impl TreeEdge {
    pub fn new(label: &str, node: TreeNode) -> Self {
        Self {
            label: label.to_string(),
            weight: None,
            keeps_turn: false,
            node,
        }
    }

    pub fn weighted(label: &str, weight: f64, node: TreeNode) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(label, node)
        }
    }

    pub fn keeping_turn(self) -> Self {
        Self {
            keeps_turn: true,
            ..self
        }
    }
}

pub fn parse_game_tree(json: &str) -> Result<TreeNode, GameTreeError> {
    let root: TreeNode = serde_json::from_str(json)?;
    root.validate()?;
    Ok(root)
}

pub fn read_game_tree(path: &Path) -> Result<TreeNode, GameTreeError> {
    parse_game_tree(&fs::read_to_string(path)?)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TreePlayer {
    First,
    Second,
}

impl TreePlayer {
    pub fn other(&self) -> TreePlayer {
        match self {
            TreePlayer::First => TreePlayer::Second,
            TreePlayer::Second => TreePlayer::First,
        }
    }
}

/// A position inside a borrowed tree. Moves are child indices.
#[derive(Copy, Clone, Debug)]
pub struct TreePosition<'a> {
    node: &'a TreeNode,
    active: TreePlayer,
}

impl<'a> TreePosition<'a> {
    pub fn root(tree: &'a TreeNode) -> Self {
        Self {
            node: tree,
            active: TreePlayer::First,
        }
    }

    pub fn value(&self) -> f64 {
        self.node.value
    }

    pub fn label(&self, game_move: usize) -> Option<&'a str> {
        self.node.children.get(game_move).map(|edge| edge.label.as_str())
    }
}

impl<'a> Board for TreePosition<'a> {
    type Move = usize;
    type Player = TreePlayer;

    fn legal_moves(&self) -> Vec<CandidateMove<usize>> {
        self.node.children.iter()
            .enumerate()
            .map(|(index, edge)| CandidateMove {
                game_move: index,
                weight: edge.weight,
            })
            .collect()
    }

    // A bare tree only knows the moves of the side to move.
    fn opponent_moves(&self) -> Vec<CandidateMove<usize>> {
        Vec::new()
    }

    /// Panics if `game_move` is not one of `legal_moves`.
    fn forecast_move(&self, game_move: &usize, mover: &TreePlayer) -> Self {
        let edge = &self.node.children[*game_move];

        Self {
            node: &edge.node,
            active: match edge.keeps_turn {
                true => *mover,
                false => mover.other(),
            },
        }
    }

    fn active_player(&self) -> TreePlayer {
        self.active
    }
}

/// Scores a tree position by its node's static value.
#[derive(Copy, Clone, Debug, Default)]
pub struct NodeValueEval;

impl<'a> Evaluator<TreePosition<'a>> for NodeValueEval {
    fn score(&self, board: &TreePosition<'a>, maximizing_player_turn: bool) -> Utility {
        match maximizing_player_turn {
            true => Utility::new(board.value()),
            false => -Utility::new(board.value()),
        }
    }
}
