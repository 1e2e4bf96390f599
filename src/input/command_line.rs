/// Parsing for the command line at startup

use std::path::PathBuf;
use std::time::Duration;
use clap::{Parser, ValueEnum};

use crate::core::agent::DEFAULT_SEARCH_DEPTH;
use crate::core::evaluation::{Evaluator, MobilityDifferenceEval, OpenMoveEval};
use crate::core::search::{SearchAlgorithm, SearchConfig};
use crate::input::game_tree::{NodeValueEval, TreePosition};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum EvaluationKind {
    NodeValue,
    OpenMove,
    MobilityDifference,
}

impl EvaluationKind {
    pub fn evaluator<'a>(self) -> Box<dyn Evaluator<TreePosition<'a>>> {
        match self {
            EvaluationKind::NodeValue => Box::new(NodeValueEval),
            EvaluationKind::OpenMove => Box::new(OpenMoveEval),
            EvaluationKind::MobilityDifference => Box::new(MobilityDifferenceEval),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version)]
#[command(about = "Picks a move in a JSON game tree with a depth-limited adversarial search.")]
pub struct Cli {
    /// The game tree to search.
    #[arg(short, long)]
    pub tree: PathBuf,

    /// The depth to search to.
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub search_depth: u32,

    /// Which search algorithm will be used.
    #[arg(short, long, value_enum, default_value = "alpha-beta")]
    pub algorithm: SearchAlgorithm,

    /// How leaf positions are scored.
    #[arg(short, long, value_enum, default_value = "node-value")]
    pub evaluation: EvaluationKind,

    /// Time budget for the move, in ms.
    #[arg(short, long, default_value_t = 5000)]
    pub move_time: u64,

    /// Stop expanding once less than this many ms are left.
    #[arg(long, default_value_t = 5)]
    pub time_margin: u64,

    /// Run both algorithms and compare them instead of picking a move.
    #[arg(short, long)]
    pub benchmark: bool,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            time_margin: Duration::from_millis(self.time_margin),
            ..SearchConfig::default()
        }
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use clap::Parser;
    use crate::core::search::SearchAlgorithm;
    use super::{Cli, EvaluationKind};

    #[test]
    fn check_defaults() {
        let cli = Cli::parse_from(["isolation_agent", "--tree", "tree.json"]);

        assert_eq!(cli.search_depth, 3);
        assert_eq!(cli.algorithm, SearchAlgorithm::AlphaBeta);
        assert_eq!(cli.evaluation, EvaluationKind::NodeValue);
        assert_eq!(cli.move_time(), Duration::from_secs(5));
        assert_eq!(cli.search_config().time_margin, Duration::from_millis(5));
        assert!(!cli.benchmark);
    }

    #[test]
    fn check_explicit_options() {
        let cli = Cli::parse_from([
            "isolation_agent", "-t", "tree.json", "-s", "5", "-a", "minimax",
            "-e", "mobility-difference", "--time-margin", "20", "-b",
        ]);

        assert_eq!(cli.search_depth, 5);
        assert_eq!(cli.algorithm, SearchAlgorithm::Minimax);
        assert_eq!(cli.evaluation, EvaluationKind::MobilityDifference);
        assert_eq!(cli.search_config().time_margin, Duration::from_millis(20));
        assert!(cli.benchmark);
    }

    #[test]
    fn check_missing_tree_rejected() {
        assert!(Cli::try_parse_from(["isolation_agent"]).is_err());
    }
}
