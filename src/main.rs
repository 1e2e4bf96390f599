use std::time::Instant;
use anyhow::{bail, Context};
use clap::Parser;
use itertools::Itertools;
use log::info;

use isolation_agent::core::agent::Agent;
use isolation_agent::core::board::Board;
use isolation_agent::core::search::SearchAlgorithm;
use isolation_agent::core::search::time::Deadline;
use isolation_agent::input::command_line::Cli;
use isolation_agent::input::game_tree::{read_game_tree, TreePosition};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let tree = read_game_tree(&cli.tree)
        .with_context(|| format!("could not load {}", cli.tree.display()))?;
    let root = TreePosition::root(&tree);

    info!(
        "loaded {} positions, root moves: {}",
        tree.size(),
        root.legal_moves().iter().map(|candidate| move_label(&root, candidate.game_move)).join(", "),
    );

    match cli.benchmark {
        true => run_benchmark(&cli, root),
        false => play_move(&cli, root),
    }
}

fn play_move(cli: &Cli, root: TreePosition) -> anyhow::Result<()> {
    let agent = Agent::with_algorithm(
        cli.search_depth,
        cli.evaluation.evaluator(),
        cli.algorithm,
        cli.search_config(),
    );
    let deadline = Deadline::after(cli.move_time());

    match agent.decide_move(&root, &root.legal_moves(), &deadline)? {
        Some((game_move, changes_role)) => {
            println!("bestmove {} changes_role {}", move_label(&root, game_move), changes_role)
        },
        None => println!("bestmove (none)"),
    }

    Ok(())
}

fn run_benchmark(cli: &Cli, root: TreePosition) -> anyhow::Result<()> {
    println!("Started benchmark");

    let evaluator = cli.evaluation.evaluator();
    let mut results = Vec::new();

    for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta] {
        let strategy = algorithm.strategy::<TreePosition>(cli.search_config());
        let deadline = Deadline::after(cli.move_time());

        let now = Instant::now();
        let result = strategy.search(&root, evaluator.as_ref(), cli.search_depth, &deadline)?;
        let duration = now.elapsed();

        println!(
            "{} value {} nodes {} time {} move {}",
            strategy.name(),
            result.backed_up,
            result.nodes_searched,
            duration.as_millis(),
            result.best_move.map_or("(none)", |game_move| move_label(&root, game_move)),
        );
        results.push(result);
    }

    if !results[0].same_decision(&results[1]) {
        bail!("minimax and alpha-beta disagree: {:?} vs {:?}", results[0], results[1]);
    }

    println!("Done");
    Ok(())
}

fn move_label<'a>(root: &TreePosition<'a>, game_move: usize) -> &'a str {
    root.label(game_move).unwrap_or("?")
}
