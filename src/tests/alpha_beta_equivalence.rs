use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::core::search::search_result::SearchResult;
use crate::core::search::SearchAlgorithm;
use crate::input::game_tree::parse_game_tree;
use crate::tests::{Arithmetic, random_tree, search_tree, WEIGHTED_TREE};

// Tests whether the pruned search finds the same move and value as plain minimax

const MAX_DEPTH: u32 = 5;

fn check_random_trees(seed: u64, arithmetic: Arithmetic) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut failed_trees = vec![];
    for tree_index in 0..300 {
        let tree = random_tree(&mut rng, MAX_DEPTH, 4, arithmetic);

        for depth in 0..=MAX_DEPTH {
            let expected = search_tree(SearchAlgorithm::Minimax, &tree, depth);
            let actual = search_tree(SearchAlgorithm::AlphaBeta, &tree, depth);

            if !expected.same_decision(&actual) || actual.nodes_searched > expected.nodes_searched {
                failed_trees.push((format!("tree {tree_index} depth {depth}"), expected, actual));
            }
        }
    }

    let some_failed_trees = failed_trees.len() > 0;
    for (id, expected, actual) in failed_trees {
        log_dissimilar_answers(&id, &expected, &actual);
    }

    if some_failed_trees {
        bail!("Failed some trees");
    }
    Ok(())
}

#[test]
fn check_exact_random_trees() -> Result<()> {
    check_random_trees(0x5eed, Arithmetic::Exact)
}

#[test]
fn check_rounding_random_trees() -> Result<()> {
    check_random_trees(0xf10a7, Arithmetic::Rounding)
}

#[test]
fn check_weighted_tree() -> Result<()> {
    let tree = parse_game_tree(WEIGHTED_TREE)?;

    for depth in 0..=4 {
        let expected = search_tree(SearchAlgorithm::Minimax, &tree, depth);
        let actual = search_tree(SearchAlgorithm::AlphaBeta, &tree, depth);

        if !expected.same_decision(&actual) {
            log_dissimilar_answers(&format!("depth {depth}"), &expected, &actual);
            bail!("Failed weighted tree");
        }
    }
    Ok(())
}

#[test]
fn check_pruning_saves_nodes() {
    let mut rng = StdRng::seed_from_u64(7);

    let (minimax_nodes, alpha_beta_nodes) = (0..50)
        .map(|_| random_tree(&mut rng, 4, 4, Arithmetic::Exact))
        .map(|tree| (
            search_tree(SearchAlgorithm::Minimax, &tree, 4).nodes_searched,
            search_tree(SearchAlgorithm::AlphaBeta, &tree, 4).nodes_searched,
        ))
        .fold((0, 0), |(total_minimax, total_alpha_beta), (minimax, alpha_beta)| {
            (total_minimax + minimax, total_alpha_beta + alpha_beta)
        });

    println!("minimax nodes searched: {minimax_nodes}");
    println!("alpha beta nodes searched: {alpha_beta_nodes}");
    assert!(alpha_beta_nodes < minimax_nodes);
}

fn log_dissimilar_answers(id: &str, expected: &SearchResult<usize>, actual: &SearchResult<usize>) {
    println!("Failed {id}, (expected {expected:?}, got {actual:?})");
}
