//! Merge engine behaviour on whole inputs.
//!
//!   sentences → build_initial_graph → MergeEngine::run → checks

mod helpers;

use helpers::{assert_consistent, assert_tokens_conserved, id, node_words, sentences, word_edges};
use paraphrase::merge::{MergeEngine, merge_nodes};
use paraphrase::{ParaphraseError, build_initial_graph, build_paraphrase_graph, merge_to_fixpoint};
use rstest::rstest;

fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect()
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn shared_prefix_collapses() {
    let input = sentences(&["a b c", "a b d"]);
    let mut graph = build_initial_graph(&input).unwrap();
    assert_eq!(graph.len(), 6);

    let report = merge_to_fixpoint(&mut graph).unwrap();

    assert_eq!(report.initial_nodes, 6);
    assert_eq!(report.final_nodes, 4);
    assert_eq!(report.incoming_merges, 2);
    assert_eq!(node_words(&graph), vec!["a", "b", "c", "d"]);
    assert_eq!(word_edges(&graph), pairs(&[("a", "b"), ("b", "c"), ("b", "d")]));
    assert_eq!(graph.get(&id(0, 0)).unwrap().tokens().len(), 2);
    assert_eq!(graph.get(&id(0, 1)).unwrap().tokens().len(), 2);
    assert_consistent(&graph);
}

#[test]
fn shared_final_word_converges() {
    let input = sentences(&["x y", "z y"]);
    let mut graph = build_initial_graph(&input).unwrap();

    let report = merge_to_fixpoint(&mut graph).unwrap();

    assert_eq!(report.incoming_merges, 0);
    assert_eq!(report.outgoing_merges, 1);
    assert_eq!(node_words(&graph), vec!["x", "y", "z"]);
    assert_eq!(word_edges(&graph), pairs(&[("x", "y"), ("z", "y")]));
    let y = graph.get(&id(0, 1)).unwrap();
    assert!(y.has_end_token());
    assert!(!y.has_start_token());
    assert!(!graph.contains(&id(1, 1)));
}

#[test]
fn identical_sentences_become_one_path() {
    let graph = build_paraphrase_graph(&sentences(&["the cat sat", "the cat sat"])).unwrap();
    assert_eq!(node_words(&graph), vec!["the", "cat", "sat"]);
    assert_eq!(word_edges(&graph), pairs(&[("the", "cat"), ("cat", "sat")]));
    assert_tokens_conserved(&graph, 6);
}

// ============================================================================
// Invariants
// ============================================================================

#[rstest]
#[case(&["a b c", "a b d"])]
#[case(&["x y", "z y"])]
#[case(&["the cat saw the dog", "the dog saw the cat"])]
#[case(&["a b a b", "b a b a", "a"])]
#[case(&["one", "one", "one two", "two one"])]
#[case(&["he went home", "he went back home", "she went home", "he walked home"])]
#[case(&["a", "b", "c"])]
fn merge_preserves_invariants(#[case] lines: &[&str]) {
    let input = sentences(lines);
    let token_count: usize = input.iter().map(Vec::len).sum();
    let mut graph = build_initial_graph(&input).unwrap();
    assert_eq!(graph.len(), token_count);

    let report = merge_to_fixpoint(&mut graph).unwrap();

    assert!(report.final_nodes <= report.initial_nodes);
    assert_eq!(report.initial_nodes - report.final_nodes, report.merges());
    assert_eq!(graph.len(), report.final_nodes);
    assert_consistent(&graph);
    assert_tokens_conserved(&graph, token_count);
}

#[rstest]
#[case(&["a b c", "a b d"])]
#[case(&["the cat saw the dog", "the dog saw the cat"])]
#[case(&["he went home", "he went back home", "she went home"])]
fn merge_is_idempotent(#[case] lines: &[&str]) {
    let mut graph = build_paraphrase_graph(&sentences(lines)).unwrap();
    let before_words = node_words(&graph);
    let before_edges = word_edges(&graph);

    let report = merge_to_fixpoint(&mut graph).unwrap();

    assert_eq!(report.merges(), 0);
    assert_eq!(report.passes, 1);
    assert_eq!(node_words(&graph), before_words);
    assert_eq!(word_edges(&graph), before_edges);
}

#[test]
fn every_merge_shrinks_the_graph() {
    let mut graph =
        build_initial_graph(&sentences(&["he went home", "he went back home", "she went home"]))
            .unwrap();
    let mut engine = MergeEngine::new();

    while let Some(event) = engine.find_merge(&graph).unwrap() {
        let before = graph.len();
        merge_nodes(&mut graph, &event.survivor, &event.doomed).unwrap();
        assert_eq!(graph.len(), before - 1);
        assert_consistent(&graph);
    }
}

#[test]
fn output_is_reproducible() {
    let input = sentences(&["the cat saw the dog", "the dog saw the cat", "a cat saw a dog"]);
    let first = build_paraphrase_graph(&input).unwrap();
    let second = build_paraphrase_graph(&input).unwrap();

    let ids = |graph: &paraphrase::ParaphraseGraph| {
        graph.node_ids().map(|id| id.to_string()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(word_edges(&first), word_edges(&second));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn empty_input_is_rejected() {
    let input: Vec<Vec<String>> = Vec::new();
    assert!(matches!(
        build_paraphrase_graph(&input),
        Err(ParaphraseError::EmptyInput)
    ));
}

#[test]
fn dangling_reference_aborts_the_run() {
    let mut graph = build_initial_graph(&sentences(&["a b", "a c"])).unwrap();
    // Drop a node without rewiring its neighbours.
    graph.remove(&id(0, 1)).unwrap();

    let err = merge_to_fixpoint(&mut graph).unwrap_err();
    assert!(matches!(err, ParaphraseError::GraphConsistency(_)), "{err}");
    assert!(err.is_invariant_violation());
}
