//! Shared graph fixtures and assertions for integration tests.

#![allow(dead_code)]

use paraphrase::{Direction, NodeId, ParaphraseGraph};

/// Split space separated lines into word lists.
pub fn sentences(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Outgoing edges as `(source word, target word)` pairs in output order.
pub fn word_edges(graph: &ParaphraseGraph) -> Vec<(String, String)> {
    graph
        .iter()
        .flat_map(|node| {
            node.outgoing().iter().map(move |target| {
                let target = graph.get(target).expect("edge target should be live");
                (node.word().to_string(), target.word().to_string())
            })
        })
        .collect()
}

/// Words of the live nodes in creation order.
pub fn node_words(graph: &ParaphraseGraph) -> Vec<String> {
    graph.iter().map(|node| node.word().to_string()).collect()
}

/// Assert adjacency is symmetric, free of self-loops and has no dangling ids.
pub fn assert_consistent(graph: &ParaphraseGraph) {
    for node in graph.iter() {
        for direction in [Direction::Incoming, Direction::Outgoing] {
            for other in node.neighbors(direction) {
                assert_ne!(other, node.id(), "self-loop on {}", node.id());
                let other_node = graph
                    .get(other)
                    .unwrap_or_else(|| panic!("dangling {direction} id '{other}' on {}", node.id()));
                assert!(
                    other_node.neighbors(direction.reverse()).contains(node.id()),
                    "'{other}' does not list '{}' back",
                    node.id()
                );
            }
        }
    }
    graph.validate().expect("graph should validate");
}

/// Assert every token is owned by exactly one node with the same word.
pub fn assert_tokens_conserved(graph: &ParaphraseGraph, expected_tokens: usize) {
    let mut seen = 0;
    for node in graph.iter() {
        assert!(!node.tokens().is_empty(), "node {} owns no token", node.id());
        for token in node.tokens() {
            assert_eq!(token.word(), node.word());
            seen += 1;
        }
    }
    assert_eq!(seen, expected_tokens);
}

pub fn id(sentence: usize, position: usize) -> NodeId {
    NodeId::for_token(sentence, position)
}
