//! Word automaton: the simple transition graph over distinct words.
//!
//! Every distinct word becomes one vertex and every pair of consecutive words
//! in a sentence becomes one edge, so unlike the paraphrase graph no chain
//! history is kept and the input sentences cannot be read back from it.

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::error::{ParaphraseError, Result};
use crate::interchange::{RenderEdge, RenderGraph, RenderVertex};

/// Vertex id of a word in the automaton.
pub fn word_vertex_id(word: &str) -> String {
    format!("id_{word}")
}

/// Build the word automaton of the given sentences.
///
/// Vertices appear in order of first occurrence. A vertex is marked as a
/// start (end) vertex when its word opens (closes) any sentence. Edges are
/// kept per sentence, so a transition seen in two sentences yields two
/// parallel edges.
pub fn build_automaton<W: AsRef<str>>(sentences: &[Vec<W>]) -> Result<RenderGraph> {
    if sentences.is_empty() {
        return Err(ParaphraseError::EmptyInput);
    }

    let mut vertices: IndexMap<SmolStr, RenderVertex> = IndexMap::new();
    let mut edges = Vec::new();

    for (sentence, words) in sentences.iter().enumerate() {
        let last = words.len().saturating_sub(1);
        for (position, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let vertex = vertices
                .entry(SmolStr::new(word))
                .or_insert_with(|| RenderVertex::new(word_vertex_id(word), word));
            vertex.is_start |= position == 0;
            vertex.is_end |= position == last;
        }
        for (position, pair) in words.windows(2).enumerate() {
            edges.push(RenderEdge {
                id: format!("id_s{sentence}_f{position}_t{}", position + 1),
                source: word_vertex_id(pair[0].as_ref()),
                target: word_vertex_id(pair[1].as_ref()),
            });
        }
    }

    debug!(
        "Built automaton with {} vertices and {} edges",
        vertices.len(),
        edges.len()
    );
    Ok(RenderGraph {
        vertices: vertices.into_values().collect(),
        edges,
    })
}
