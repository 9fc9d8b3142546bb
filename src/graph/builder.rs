//! Initial per-sentence chain graph.

use tracing::debug;

use super::{Node, ParaphraseGraph};
use crate::base::{NodeId, Token};
use crate::error::{ParaphraseError, Result};

/// Turn sentences into tokens, one `Vec<Token>` per sentence.
pub fn decompose<W: AsRef<str>>(sentences: &[Vec<W>]) -> Vec<Vec<Token>> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, words)| Token::from_sentence(index, words))
        .collect()
}

/// Build the unmerged graph: one node per token, linked in sentence order.
///
/// Node ids are derived from (sentence, position), so the same input always
/// yields the same graph. No edges cross sentence boundaries. An empty
/// sentence list is rejected with [`ParaphraseError::EmptyInput`]; an empty
/// sentence simply contributes no nodes.
pub fn build_initial_graph<W: AsRef<str>>(sentences: &[Vec<W>]) -> Result<ParaphraseGraph> {
    if sentences.is_empty() {
        return Err(ParaphraseError::EmptyInput);
    }

    let mut graph = ParaphraseGraph::new();
    for tokens in decompose(sentences) {
        let mut previous: Option<NodeId> = None;
        for mut token in tokens {
            let id = NodeId::for_token(token.sentence(), token.position());
            token.bind(id.clone())?;
            graph.insert(Node::new(id.clone(), token))?;
            if let Some(prev) = previous.take() {
                graph.link(&prev, &id)?;
            }
            previous = Some(id);
        }
    }

    debug!(
        "Built initial graph with {} nodes and {} edges from {} sentences",
        graph.len(),
        graph.edge_count(),
        sentences.len()
    );
    Ok(graph)
}
