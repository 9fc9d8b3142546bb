use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::NodeId;
use crate::error::{ParaphraseError, Result};
use crate::graph::{Direction, ParaphraseGraph};

/// Sequence of representative words along a simple path.
pub type Chain = Vec<SmolStr>;

/// Word chain of `start` in the given direction.
///
/// The walk begins at `start` itself and repeatedly follows the first
/// neighbour in `direction` until it reaches a node without one, or a node
/// it has already visited. Incoming chains are returned in sentence order
/// (chain start first, `start` last); outgoing chains begin at `start`.
pub fn word_chain(graph: &ParaphraseGraph, start: &NodeId, direction: Direction) -> Result<Chain> {
    let mut chain = Chain::new();
    let mut visited = FxHashSet::default();
    let mut current = graph.node(start)?;

    loop {
        visited.insert(current.id().clone());
        chain.push(current.word().clone());

        let Some(next) = current.neighbors(direction).first() else {
            break;
        };
        if visited.contains(next) {
            break;
        }
        current = graph.get(next).ok_or_else(|| {
            ParaphraseError::consistency(format!(
                "{direction} node id '{next}' requested by node '{}' not in the graph",
                current.id()
            ))
        })?;
    }

    if direction == Direction::Incoming {
        chain.reverse();
    }
    Ok(chain)
}
