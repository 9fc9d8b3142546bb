use tracing::trace;

use crate::base::NodeId;
use crate::error::{ParaphraseError, Result};
use crate::graph::{Direction, ParaphraseGraph};

/// Fold `doomed` into `survivor`.
///
/// Every neighbour of `doomed` is rewired to `survivor` (unless it already is
/// a neighbour in that direction), the edges to `doomed` are dropped, all of
/// its tokens move to `survivor`, and `doomed` leaves the arena. An edge
/// between the two nodes themselves is dropped rather than turned into a
/// self-loop.
///
/// All neighbours of `doomed` are checked before anything is modified: a
/// dangling id, a one-sided edge or a self-loop fails with
/// [`ParaphraseError::GraphConsistency`] and leaves the graph untouched.
pub fn merge_nodes(graph: &mut ParaphraseGraph, survivor: &NodeId, doomed: &NodeId) -> Result<()> {
    if survivor == doomed {
        return Err(ParaphraseError::consistency(format!(
            "cannot merge node '{survivor}' into itself"
        )));
    }
    graph.node(survivor)?;
    for direction in [Direction::Incoming, Direction::Outgoing] {
        for neighbor in graph.node(doomed)?.neighbors(direction) {
            if neighbor == doomed {
                return Err(ParaphraseError::consistency(format!(
                    "merged node '{doomed}' has a self-loop"
                )));
            }
            let Some(other) = graph.get(neighbor) else {
                return Err(ParaphraseError::consistency(format!(
                    "{direction} node id '{neighbor}' of merged node '{doomed}' not in the graph"
                )));
            };
            if !other.neighbors(direction.reverse()).contains(doomed) {
                return Err(ParaphraseError::consistency(format!(
                    "{direction} node '{neighbor}' of merged node '{doomed}' does not list it back"
                )));
            }
        }
    }

    let doomed_node = graph
        .remove(doomed)
        .ok_or_else(|| ParaphraseError::unknown_node(doomed))?;
    trace!("Merging {} into '{}'", doomed_node, survivor);

    for direction in [Direction::Incoming, Direction::Outgoing] {
        let back = direction.reverse();
        for neighbor in doomed_node.neighbors(direction) {
            if neighbor == survivor {
                graph.node_mut(survivor)?.remove_neighbor(back, doomed)?;
                continue;
            }

            let other = graph.node_mut(neighbor)?;
            if !other.neighbors(back).contains(survivor) {
                other.add_neighbor(back, survivor.clone())?;
            }
            other.remove_neighbor(back, doomed)?;

            let kept = graph.node_mut(survivor)?;
            if !kept.neighbors(direction).contains(neighbor) {
                kept.add_neighbor(direction, neighbor.clone())?;
            }
        }
    }

    let kept = graph.node_mut(survivor)?;
    for token in doomed_node.into_tokens() {
        kept.add_token(token)?;
    }
    Ok(())
}
