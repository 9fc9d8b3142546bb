use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use super::{Direction, Node};
use crate::base::NodeId;
use crate::error::{ParaphraseError, Result};

/// Arena of live nodes keyed by id.
///
/// The map is the single owner of every [`Node`]; all cross references are
/// ids. Iteration follows creation order, and removal keeps the order of the
/// remaining nodes, so every scan over the graph is deterministic.
#[derive(Clone, Debug, Default)]
pub struct ParaphraseGraph {
    nodes: IndexMap<NodeId, Node>,
}

impl ParaphraseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges (each counted once, from its source).
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.outgoing().len()).sum()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Node at a position in creation order.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    /// Lookup that treats a missing node as a consistency error.
    pub fn node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| ParaphraseError::unknown_node(id))
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| ParaphraseError::unknown_node(id))
    }

    /// Iterate nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Insert a node under its own id. Fails if the id is already taken.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(node.id()) {
            return Err(ParaphraseError::consistency(format!(
                "node '{}' is already in the graph",
                node.id()
            )));
        }
        self.nodes.insert(node.id().clone(), node);
        Ok(())
    }

    /// Remove a node from the arena without touching its neighbours.
    ///
    /// Edges pointing at the removed node are left dangling; use the merge
    /// procedure for structural changes.
    pub fn remove(&mut self, id: &NodeId) -> Option<Node> {
        self.nodes.shift_remove(id)
    }

    /// Add the edge `from → to` on both endpoints.
    pub fn link(&mut self, from: &NodeId, to: &NodeId) -> Result<()> {
        if from == to {
            return Err(ParaphraseError::consistency(format!(
                "refusing to link node '{from}' to itself"
            )));
        }
        if !self.contains(to) {
            return Err(ParaphraseError::unknown_node(to));
        }
        self.node_mut(from)?.add_outgoing(to.clone())?;
        self.node_mut(to)?.add_incoming(from.clone())?;
        Ok(())
    }

    /// Ids of all other live nodes carrying `word`, in creation order.
    pub fn ids_with_word(&self, word: &str, except: &NodeId) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.id() != except && n.word() == word)
            .map(|n| n.id().clone())
            .collect()
    }

    /// Check the structural invariants: every referenced id is live, no
    /// node references itself, and every edge is recorded on both ends.
    pub fn validate(&self) -> Result<()> {
        for node in self.nodes.values() {
            for direction in [Direction::Incoming, Direction::Outgoing] {
                let mut seen = FxHashSet::default();
                for other in node.neighbors(direction) {
                    if !seen.insert(other) {
                        return Err(ParaphraseError::consistency(format!(
                            "node '{}' lists '{other}' twice as {direction}",
                            node.id()
                        )));
                    }
                    if other == node.id() {
                        return Err(ParaphraseError::consistency(format!(
                            "node '{}' has a self-loop",
                            node.id()
                        )));
                    }
                    let neighbor = self.nodes.get(other).ok_or_else(|| {
                        ParaphraseError::consistency(format!(
                            "{direction} node id '{other}' requested by node {node} not in the graph"
                        ))
                    })?;
                    if !neighbor.neighbors(direction.reverse()).contains(node.id()) {
                        return Err(ParaphraseError::consistency(format!(
                            "node '{}' lists '{other}' as {direction}, but '{other}' does not list it back",
                            node.id()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
