//! Error types for graph construction, merging and export.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::NodeId;
use crate::graph::Direction;

/// Errors that can occur while building, merging or exporting a paraphrase graph.
///
/// Every variant is fatal for the current run. The node and token variants
/// signal a broken invariant inside the merge procedure and are never
/// expected on well-formed input.
#[derive(Debug, Error)]
pub enum ParaphraseError {
    /// A token was bound to a node a second time.
    #[error("Token {token} is already bound to node '{node}'")]
    AlreadyAssigned { token: String, node: NodeId },

    /// A token was added to a node that already owns it.
    #[error("Token {token} is already associated with node '{node}'")]
    DuplicateToken { node: NodeId, token: String },

    /// A token was removed from a node that does not own it.
    #[error("Token {token} is not associated with node '{node}'")]
    TokenNotFound { node: NodeId, token: String },

    /// An adjacency entry was added twice.
    #[error("Node '{other}' is already linked to node '{node}' with {direction} relation")]
    DuplicateEdge {
        node: NodeId,
        direction: Direction,
        other: NodeId,
    },

    /// An adjacency entry was removed but never existed.
    #[error("Node '{other}' is not linked to node '{node}' with {direction} relation")]
    EdgeNotFound {
        node: NodeId,
        direction: Direction,
        other: NodeId,
    },

    /// Dangling, asymmetric or self-referencing adjacency.
    #[error("Graph consistency error: {0}")]
    GraphConsistency(String),

    /// No sentences were supplied.
    #[error("No sentences to build a graph from")]
    EmptyInput,

    /// The sentence file does not exist.
    #[error("Input file '{}' not available", path.display())]
    InputNotFound { path: PathBuf },

    /// The configuration file does not exist.
    #[error("Config file '{}' not available", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration could not be parsed or holds invalid values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for operations that may fail with [`ParaphraseError`].
pub type Result<T> = std::result::Result<T, ParaphraseError>;

impl ParaphraseError {
    /// Create a graph consistency error.
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::GraphConsistency(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an error for a node id that is not in the graph.
    pub fn unknown_node(id: &NodeId) -> Self {
        Self::GraphConsistency(format!("node '{id}' is not in the graph"))
    }

    /// True for the variants that indicate a broken graph invariant.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::AlreadyAssigned { .. }
                | Self::DuplicateToken { .. }
                | Self::TokenNotFound { .. }
                | Self::DuplicateEdge { .. }
                | Self::EdgeNotFound { .. }
                | Self::GraphConsistency(_)
        )
    }
}
