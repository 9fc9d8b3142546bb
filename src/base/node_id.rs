use std::sync::Arc;

/// Unique identifier for a node in the paraphrase graph.
///
/// Used as the arena key and as the value stored in adjacency lists, so
/// nodes never hold references to each other. Also written verbatim as the
/// `id` attribute of GraphML vertices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create a new node ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Deterministic ID of the node created for a token during the initial
    /// build.
    pub fn for_token(sentence: usize, position: usize) -> Self {
        Self(format!("id_s{sentence}_t{position}_node").into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_token_is_deterministic() {
        assert_eq!(NodeId::for_token(3, 7).as_str(), "id_s3_t7_node");
        assert_eq!(NodeId::for_token(3, 7), NodeId::for_token(3, 7));
        assert_ne!(NodeId::for_token(3, 7), NodeId::for_token(7, 3));
    }

    #[test]
    fn test_conversions() {
        let id: NodeId = "n1".into();
        assert_eq!(id.to_string(), "n1");
        assert_eq!(NodeId::from(String::from("n1")), id);
    }
}
