use std::fmt;

use smol_str::SmolStr;

use crate::base::{NodeId, Token};
use crate::error::{ParaphraseError, Result};

/// Which adjacency list of a node an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// The list on the other end of an edge.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Incoming => Direction::Outgoing,
            Direction::Outgoing => Direction::Incoming,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => f.write_str("incoming"),
            Direction::Outgoing => f.write_str("outgoing"),
        }
    }
}

/// A vertex of the paraphrase graph.
///
/// Owns every token that has collapsed onto it and lists its neighbours by
/// id. The representative word comes from the first token and never
/// changes. Neighbour lists keep insertion order so output is reproducible.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    word: SmolStr,
    tokens: Vec<Token>,
    incoming: Vec<NodeId>,
    outgoing: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, token: Token) -> Self {
        Self {
            id,
            word: token.word().clone(),
            tokens: vec![token],
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Representative word used for all chain comparisons.
    pub fn word(&self) -> &SmolStr {
        &self.word
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    /// Neighbour list for the given direction.
    pub fn neighbors(&self, direction: Direction) -> &[NodeId] {
        match direction {
            Direction::Incoming => &self.incoming,
            Direction::Outgoing => &self.outgoing,
        }
    }

    pub fn add_token(&mut self, token: Token) -> Result<()> {
        if self.tokens.contains(&token) {
            return Err(ParaphraseError::DuplicateToken {
                node: self.id.clone(),
                token: token.to_string(),
            });
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Remove a token and hand it back to the caller.
    pub fn remove_token(&mut self, token: &Token) -> Result<Token> {
        match self.tokens.iter().position(|t| t == token) {
            Some(index) => Ok(self.tokens.remove(index)),
            None => Err(ParaphraseError::TokenNotFound {
                node: self.id.clone(),
                token: token.to_string(),
            }),
        }
    }

    pub fn add_incoming(&mut self, id: NodeId) -> Result<()> {
        self.add_neighbor(Direction::Incoming, id)
    }

    pub fn add_outgoing(&mut self, id: NodeId) -> Result<()> {
        self.add_neighbor(Direction::Outgoing, id)
    }

    pub fn remove_incoming(&mut self, id: &NodeId) -> Result<()> {
        self.remove_neighbor(Direction::Incoming, id)
    }

    pub fn remove_outgoing(&mut self, id: &NodeId) -> Result<()> {
        self.remove_neighbor(Direction::Outgoing, id)
    }

    pub fn has_incoming(&self, id: &NodeId) -> bool {
        self.incoming.contains(id)
    }

    pub fn has_outgoing(&self, id: &NodeId) -> bool {
        self.outgoing.contains(id)
    }

    pub fn add_neighbor(&mut self, direction: Direction, id: NodeId) -> Result<()> {
        let list = self.list_mut(direction);
        if list.contains(&id) {
            return Err(ParaphraseError::DuplicateEdge {
                node: self.id.clone(),
                direction,
                other: id,
            });
        }
        list.push(id);
        Ok(())
    }

    pub fn remove_neighbor(&mut self, direction: Direction, id: &NodeId) -> Result<()> {
        let list = self.list_mut(direction);
        match list.iter().position(|n| n == id) {
            Some(index) => {
                list.remove(index);
                Ok(())
            }
            None => Err(ParaphraseError::EdgeNotFound {
                node: self.id.clone(),
                direction,
                other: id.clone(),
            }),
        }
    }

    /// True if any owned token opens a sentence.
    pub fn has_start_token(&self) -> bool {
        self.tokens.iter().any(Token::is_first)
    }

    /// True if any owned token closes a sentence.
    pub fn has_end_token(&self) -> bool {
        self.tokens.iter().any(Token::is_last)
    }

    /// Consume the node, yielding its tokens for transfer into a survivor.
    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn list_mut(&mut self, direction: Direction) -> &mut Vec<NodeId> {
        match direction {
            Direction::Incoming => &mut self.incoming,
            Direction::Outgoing => &mut self.outgoing,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        (&self.id, &self.word) == (&other.id, &other.word)
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |ids: &[NodeId]| {
            ids.iter()
                .map(NodeId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let tokens = self
            .tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "{} (W={}; T=[{}]; I=[{}]; O=[{}])",
            self.id,
            self.word,
            tokens,
            join(&self.incoming),
            join(&self.outgoing)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(sentence: usize, position: usize, word: &str) -> Node {
        Node::new(
            NodeId::for_token(sentence, position),
            Token::new(sentence, position, word, position == 0, false),
        )
    }

    #[test]
    fn test_new_takes_word_from_token() {
        let n = node(0, 0, "hello");
        assert_eq!(n.word(), "hello");
        assert_eq!(n.tokens().len(), 1);
        assert!(n.incoming().is_empty());
        assert!(n.outgoing().is_empty());
    }

    #[test]
    fn test_add_and_remove_tokens() {
        let mut n = node(0, 0, "a");
        n.add_token(Token::new(1, 0, "a", true, false)).unwrap();
        assert_eq!(n.tokens().len(), 2);

        let err = n.add_token(Token::new(1, 0, "a", true, false)).unwrap_err();
        assert!(matches!(err, ParaphraseError::DuplicateToken { .. }));

        let removed = n.remove_token(&Token::new(1, 0, "a", true, false)).unwrap();
        assert_eq!(removed.sentence(), 1);
        assert_eq!(n.tokens().len(), 1);

        let err = n.remove_token(&Token::new(5, 5, "a", false, false)).unwrap_err();
        assert!(matches!(err, ParaphraseError::TokenNotFound { .. }));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut n = node(0, 1, "b");
        n.add_incoming(NodeId::new("z")).unwrap();
        n.add_incoming(NodeId::new("a")).unwrap();
        n.add_outgoing(NodeId::new("m")).unwrap();
        assert_eq!(n.incoming(), &[NodeId::new("z"), NodeId::new("a")]);
        assert_eq!(n.neighbors(Direction::Outgoing), &[NodeId::new("m")]);
        assert!(n.has_incoming(&NodeId::new("a")));
        assert!(!n.has_outgoing(&NodeId::new("a")));
    }

    #[test]
    fn test_duplicate_and_missing_edges() {
        let mut n = node(0, 1, "b");
        n.add_outgoing(NodeId::new("c")).unwrap();

        let err = n.add_outgoing(NodeId::new("c")).unwrap_err();
        assert!(matches!(
            err,
            ParaphraseError::DuplicateEdge {
                direction: Direction::Outgoing,
                ..
            }
        ));

        let err = n.remove_incoming(&NodeId::new("c")).unwrap_err();
        assert!(matches!(
            err,
            ParaphraseError::EdgeNotFound {
                direction: Direction::Incoming,
                ..
            }
        ));

        n.remove_outgoing(&NodeId::new("c")).unwrap();
        assert!(n.outgoing().is_empty());
    }

    #[test]
    fn test_start_and_end_flags() {
        let mut n = Node::new(NodeId::new("n"), Token::new(0, 1, "x", false, false));
        assert!(!n.has_start_token());
        assert!(!n.has_end_token());

        n.add_token(Token::new(1, 2, "x", false, true)).unwrap();
        assert!(n.has_end_token());
        assert!(!n.has_start_token());

        n.add_token(Token::new(2, 0, "x", true, false)).unwrap();
        assert!(n.has_start_token());
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Incoming.reverse(), Direction::Outgoing);
        assert_eq!(Direction::Outgoing.reverse(), Direction::Incoming);
        assert_eq!(Direction::Incoming.to_string(), "incoming");
    }
}
