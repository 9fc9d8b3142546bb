use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use super::NodeId;
use crate::error::{ParaphraseError, Result};

/// One word occurrence at a specific position of a specific sentence.
///
/// Tokens are created once per (sentence, position) and are immutable apart
/// from [`Token::bind`], which records the node the token was created for.
/// After merges the token may be owned by a different node than the one it
/// was bound to; the binding is never rewritten.
///
/// Equality and hashing only consider `(sentence, position)`.
#[derive(Clone, Debug)]
pub struct Token {
    sentence: usize,
    position: usize,
    word: SmolStr,
    is_first: bool,
    is_last: bool,
    node_id: Option<NodeId>,
}

impl Token {
    pub fn new(
        sentence: usize,
        position: usize,
        word: impl Into<SmolStr>,
        is_first: bool,
        is_last: bool,
    ) -> Self {
        Self {
            sentence,
            position,
            word: word.into(),
            is_first,
            is_last,
            node_id: None,
        }
    }

    /// Split one sentence into tokens, flagging its first and last word.
    pub fn from_sentence<W: AsRef<str>>(sentence: usize, words: &[W]) -> Vec<Token> {
        let last = words.len().saturating_sub(1);
        words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                Token::new(sentence, position, word.as_ref(), position == 0, position == last)
            })
            .collect()
    }

    /// Sentence index within the input collection.
    pub fn sentence(&self) -> usize {
        self.sentence
    }

    /// Token index within the sentence.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn word(&self) -> &SmolStr {
        &self.word
    }

    /// Whether the token is the first one of its sentence.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Whether the token is the last one of its sentence.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// The node this token was created for, if bound. Not updated when the
    /// token moves to a merge survivor.
    pub fn node_id(&self) -> Option<&NodeId> {
        self.node_id.as_ref()
    }

    /// Bind the token to its node. Fails with `AlreadyAssigned` if the token
    /// is already bound.
    pub fn bind(&mut self, node_id: NodeId) -> Result<()> {
        if let Some(existing) = &self.node_id {
            return Err(ParaphraseError::AlreadyAssigned {
                token: self.to_string(),
                node: existing.clone(),
            });
        }
        self.node_id = Some(node_id);
        Ok(())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        (self.sentence, self.position) == (other.sentence, other.position)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sentence.hash(state);
        self.position.hash(state);
    }
}

/// `word (sentence/position role)`, followed by the creation node once bound.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match (self.is_first, self.is_last) {
            (true, true) => "FL",
            (true, false) => "F",
            (false, true) => "L",
            (false, false) => "M",
        };
        write!(
            f,
            "{} ({}/{} {})",
            self.word, self.sentence, self.position, role
        )?;
        if let Some(node_id) = &self.node_id {
            write!(f, " created in {node_id}")?;
        }
        Ok(())
    }
}
