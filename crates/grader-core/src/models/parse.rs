//! Dependency-parse contract consumed by the bias analyzer.

use serde::{Deserialize, Serialize};

/// Dependency role of a token relative to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepRole {
    /// Sentence root; its head is itself.
    Root,
    /// Nominal subject of its head verb.
    Subject,
    /// Object of its head verb or preposition.
    Object,
    /// Possessive modifier of its head noun.
    Possessive,
    /// Determiner or other pre-nominal modifier.
    Modifier,
    /// Clausal complement of its head verb.
    Complement,
    /// Verb coordinated with its head verb.
    Conjunct,
    Punct,
    Other,
}

/// One token of parsed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub dep: DepRole,
    /// Index of the head token. Equal to the token's own index for a root.
    pub head: usize,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        self.dep == DepRole::Punct
    }
}

/// Half-open token range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// A named person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub span: Span,
}

/// Tokens, person entities, and noun-phrase chunks of a text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedText {
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
    pub noun_chunks: Vec<Span>,
}

impl ParsedText {
    /// Ancestors of `index`, nearest first. Stops at a root or on a malformed cycle.
    pub fn ancestors(&self, index: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = index;
        while let Some(token) = self.tokens.get(current) {
            if token.head == current || chain.len() >= self.tokens.len() {
                break;
            }
            current = token.head;
            chain.push(current);
        }
        chain
    }

    /// Direct children of `index`, in token order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| *i != index && t.head == index)
            .map(|(i, _)| i)
    }

    /// The entity whose span covers `index`.
    pub fn entity_at(&self, index: usize) -> Option<&EntitySpan> {
        self.entities.iter().find(|e| e.span.contains(index))
    }
}
