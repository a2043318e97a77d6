//! Conversation identity and turns.
//!
//! A [`ConversationId`] correlates an `ask` call with its later `post` call;
//! a [`ConversationTurn`] is one question asked under that id.

use crate::core::{error::DomainError, question::Question};
use serde::{Deserialize, Serialize};

/// Opaque, caller-supplied conversation identifier.
///
/// Must be stable across the ask/post split. The only rule is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyConversationId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ConversationId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ConversationId::new(s)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

/// One question asked within a conversation.
///
/// Created per client request and never persisted beyond the cache entry it
/// produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub id: ConversationId,
    pub question: Question,
    /// Force the generator down its deterministic failure path.
    pub simulate_error: bool,
}

impl ConversationTurn {
    pub fn new(id: ConversationId, question: Question) -> Self {
        Self {
            id,
            question,
            simulate_error: false,
        }
    }

    /// Build a turn from raw request fields, validating both.
    pub fn parse(id: impl Into<String>, question: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::new(ConversationId::new(id)?, Question::new(question)?))
    }

    pub fn with_simulated_error(mut self, simulate: bool) -> Self {
        self.simulate_error = simulate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_rejects_blank() {
        assert_eq!(ConversationId::new(""), Err(DomainError::EmptyConversationId));
        assert_eq!(ConversationId::new("   "), Err(DomainError::EmptyConversationId));
        assert_eq!(ConversationId::new("c1").unwrap().as_str(), "c1");
    }

    #[test]
    fn test_turn_parse_validates_question() {
        let err = ConversationTurn::parse("c1", "").unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestion);
    }

    #[test]
    fn test_turn_defaults_to_no_simulation() {
        let turn = ConversationTurn::parse("c1", "What is log aggregation?").unwrap();
        assert!(!turn.simulate_error);
        assert!(turn.with_simulated_error(true).simulate_error);
    }
}
