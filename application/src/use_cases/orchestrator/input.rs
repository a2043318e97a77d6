//! Inputs of the two entry protocols.

use qna_domain::{ConversationId, ConversationTurn, DomainError, PostDraft, Question};

/// Single-shot request: generate, and optionally publish, in one call.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub turn: ConversationTurn,
    pub wants_to_post: bool,
    pub draft: Option<PostDraft>,
}

impl ChatInput {
    /// Generation only.
    pub fn new(turn: ConversationTurn) -> Self {
        Self {
            turn,
            wants_to_post: false,
            draft: None,
        }
    }

    pub fn with_publish_intent(mut self, wants_to_post: bool, draft: Option<PostDraft>) -> Self {
        self.wants_to_post = wants_to_post;
        self.draft = draft;
        self
    }

    /// The validated draft to publish, or `None` when nothing is published.
    ///
    /// Publish intent without a draft is a validation error. A draft sent
    /// without publish intent is ignored.
    pub(crate) fn publish_draft(&self) -> Result<Option<PostDraft>, DomainError> {
        match (self.wants_to_post, &self.draft) {
            (false, _) => Ok(None),
            (true, None) => Err(DomainError::MissingPostData),
            (true, Some(draft)) => draft.clone().validate().map(Some),
        }
    }
}

/// Second half of the split flow: publish the answer cached by `ask`.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub id: ConversationId,
    pub question: Question,
    pub draft: PostDraft,
}

impl PostInput {
    pub fn new(id: ConversationId, question: Question, draft: PostDraft) -> Self {
        Self { id, question, draft }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::draft;

    fn turn() -> ConversationTurn {
        ConversationTurn::parse("c1", "What is log aggregation?").unwrap()
    }

    #[test]
    fn test_no_intent_ignores_draft() {
        let mut bad = draft();
        bad.title = String::new();
        let input = ChatInput::new(turn()).with_publish_intent(false, Some(bad));
        assert_eq!(input.publish_draft(), Ok(None));
    }

    #[test]
    fn test_intent_without_draft_is_invalid() {
        let input = ChatInput::new(turn()).with_publish_intent(true, None);
        assert_eq!(input.publish_draft(), Err(DomainError::MissingPostData));
    }

    #[test]
    fn test_intent_validates_draft() {
        let mut anonymous = draft();
        anonymous.is_anonymous = true;
        anonymous.author_name = None;
        let input = ChatInput::new(turn()).with_publish_intent(true, Some(anonymous));
        assert!(input.publish_draft().unwrap().is_some());
    }
}
