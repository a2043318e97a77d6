//! Domain error types

use thiserror::Error;

/// Domain-level validation errors.
///
/// Every variant is raised at the boundary, before any external call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Conversation id cannot be empty")]
    EmptyConversationId,

    #[error("Post data is required when publishing is requested")]
    MissingPostData,

    #[error("Post title cannot be empty")]
    EmptyTitle,

    #[error("Post password cannot be empty")]
    EmptyPassword,

    #[error("Author name is required unless the post is anonymous")]
    MissingAuthorName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl DomainError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::EmptyQuestion => "originalQuestion",
            DomainError::EmptyConversationId => "conversationId",
            DomainError::MissingPostData => "postData",
            DomainError::EmptyTitle => "postData.title",
            DomainError::EmptyPassword => "postData.password",
            DomainError::MissingAuthorName => "postData.authorName",
            DomainError::InvalidEmail(_) => "postData.email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::MissingAuthorName.to_string(),
            "Author name is required unless the post is anonymous"
        );
        assert_eq!(
            DomainError::InvalidEmail("nope".to_string()).to_string(),
            "Invalid email address: nope"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(DomainError::MissingPostData.field(), "postData");
        assert_eq!(DomainError::EmptyQuestion.field(), "originalQuestion");
    }
}
