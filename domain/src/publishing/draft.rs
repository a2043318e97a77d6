//! Post draft value object and its validation rules.

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static email pattern")
});

/// Everything needed to publish a post, except its content.
///
/// The content is always the original question and is supplied at publish
/// time. The password is opaque and forwarded to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub password: String,
    pub is_anonymous: bool,
    pub is_private: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl PostDraft {
    /// Check the draft invariants and normalize optional fields.
    ///
    /// A blank email is treated as absent. A blank author name is dropped
    /// for anonymous posts and rejected otherwise.
    pub fn validate(mut self) -> Result<Self, DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if self.password.is_empty() {
            return Err(DomainError::EmptyPassword);
        }

        self.author_name = self.author_name.filter(|n| !n.trim().is_empty());
        if !self.is_anonymous && self.author_name.is_none() {
            return Err(DomainError::MissingAuthorName);
        }

        self.email = match self.email {
            Some(email) if email.trim().is_empty() => None,
            Some(email) if EMAIL_PATTERN.is_match(&email) => Some(email),
            Some(email) => return Err(DomainError::InvalidEmail(email)),
            None => None,
        };

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Log aggregation".to_string(),
            password: "secret".to_string(),
            is_anonymous: false,
            is_private: false,
            author_name: Some("Dana".to_string()),
            email: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_author_required_unless_anonymous() {
        let mut d = draft();
        d.author_name = Some("  ".to_string());
        assert_eq!(d.clone().validate(), Err(DomainError::MissingAuthorName));

        d.is_anonymous = true;
        let validated = d.validate().unwrap();
        assert_eq!(validated.author_name, None);
    }

    #[test]
    fn test_blank_title_and_password_rejected() {
        let mut d = draft();
        d.title = " ".to_string();
        assert_eq!(d.validate(), Err(DomainError::EmptyTitle));

        let mut d = draft();
        d.password = String::new();
        assert_eq!(d.validate(), Err(DomainError::EmptyPassword));
    }

    #[test]
    fn test_email_rules() {
        let mut d = draft();
        d.email = Some("   ".to_string());
        assert_eq!(d.validate().unwrap().email, None);

        let mut d = draft();
        d.email = Some("dana@example.com".to_string());
        assert_eq!(d.validate().unwrap().email.as_deref(), Some("dana@example.com"));

        let mut d = draft();
        d.email = Some("dana@example".to_string());
        assert!(matches!(d.validate(), Err(DomainError::InvalidEmail(_))));
    }

    #[test]
    fn test_draft_deserializes_camel_case() {
        let json = r#"{"title":"t","password":"p","isAnonymous":true,"isPrivate":false}"#;
        let d: PostDraft = serde_json::from_str(json).unwrap();
        assert!(d.is_anonymous);
        assert_eq!(d.author_name, None);
    }
}
