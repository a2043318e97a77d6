//! Static field descriptors consumed by the chat UI.

use serde::{Deserialize, Serialize};

/// A field rule is either a constant or an expression evaluated by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldRule {
    Always(bool),
    When(String),
}

impl FieldRule {
    fn when(expr: &str) -> Self {
        FieldRule::When(expr.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub required: FieldRule,
    #[serde(rename = "type")]
    pub field_type: String,
    pub enabled: FieldRule,
}

impl FieldDescriptor {
    fn new(name: &str, label: &str, field_type: &str, required: FieldRule, enabled: FieldRule) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            field_type: field_type.to_string(),
            enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub fields: Vec<FieldDescriptor>,
}

impl FieldMeta {
    /// Descriptors for the chat + publish form.
    pub fn chat_form() -> Self {
        use FieldRule::Always;

        let publishing = || FieldRule::when("{{wantsToPost}}");
        Self {
            fields: vec![
                FieldDescriptor::new("originalQuestion", "Question", "text", Always(true), Always(true)),
                FieldDescriptor::new("wantsToPost", "Publish", "toggle", Always(true), Always(true)),
                FieldDescriptor::new("postData.title", "Title", "text", Always(true), publishing()),
                FieldDescriptor::new("postData.password", "Password", "password", Always(true), publishing()),
                FieldDescriptor::new("postData.isAnonymous", "Anonymous", "toggle", Always(true), publishing()),
                FieldDescriptor::new("postData.isPrivate", "Private", "toggle", Always(true), publishing()),
                FieldDescriptor::new(
                    "postData.authorName",
                    "Name",
                    "text",
                    FieldRule::when("{{!postData.isAnonymous}}"),
                    FieldRule::when("{{wantsToPost && !postData.isAnonymous}}"),
                ),
                FieldDescriptor::new("postData.email", "Email", "email", Always(false), publishing()),
            ],
        }
    }
}
