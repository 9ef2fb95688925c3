//! Prompt - Structured, role-tagged prompt
//!
//! The persona instruction and the user's text travel in separate parts.
//! User text is never spliced into the system string.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MessageRole, PromptTemplate};

/// One role-tagged part of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Human,
            content: content.into(),
        }
    }
}

/// Ordered list of prompt parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    messages: Vec<PromptMessage>,
}

impl Prompt {
    /// `[system(template), human(text)]`, with `text` passed through unmodified
    pub fn persona_consultation(template: &PromptTemplate, text: impl Into<String>) -> Self {
        Self {
            messages: vec![
                PromptMessage::system(template.as_str()),
                PromptMessage::human(text),
            ],
        }
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    /// Content of the first part with the given role
    pub fn content_of(&self, role: MessageRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}
