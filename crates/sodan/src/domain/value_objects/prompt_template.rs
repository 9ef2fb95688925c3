//! PromptTemplate - Fixed system instruction for a persona

use std::borrow::Cow;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Immutable system-prompt text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PromptTemplate(Cow<'static, str>);

impl PromptTemplate {
    /// Create a template, rejecting blank text
    pub fn new(text: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "Prompt template must not be empty".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// Built-in templates are compile-time literals known to be non-empty.
    pub(crate) const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_template_rejected() {
        assert!(PromptTemplate::new("").is_err());
        assert!(PromptTemplate::new(" \n\t").is_err());
    }

    #[test]
    fn test_template_keeps_text() {
        let template = PromptTemplate::new(String::from("You are helpful.")).unwrap();
        assert_eq!(template.as_str(), "You are helpful.");
    }
}
