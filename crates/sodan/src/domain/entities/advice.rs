//! Advice - Ephemeral request/response of one consultation
//!
//! Neither value outlives a single submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PersonaId;

/// A user's submission: free text plus the chosen persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub user_text: String,
    pub persona: PersonaId,
}

impl AdviceRequest {
    pub fn new(user_text: impl Into<String>, persona: impl Into<PersonaId>) -> Self {
        Self {
            user_text: user_text.into(),
            persona: persona.into(),
        }
    }

    /// False for empty or whitespace-only text
    pub fn has_content(&self) -> bool {
        !self.user_text.trim().is_empty()
    }
}

/// Generated advice, returned verbatim from the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub text: String,
    pub persona: PersonaId,
    /// Model identifier the request was sent to
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl AdviceResponse {
    pub fn new(text: String, persona: PersonaId, model: impl Into<String>) -> Self {
        Self {
            text,
            persona,
            model: model.into(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_content() {
        assert!(AdviceRequest::new("相談です", PersonaId::CareerCoach).has_content());
        assert!(!AdviceRequest::new("", PersonaId::CareerCoach).has_content());
        assert!(!AdviceRequest::new(" \n\t　", PersonaId::CareerCoach).has_content());
    }
}
