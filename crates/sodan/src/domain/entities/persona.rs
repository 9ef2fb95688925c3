//! Persona - Advisory role offered to the user

use serde::Serialize;

use crate::domain::value_objects::{PersonaId, PromptTemplate};

/// A registered persona: identifier, display label and system template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub id: PersonaId,
    /// Human-facing name shown by selectors
    pub label: String,
    pub template: PromptTemplate,
}

impl Persona {
    pub fn new(id: PersonaId, label: impl Into<String>, template: PromptTemplate) -> Self {
        Self {
            id,
            label: label.into(),
            template,
        }
    }
}
