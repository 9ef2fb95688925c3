//! Persona Catalog - Persona to system-prompt selection
//!
//! Built once at startup and shared read-only afterwards.

use std::collections::HashMap;

use crate::domain::entities::Persona;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{PersonaId, PromptTemplate};

const CAREER_COACH_TEMPLATE: &str = concat!(
    "あなたは日本語で丁寧に回答するキャリアコーチです。",
    "相談者の気持ちに寄り添いながら、仕事・転職・スキルアップに関する具体的なアドバイスを3つ提示してください。",
);

const HEALTH_ADVISOR_TEMPLATE: &str = concat!(
    "あなたは日本語で丁寧に回答する健康アドバイザーです。",
    "睡眠・食事・運動など、日常生活の中で無理なく続けられる健康習慣を、相談内容に合わせて3つ提示してください。",
);

const DEFAULT_TEMPLATE: &str = "あなたは日本語で丁寧に回答する親切なアドバイザーです。";

/// Immutable (PersonaId -> template) table with a default fallback
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
    index: HashMap<String, usize>,
    default_template: PromptTemplate,
}

impl PersonaCatalog {
    /// Career coach and health advisor, in that order
    pub fn builtin() -> Self {
        let personas = vec![
            Persona::new(
                PersonaId::CareerCoach,
                "キャリアコーチ",
                PromptTemplate::from_static(CAREER_COACH_TEMPLATE),
            ),
            Persona::new(
                PersonaId::HealthAdvisor,
                "健康アドバイザー",
                PromptTemplate::from_static(HEALTH_ADVISOR_TEMPLATE),
            ),
        ];
        let index = personas
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.as_str().to_string(), i))
            .collect();

        Self {
            personas,
            index,
            default_template: PromptTemplate::from_static(DEFAULT_TEMPLATE),
        }
    }

    pub fn builder(default_template: PromptTemplate) -> PersonaCatalogBuilder {
        PersonaCatalogBuilder {
            personas: Vec::new(),
            default_template,
        }
    }

    /// Template for `persona`, or the default template when it is not registered.
    ///
    /// Matches the identifier exactly.
    pub fn select_template(&self, persona: &PersonaId) -> &PromptTemplate {
        self.get(persona)
            .map(|p| &p.template)
            .unwrap_or(&self.default_template)
    }

    pub fn get(&self, persona: &PersonaId) -> Option<&Persona> {
        self.index
            .get(persona.as_str())
            .map(|&i| &self.personas[i])
    }

    pub fn contains(&self, persona: &PersonaId) -> bool {
        self.index.contains_key(persona.as_str())
    }

    /// Registered personas in registration order
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn default_template(&self) -> &PromptTemplate {
        &self.default_template
    }

    /// First registered persona, used as the initial selection of forms
    pub fn first(&self) -> Option<&Persona> {
        self.personas.first()
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for custom catalogs
pub struct PersonaCatalogBuilder {
    personas: Vec<Persona>,
    default_template: PromptTemplate,
}

impl PersonaCatalogBuilder {
    pub fn register(mut self, persona: Persona) -> Self {
        self.personas.push(persona);
        self
    }

    pub fn build(self) -> Result<PersonaCatalog, DomainError> {
        let mut index = HashMap::with_capacity(self.personas.len());
        for (i, persona) in self.personas.iter().enumerate() {
            if index.insert(persona.id.as_str().to_string(), i).is_some() {
                return Err(DomainError::DuplicatePersona(persona.id.to_string()));
            }
        }

        Ok(PersonaCatalog {
            personas: self.personas,
            index,
            default_template: self.default_template,
        })
    }
}
