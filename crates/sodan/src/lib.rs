//! Sodan Domain Library
//!
//! Core domain types and interfaces for the Sodan persona advice service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Persona, Prompt, AdviceRequest, AdviceResponse)
//!   - `value_objects/`: Immutable value types (PersonaId, PromptTemplate, ModelSettings)
//!   - `services/`: Persona catalog (template selection), advice lifecycle
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Hosted model interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use sodan::{PersonaCatalog, PersonaId, Prompt};
//!
//! let catalog = PersonaCatalog::builtin();
//! let template = catalog.select_template(&PersonaId::CareerCoach);
//! let prompt =
//!     Prompt::persona_consultation(template, "40代からAIスキルを身につけるには？");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AdviceError, AdviceRequest, AdviceResponse, AdviceState, DomainError, MessageRole,
    ModelSettings, Persona, PersonaCatalog, PersonaCatalogBuilder, PersonaId, Prompt,
    PromptMessage, PromptTemplate, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use ports::{LlmProvider, ModelError};
