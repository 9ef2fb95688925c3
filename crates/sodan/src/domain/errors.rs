//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use crate::domain::services::AdviceState;
use crate::ports::ModelError;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: persona '{0}' is already registered")]
    DuplicatePersona(String),

    #[error("Invalid advice state transition: {from} -> {to}")]
    InvalidTransition { from: AdviceState, to: AdviceState },
}

/// Failure of a single advice request
#[derive(Debug, Error)]
pub enum AdviceError {
    /// Blank submission, rejected before the model is contacted
    #[error("Advice request text is empty")]
    EmptyInput,

    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] ModelError),
}

impl AdviceError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AdviceError::EmptyInput)
    }
}
