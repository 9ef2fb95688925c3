//! AdviceState - Lifecycle of one advice request
//!
//! `Idle -> Validating -> (Rejected | Invoking) -> (Succeeded | Failed)`

use serde::Serialize;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Invoking,
    Succeeded,
    Failed,
}

impl AdviceState {
    /// Rejected, Succeeded and Failed have no outgoing transitions
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AdviceState::Rejected | AdviceState::Succeeded | AdviceState::Failed
        )
    }

    pub fn can_advance_to(self, next: AdviceState) -> bool {
        use AdviceState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Invoking)
                | (Invoking, Succeeded)
                | (Invoking, Failed)
        )
    }

    pub fn advance(self, next: AdviceState) -> Result<AdviceState, DomainError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for AdviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdviceState::Idle => write!(f, "idle"),
            AdviceState::Validating => write!(f, "validating"),
            AdviceState::Rejected => write!(f, "rejected"),
            AdviceState::Invoking => write!(f, "invoking"),
            AdviceState::Succeeded => write!(f, "succeeded"),
            AdviceState::Failed => write!(f, "failed"),
        }
    }
}
