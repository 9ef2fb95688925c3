//! Advice DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sodan::{AdviceRequest, AdviceResponse, Persona};

/// Persona entry for selectors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonaSummary {
    /// Persona identifier, e.g. `career_coach`
    pub id: String,
    /// Display label
    pub label: String,
}

impl From<&Persona> for PersonaSummary {
    fn from(persona: &Persona) -> Self {
        Self {
            id: persona.id.to_string(),
            label: persona.label.clone(),
        }
    }
}

// ============================================
// Request/Response DTOs
// ============================================

/// Advice request (JSON API)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdviceRequest {
    /// Persona identifier; unknown values fall back to the default advisor
    pub persona: String,
    /// Free-text question, forwarded verbatim
    pub message: String,
}

impl From<CreateAdviceRequest> for AdviceRequest {
    fn from(req: CreateAdviceRequest) -> Self {
        AdviceRequest::new(req.message, req.persona)
    }
}

/// Advice response (JSON API)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAdviceResponse {
    pub persona: String,
    pub model: String,
    pub answer: String,
    pub generated_at: DateTime<Utc>,
}

impl From<AdviceResponse> for CreateAdviceResponse {
    fn from(resp: AdviceResponse) -> Self {
        Self {
            persona: resp.persona.to_string(),
            model: resp.model,
            answer: resp.text,
            generated_at: resp.generated_at,
        }
    }
}

/// Error body (JSON API)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable kind: `empty_input`, `model_invocation`
    pub error: String,
    pub message: String,
}

/// Consultation form (HTML page)
#[derive(Debug, Default, Deserialize)]
pub struct AdviceForm {
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub message: String,
}
