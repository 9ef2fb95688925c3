//! Advice Routes - JSON API
//!
//! HTTP handlers that delegate to AdviceService.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use sodan::{AdviceError, AdviceRequest, ModelError};

use crate::models::{CreateAdviceRequest, CreateAdviceResponse, ErrorResponse, PersonaSummary};
use crate::AppState;

const GENERIC_FAILURE: &str = "The advice could not be generated. Please try again later.";

/// List selectable personas
#[utoipa::path(
    get,
    path = "/api/personas",
    responses(
        (status = 200, description = "Registered personas in display order", body = Vec<PersonaSummary>),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Advice"
)]
pub async fn list_personas(State(state): State<AppState>) -> Json<Vec<PersonaSummary>> {
    let personas = state
        .advice
        .catalog()
        .personas()
        .iter()
        .map(PersonaSummary::from)
        .collect();

    Json(personas)
}

/// Ask the selected persona for advice
#[utoipa::path(
    post,
    path = "/api/advice",
    request_body = CreateAdviceRequest,
    responses(
        (status = 200, description = "Advice generated", body = CreateAdviceResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 422, description = "Message is empty", body = ErrorResponse),
        (status = 502, description = "Model invocation failed", body = ErrorResponse),
        (status = 504, description = "Model invocation timed out", body = ErrorResponse)
    ),
    tag = "Advice"
)]
pub async fn create_advice(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdviceRequest>,
) -> Result<Json<CreateAdviceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = AdviceRequest::from(payload);

    state
        .advice
        .get_advice(&request)
        .await
        .map(|response| Json(response.into()))
        .map_err(error_response)
}

fn error_response(err: AdviceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, kind, message) = match &err {
        AdviceError::EmptyInput => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "empty_input",
            err.to_string(),
        ),
        AdviceError::ModelInvocation(ModelError::Timeout(_)) => (
            StatusCode::GATEWAY_TIMEOUT,
            "model_invocation",
            GENERIC_FAILURE.to_string(),
        ),
        AdviceError::ModelInvocation(_) => (
            StatusCode::BAD_GATEWAY,
            "model_invocation",
            GENERIC_FAILURE.to_string(),
        ),
    };

    (
        status,
        Json(ErrorResponse {
            error: kind.to_string(),
            message,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/personas", get(list_personas))
        .route("/api/advice", post(create_advice))
}
