//! Sodan Routes
//!
//! - / - Consultation form (HTML)
//! - /api/personas - Persona list
//! - /api/advice - Advice request (JSON)
//! - /health - Health check
//! - /swagger-ui - API documentation

pub mod advice;
pub mod page;
pub mod swagger;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Sodan API is running - advisors are listening".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication when an API key is set)
    let api_routes = Router::new()
        .merge(advice::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
        )
        .route("/health", get(health_check))
        .merge(page::router())
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
