//! Simple API Key Authentication (Bearer Token)
//!
//! Guards the JSON API. The HTML form stays public.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Authentication middleware
/// Validates Bearer token against the configured API key
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let api_key = match state.api_key.as_deref() {
        Some(key) if !key.is_empty() => key,
        // No API key configured = auth disabled (for development)
        _ => return Ok(next.run(request).await),
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == api_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None if auth_header.is_some() => {
            tracing::warn!("Invalid Authorization header format");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
