//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateAdviceRequest, CreateAdviceResponse, ErrorResponse, PersonaSummary};

use super::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        super::health_check,
        // Advice endpoints
        super::advice::list_personas,
        super::advice::create_advice,
    ),
    info(
        title = "Sodan API",
        version = "0.1.0",
        description = "相談 (Consultation) - Persona advice API\n\nPick a persona, send a question, get the hosted model's answer.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Advice", description = "Advice - Persona selection and model invocation"),
    ),
    components(
        schemas(
            HealthCheck,
            PersonaSummary,
            CreateAdviceRequest,
            CreateAdviceResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
