//! Page Routes - HTML consultation form

use axum::{extract::State, response::Html, routing::get, Form, Router};

use sodan::{AdviceError, AdviceRequest, PersonaId};

use crate::adapters::formatters::{render_page, PageOutcome, PageView};
use crate::models::AdviceForm;
use crate::AppState;

/// Empty form, first persona preselected
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let catalog = state.advice.catalog();
    let selected = catalog
        .first()
        .map(|p| p.id.clone())
        .unwrap_or_else(|| PersonaId::from(""));

    Html(render_page(&PageView {
        personas: catalog.personas(),
        selected: &selected,
        message: "",
        outcome: PageOutcome::Idle,
    }))
}

/// Handle a submission and re-render the page with its outcome
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<AdviceForm>,
) -> Html<String> {
    let request = AdviceRequest::new(form.message, form.persona);
    let result = state.advice.get_advice(&request).await;

    let outcome = match &result {
        Ok(response) => PageOutcome::Answer(response),
        Err(AdviceError::EmptyInput) => PageOutcome::EmptyInput,
        Err(AdviceError::ModelInvocation(_)) => PageOutcome::Failed,
    };

    Html(render_page(&PageView {
        personas: state.advice.catalog().personas(),
        selected: &request.persona,
        message: &request.user_text,
        outcome,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}
