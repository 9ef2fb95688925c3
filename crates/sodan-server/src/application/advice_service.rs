//! Advice Application Service (Use Case)
//!
//! Validates a submission, picks the persona's system prompt, and makes a
//! single call to the model provider. Failures are classified, never retried.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use sodan::{
    AdviceError, AdviceRequest, AdviceResponse, AdviceState, LlmProvider, ModelError,
    ModelSettings, PersonaCatalog, Prompt,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Application service for advice requests
pub struct AdviceService {
    catalog: Arc<PersonaCatalog>,
    provider: Arc<dyn LlmProvider>,
    settings: ModelSettings,
    timeout: Duration,
    /// Cancels every in-flight call, e.g. on process shutdown
    shutdown: CancellationToken,
}

impl AdviceService {
    pub fn new(
        catalog: Arc<PersonaCatalog>,
        provider: Arc<dyn LlmProvider>,
        settings: ModelSettings,
    ) -> Self {
        Self {
            catalog,
            provider,
            settings,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Get advice for a submission
    pub async fn get_advice(
        &self,
        request: &AdviceRequest,
    ) -> Result<AdviceResponse, AdviceError> {
        self.get_advice_cancellable(request, &self.shutdown).await
    }

    /// Same as [`get_advice`](Self::get_advice), abandoning the model call once
    /// `cancel` or the service's shutdown token fires
    pub async fn get_advice_cancellable(
        &self,
        request: &AdviceRequest,
        cancel: &CancellationToken,
    ) -> Result<AdviceResponse, AdviceError> {
        let request_id = Uuid::new_v4();
        let mut state = AdviceState::Idle;

        enter(request_id, &mut state, AdviceState::Validating);
        if !request.has_content() {
            enter(request_id, &mut state, AdviceState::Rejected);
            tracing::info!(
                %request_id,
                persona = %request.persona,
                "Rejected empty advice request"
            );
            return Err(AdviceError::EmptyInput);
        }

        let template = self.catalog.select_template(&request.persona);
        if !self.catalog.contains(&request.persona) {
            tracing::debug!(
                %request_id,
                persona = %request.persona,
                "Unregistered persona, using default template"
            );
        }
        let prompt = Prompt::persona_consultation(template, request.user_text.as_str());

        enter(request_id, &mut state, AdviceState::Invoking);
        tracing::info!(
            %request_id,
            persona = %request.persona,
            provider = self.provider.provider_name(),
            model = self.settings.model(),
            "Invoking model"
        );

        match self.invoke(&prompt, cancel).await {
            Ok(text) => {
                enter(request_id, &mut state, AdviceState::Succeeded);
                tracing::info!(%request_id, chars = text.chars().count(), "Advice generated");
                Ok(AdviceResponse::new(
                    text,
                    request.persona.clone(),
                    self.settings.model(),
                ))
            }
            Err(err) => {
                enter(request_id, &mut state, AdviceState::Failed);
                tracing::warn!(%request_id, error = %err, "Model invocation failed");
                Err(AdviceError::ModelInvocation(err))
            }
        }
    }

    async fn invoke(
        &self,
        prompt: &Prompt,
        cancel: &CancellationToken,
    ) -> Result<String, ModelError> {
        let call = tokio::time::timeout(
            self.timeout,
            self.provider.complete(prompt, &self.settings),
        );

        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => Err(ModelError::Cancelled),
            _ = cancel.cancelled() => Err(ModelError::Cancelled),
            outcome = call => outcome.unwrap_or(Err(ModelError::Timeout(self.timeout))),
        }
    }
}

fn enter(request_id: Uuid, state: &mut AdviceState, next: AdviceState) {
    match state.advance(next) {
        Ok(advanced) => {
            tracing::debug!(%request_id, from = %state, to = %advanced, "Advice state transition");
            *state = advanced;
        }
        Err(err) => tracing::error!(%request_id, "{err}"),
    }
}
