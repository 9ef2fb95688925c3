use std::sync::Arc;

use anyhow::Context;
use sodan::PersonaCatalog;
use tokio_util::sync::CancellationToken;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::OpenAiProvider;
use application::AdviceService;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub advice: Arc<AdviceService>,
    /// Bearer token guarding the JSON API
    pub api_key: Option<Arc<str>>,
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗣️ Sodan API initializing...");

    let config = AppConfig::from_secrets(&secrets).context("Invalid configuration")?;
    tracing::info!(
        model = config.model_settings.model(),
        temperature = config.model_settings.temperature(),
        timeout_secs = config.request_timeout.as_secs(),
        "⚙️  Configuration loaded"
    );

    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No SODAN_API_KEY set - JSON API authentication disabled");
    }

    // One provider for the whole process
    let provider = OpenAiProvider::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.request_timeout,
    )
    .context("Failed to build HTTP client")?;
    tracing::info!("🤖 OpenAI provider initialized ({})", config.openai_base_url);

    let catalog = Arc::new(PersonaCatalog::builtin());
    tracing::info!("🎭 {} personas registered", catalog.personas().len());

    // Abandon in-flight model calls once the process is asked to stop
    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("🛑 Shutdown requested - cancelling in-flight model calls");
            on_signal.cancel();
        }
    });

    let advice = AdviceService::new(catalog, Arc::new(provider), config.model_settings.clone())
        .with_timeout(config.request_timeout)
        .with_shutdown(shutdown);

    let state = AppState {
        advice: Arc::new(advice),
        api_key: config.api_key.as_deref().map(Arc::from),
    };

    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Sodan API ready - advisors are listening");

    Ok(router.into())
}
