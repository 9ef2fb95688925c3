//! Sodan API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// API Client for Sodan
pub struct SodanClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct PersonaResponse {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct AdviceResponse {
    pub persona: String,
    pub model: String,
    pub answer: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAdviceRequest<'a> {
    pub persona: &'a str,
    pub message: &'a str,
}

impl SodanClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// List selectable personas
    pub async fn list_personas(&self) -> Result<Vec<PersonaResponse>> {
        let url = format!("{}/api/personas", self.base_url);
        let resp = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context("Failed to connect to Sodan API")?;

        let resp = check_status(resp).await?;
        let personas: Vec<PersonaResponse> =
            resp.json().await.context("Failed to parse response")?;

        Ok(personas)
    }

    /// Ask a persona for advice
    pub async fn ask(&self, persona: &str, message: &str) -> Result<AdviceResponse> {
        let url = format!("{}/api/advice", self.base_url);
        let request = CreateAdviceRequest { persona, message };

        let resp = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Sodan API")?;

        let resp = check_status(resp).await?;
        let advice: AdviceResponse = resp.json().await.context("Failed to parse response")?;

        Ok(advice)
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        bail!("Unauthorized. Run 'sodan login' first.");
    }

    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => bail!("API error ({}): [{}] {}", status, err.error, err.message),
        Err(_) => bail!("API error ({}): {}", status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_personas_sends_bearer() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/personas")
                .header("authorization", "Bearer secret");
            then.status(200).json_body(json!([
                { "id": "career_coach", "label": "キャリアコーチ" },
                { "id": "health_advisor", "label": "健康アドバイザー" }
            ]));
        });

        let client = SodanClient::new(&server.base_url(), Some("secret"));
        let personas = client.list_personas().await.unwrap();

        mock.assert();
        assert_eq!(personas.len(), 2);
        assert_eq!(personas[0].id, "career_coach");
        assert_eq!(personas[1].label, "健康アドバイザー");
    }

    #[tokio::test]
    async fn test_ask_posts_persona_and_message() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/advice")
                .json_body(json!({ "persona": "career_coach", "message": "転職すべき?" }));
            then.status(200).json_body(json!({
                "persona": "career_coach",
                "model": "gpt-4o-mini",
                "answer": "まずは現状を整理しましょう。",
                "generated_at": "2025-01-01T00:00:00Z"
            }));
        });

        let client = SodanClient::new(&server.base_url(), None);
        let advice = client.ask("career_coach", "転職すべき?").await.unwrap();

        mock.assert();
        assert_eq!(advice.answer, "まずは現状を整理しましょう。");
        assert_eq!(advice.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/advice");
            then.status(502).json_body(json!({
                "error": "model_invocation",
                "message": "The advice could not be generated. Please try again later."
            }));
        });

        let client = SodanClient::new(&server.base_url(), None);
        let err = client.ask("career_coach", "hi").await.unwrap_err();

        assert!(err.to_string().contains("model_invocation"));
    }

    #[tokio::test]
    async fn test_unauthorized_suggests_login() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/personas");
            then.status(401);
        });

        let client = SodanClient::new(&server.base_url(), Some("wrong"));
        let err = client.list_personas().await.unwrap_err();

        assert!(err.to_string().contains("sodan login"));
    }
}
