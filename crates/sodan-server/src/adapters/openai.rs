//! OpenAI Chat Completions provider
//!
//! Sends the role-tagged prompt to `/chat/completions` and returns the first
//! choice's content unchanged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use sodan::{LlmProvider, MessageRole, ModelError, ModelSettings, Prompt};

/// LLM provider backed by the OpenAI API
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider; `timeout` bounds each HTTP request
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout(self.timeout)
        } else {
            ModelError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        prompt: &Prompt,
        settings: &ModelSettings,
    ) -> Result<String, ModelError> {
        let request = ChatCompletionRequest {
            model: settings.model(),
            temperature: settings.temperature(),
            messages: prompt
                .messages()
                .iter()
                .map(|m| ChatMessage {
                    role: wire_role(m.role),
                    content: &m.content,
                })
                .collect(),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response
            .text()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        if !status.is_success() {
            return Err(map_http_error(status, retry_after, &body));
        }

        extract_content(&body)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================
// Helper Functions
// ============================================

fn wire_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::Human => "user",
    }
}

fn extract_content(body: &str) -> Result<String, ModelError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|err| ModelError::MalformedResponse(err.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::MalformedResponse("No choices returned".to_string()))?
        .message
        .content
        .ok_or_else(|| ModelError::MalformedResponse("Choice has no content".to_string()))
}

fn map_http_error(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> ModelError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited { retry_after },
        _ => ModelError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use sodan::{PersonaCatalog, PersonaId};

    fn provider(server: &MockServer) -> OpenAiProvider {
        OpenAiProvider::new("sk-test", server.base_url(), Duration::from_secs(5)).unwrap()
    }

    fn prompt() -> Prompt {
        let catalog = PersonaCatalog::builtin();
        Prompt::persona_consultation(
            catalog.select_template(&PersonaId::HealthAdvisor),
            "最近よく眠れません",
        )
    }

    fn settings() -> ModelSettings {
        ModelSettings::new("gpt-4o-mini", 0.5).unwrap()
    }

    #[tokio::test]
    async fn test_sends_role_tagged_messages() {
        let server = MockServer::start_async().await;
        let catalog = PersonaCatalog::builtin();
        let system = catalog
            .select_template(&PersonaId::HealthAdvisor)
            .as_str()
            .to_string();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body(json!({
                    "model": "gpt-4o-mini",
                    "temperature": 0.5,
                    "messages": [
                        { "role": "system", "content": system },
                        { "role": "user", "content": "最近よく眠れません" }
                    ]
                }));
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "choices": [
                    {
                        "index": 0,
                        "message": { "role": "assistant", "content": "1. 就寝前の画面時間を減らす" }
                    }
                ]
            }));
        });

        let text = provider(&server).complete(&prompt(), &settings()).await.unwrap();

        mock.assert();
        assert_eq!(text, "1. 就寝前の画面時間を減らす");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401)
                .json_body(json!({ "error": { "message": "Incorrect API key provided" } }));
        });

        let err = provider(&server).complete(&prompt(), &settings()).await.unwrap_err();

        assert_eq!(
            err,
            ModelError::Authentication("Incorrect API key provided".to_string())
        );
    }

    #[tokio::test]
    async fn test_too_many_requests_maps_to_rate_limited() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("quota exceeded");
        });

        let err = provider(&server).complete(&prompt(), &settings()).await.unwrap_err();

        assert_eq!(err, ModelError::RateLimited { retry_after: None });
    }

    #[tokio::test]
    async fn test_rate_limit_carries_retry_after() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).header("retry-after", "20").body("slow down");
        });

        let err = provider(&server).complete(&prompt(), &settings()).await.unwrap_err();

        assert_eq!(
            err,
            ModelError::RateLimited {
                retry_after: Some(Duration::from_secs(20))
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(500).body("upstream exploded");
        });

        let err = provider(&server).complete(&prompt(), &settings()).await.unwrap_err();

        assert_eq!(mock.hits(), 1);
        assert_eq!(
            err,
            ModelError::Api {
                status: 500,
                message: "upstream exploded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_bodies() {
        let server = MockServer::start_async().await;
        let provider = provider(&server);

        let mut mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).body("not json");
        });
        let err = provider.complete(&prompt(), &settings()).await.unwrap_err();
        assert!(matches!(err, ModelError::MalformedResponse(_)));
        mock.delete();

        mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        });
        let err = provider.complete(&prompt(), &settings()).await.unwrap_err();
        assert!(matches!(err, ModelError::MalformedResponse(_)));
        mock.delete();

        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .json_body(json!({ "choices": [ { "message": { "content": null } } ] }));
        });
        let err = provider.complete(&prompt(), &settings()).await.unwrap_err();
        assert!(matches!(err, ModelError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let provider =
            OpenAiProvider::new("sk-test", "http://127.0.0.1:9", Duration::from_secs(5)).unwrap();

        let err = provider.complete(&prompt(), &settings()).await.unwrap_err();

        assert!(matches!(err, ModelError::Network(_)));
    }

    #[test]
    fn test_human_role_is_sent_as_user() {
        assert_eq!(wire_role(MessageRole::System), "system");
        assert_eq!(wire_role(MessageRole::Human), "user");
    }
}
