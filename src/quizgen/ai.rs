// src/quizgen/ai.rs

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Failure of the generative backend.
///
/// Never surfaced to HTTP callers: every consumer absorbs it by switching
/// to a deterministic fallback path.
#[derive(Debug)]
pub enum AiError {
    /// No API key configured; the call was skipped entirely.
    Unconfigured,

    /// Transport-level failure (connect, timeout, TLS).
    Request(String),

    /// Non-2xx response from the backend.
    Status(u16, String),

    /// 2xx response with an empty completion.
    EmptyResponse,

    /// Response body did not match the expected completion shape.
    MalformedResponse(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Unconfigured => write!(f, "generative backend not configured"),
            AiError::Request(msg) => write!(f, "request failed: {}", msg),
            AiError::Status(code, msg) => write!(f, "backend returned status {}: {}", code, msg),
            AiError::EmptyResponse => write!(f, "backend returned an empty completion"),
            AiError::MalformedResponse(msg) => write!(f, "malformed backend response: {}", msg),
        }
    }
}

impl std::error::Error for AiError {}

/// One chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,

    /// Ask the backend for a JSON-object response body.
    pub json_response: bool,

    pub max_tokens: Option<u32>,
    pub temperature: f32,
}

/// Capability object for the generative text backend.
///
/// Injected into the synthesizer and recommendation engine so the
/// unconfigured/degraded branches are testable with a fake.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is present. When false, callers skip straight
    /// to their fallback instead of making a guaranteed-to-fail call.
    fn is_configured(&self) -> bool;

    /// Runs a completion and returns the assistant message content.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError>;
}

/// OpenAI-backed implementation of [`TextGenerator`].
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            Duration::from_secs(config.openai_timeout_secs),
        )
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError> {
        let api_key = self.api_key.as_ref().ok_or(AiError::Unconfigured)?;

        let mut payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user }
            ],
            "temperature": request.temperature,
        });
        if request.json_response {
            payload["response_format"] = serde_json::json!({ "type": "json_object" });
        }
        if let Some(max_tokens) = request.max_tokens {
            payload["max_tokens"] = serde_json::json!(max_tokens);
        }

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Status(status, text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;

        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| AiError::MalformedResponse("missing message content".to_string()))?;

        if content.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_counts_as_unconfigured() {
        let client = OpenAiClient::new(
            Some("   ".to_string()),
            "gpt-4o".to_string(),
            Duration::from_secs(5),
        );
        assert!(!client.is_configured());

        let client = OpenAiClient::new(None, "gpt-4o".to_string(), Duration::from_secs(5));
        assert!(!client.is_configured());

        let client = OpenAiClient::new(
            Some("sk-test".to_string()),
            "gpt-4o".to_string(),
            Duration::from_secs(5),
        );
        assert!(client.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_complete_fails_without_network() {
        let client = OpenAiClient::new(None, "gpt-4o".to_string(), Duration::from_secs(5));
        let result = client
            .complete(CompletionRequest {
                system: "test".to_string(),
                user: "test".to_string(),
                json_response: false,
                max_tokens: None,
                temperature: 0.0,
            })
            .await;
        assert!(matches!(result, Err(AiError::Unconfigured)));
    }
}
