use crate::config::InsightConfig;
use crate::domain::ports::{CompletionClient, CompletionRequest, RemoteError};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// Client for OpenAI-compatible `/chat/completions` endpoints.
///
/// Sends exactly one request per call; the request as a whole is bounded by
/// the configured timeout.
pub struct OpenAiCompatibleClient {
    client: Client,
    endpoint: String,
    credential: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        endpoint: impl Into<String>,
        credential: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credential: credential.into(),
        })
    }

    /// `None` when the config does not enable remote mode.
    pub fn from_config(config: &InsightConfig) -> Result<Option<Self>> {
        match config.credential() {
            Some(credential) if config.is_remote_configured() => Ok(Some(Self::new(
                config.remote_endpoint.clone(),
                credential,
                config.timeout(),
            )?)),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, RemoteError> {
        let body = json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt}
            ],
            "max_tokens": request.max_tokens,
            "temperature": 0.7
        });

        tracing::debug!("Requesting completion from: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let json: Value =
            serde_json::from_str(&text).map_err(|e| RemoteError::MalformedBody(e.to_string()))?;

        parse_completion(&json)
    }
}

/// Extract the assistant text from a chat-completion response.
pub fn parse_completion(json: &Value) -> std::result::Result<String, RemoteError> {
    let content = json
        .pointer("/choices/0/message/content")
        .or_else(|| json.pointer("/choices/0/text"))
        .ok_or_else(|| RemoteError::MalformedBody("no choices in response".to_string()))?;

    let text = match content {
        Value::String(s) => s.clone(),
        // 部分相容服務回傳 content parts 陣列
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.as_str().or_else(|| part.get("text").and_then(Value::as_str)))
            .collect::<Vec<_>>()
            .join(""),
        Value::Null => String::new(),
        other => {
            return Err(RemoteError::MalformedBody(format!(
                "unexpected content type: {}",
                other
            )))
        }
    };

    if text.trim().is_empty() {
        return Err(RemoteError::EmptyCompletion);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            system_prompt: "be kind".to_string(),
            user_prompt: "Mood: 8".to_string(),
            max_tokens: 50,
        }
    }

    #[test]
    fn test_parse_completion_variants() {
        let j = json!({"choices": [{"message": {"content": "Nice work today."}}]});
        assert_eq!(parse_completion(&j).unwrap(), "Nice work today.");

        let legacy = json!({"choices": [{"text": "Legacy text"}]});
        assert_eq!(parse_completion(&legacy).unwrap(), "Legacy text");

        let parts = json!({"choices": [{"message": {"content": [{"type": "text", "text": "Part A. "}, {"type": "text", "text": "Part B."}]}}]});
        assert_eq!(parse_completion(&parts).unwrap(), "Part A. Part B.");
    }

    #[test]
    fn test_parse_completion_failures() {
        assert!(matches!(
            parse_completion(&json!({"error": "nope"})),
            Err(RemoteError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_completion(&json!({"choices": [{"message": {"content": "  "}}]})),
            Err(RemoteError::EmptyCompletion)
        ));
        assert!(matches!(
            parse_completion(&json!({"choices": [{"message": {"content": 42}}]})),
            Err(RemoteError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_from_config_requires_remote_mode() {
        assert!(OpenAiCompatibleClient::from_config(&InsightConfig::default())
            .unwrap()
            .is_none());
        assert!(OpenAiCompatibleClient::from_config(&InsightConfig::remote("sk-test"))
            .unwrap()
            .is_some());

        let negative_timeout = InsightConfig {
            timeout_seconds: -1.0,
            ..InsightConfig::remote("sk-test")
        };
        assert!(OpenAiCompatibleClient::from_config(&negative_timeout)
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_model() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test")
                .body_contains("gpt-4o-mini");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "Keep resting well."}}]
            }));
        });

        let client = OpenAiCompatibleClient::new(
            server.url("/v1/chat/completions"),
            "sk-test",
            Duration::from_secs(5),
        )
        .unwrap();

        let text = client.complete(&request()).await.unwrap();
        assert_eq!(text, "Keep resting well.");
        mock.assert();
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429);
        });

        let client = OpenAiCompatibleClient::new(
            server.url("/v1/chat/completions"),
            "sk-test",
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(429)));
        mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_complete_maps_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body("<html>gateway</html>");
        });

        let client = OpenAiCompatibleClient::new(
            server.url("/v1/chat/completions"),
            "sk-test",
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, RemoteError::MalformedBody(_)));
    }
}
