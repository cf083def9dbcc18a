//! ProviderSession implementation for Gemini chats.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::provider::ProviderSession;
use crate::{AiError, Message};

use super::client::GeminiClient;

/// A Gemini chat: the system instruction plus the turns exchanged so far.
///
/// The API is stateless, so the whole history is resent every turn. The
/// history lock is held across the request, which serialises turns within
/// one chat.
pub struct GeminiChatSession {
    client: GeminiClient,
    system_instruction: String,
    history: Mutex<Vec<Message>>,
}

impl GeminiChatSession {
    pub(crate) fn new(client: GeminiClient, system_instruction: impl Into<String>) -> Self {
        Self {
            client,
            system_instruction: system_instruction.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    async fn post(&self, body: &serde_json::Value) -> Result<serde_json::Value, AiError> {
        let response = self
            .client
            .http
            .post(self.client.api_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.client.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ProviderSession for GeminiChatSession {
    async fn send(&self, text: &str) -> Result<String, AiError> {
        let mut history = self.history.lock().await;

        let mut messages = history.clone();
        messages.push(Message::user(text));
        let body = self.client.build_request_body(&self.system_instruction, &messages);

        debug!(model = %self.client.config.model, turns = messages.len(), "Gemini API request");

        let json = self.post(&body).await?;
        let reply = self.client.parse_response(&json)?;

        // Only completed turns enter the history.
        history.push(Message::user(text));
        history.push(Message::assistant(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::{GeminiClientFactory, GeminiConfig};
    use crate::provider::ClientFactory;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reply_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
    }

    fn session_for(server: &MockServer, api_key: &str) -> GeminiChatSession {
        let config = GeminiConfig::new(api_key)
            .with_model("gemini-test")
            .with_base_url(format!("{}/models", server.uri()));
        GeminiChatSession::new(GeminiClient::new(config).unwrap(), "You are Sol.")
    }

    #[tokio::test]
    async fn history_is_resent_with_each_turn() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body(" world ")))
            .mount(&server)
            .await;

        let session = session_for(&server, "test-key");
        assert_eq!(session.send("hello").await.unwrap(), " world ");
        assert_eq!(session.send("again").await.unwrap(), " world ");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        let first: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(first["contents"].as_array().unwrap().len(), 1);
        assert_eq!(
            first["systemInstruction"]["parts"][0]["text"],
            "You are Sol."
        );

        let second: serde_json::Value = requests[1].body_json().unwrap();
        let contents = second["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["parts"][0]["text"], "hello");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], " world ");
        assert_eq!(contents[2]["parts"][0]["text"], "again");
    }

    #[tokio::test]
    async fn keyless_client_still_sends_and_reports_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let template = GeminiConfig::default()
            .with_model("gemini-test")
            .with_base_url(format!("{}/models", server.uri()));
        let session = GeminiClientFactory::new(template)
            .create_client(None)
            .unwrap()
            .create_session("You are Sol.")
            .unwrap();

        let err = session.send("hello").await.unwrap_err();
        assert!(matches!(err, AiError::ApiError(ref m) if m.contains("403")), "{err}");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let key = requests[0].headers.get("x-goog-api-key").unwrap();
        assert!(key.is_empty());
    }

    #[tokio::test]
    async fn rate_limit_status_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = session_for(&server, "k").send("hello").await.unwrap_err();
        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn failed_turn_is_not_recorded() {
        // Nothing listens on this port, so the request fails fast.
        let config = GeminiConfig::new("k")
            .with_base_url("http://127.0.0.1:9")
            .with_timeouts(
                std::time::Duration::from_millis(200),
                std::time::Duration::from_millis(500),
            );
        let session = GeminiChatSession::new(GeminiClient::new(config).unwrap(), "You are Sol.");

        let result = session.send("hello").await;
        assert!(result.is_err());
        assert!(session.history.lock().await.is_empty());
        assert_eq!(session.system_instruction(), "You are Sol.");
    }
}
