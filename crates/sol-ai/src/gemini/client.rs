//! Gemini API client struct, request building, and response parsing.

use std::sync::Arc;

use tracing::debug;

use crate::provider::{ClientFactory, ProviderClient, ProviderSession};
use crate::{AiError, Message, Role};

use super::api::GeminiChatSession;
use super::config::GeminiConfig;

/// Gemini API client. Cheap to clone; the HTTP pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Construction(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for one turn of a chat.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        messages: &[Message],
    ) -> serde_json::Value {
        let contents: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_instruction }]
            });
        }

        body
    }

    /// Extract the reply text from a `generateContent` response.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<String, AiError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
        }

        let first = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("candidate has no content parts".to_string()))?;

        let content: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        Ok(content)
    }
}

impl ProviderClient for GeminiClient {
    fn create_session(
        &self,
        system_instruction: &str,
    ) -> Result<Arc<dyn ProviderSession>, AiError> {
        debug!(model = %self.config.model, "opening Gemini chat session");
        Ok(Arc::new(GeminiChatSession::new(
            self.clone(),
            system_instruction,
        )))
    }
}

/// Builds [`GeminiClient`]s from a settings template plus the current key.
#[derive(Debug, Clone, Default)]
pub struct GeminiClientFactory {
    template: GeminiConfig,
}

impl GeminiClientFactory {
    /// `template.api_key` is ignored; the key comes from `create_client`.
    pub fn new(template: GeminiConfig) -> Self {
        Self { template }
    }
}

impl ClientFactory for GeminiClientFactory {
    fn create_client(&self, api_key: Option<&str>) -> Result<Arc<dyn ProviderClient>, AiError> {
        let config = self.template.clone().with_api_key(api_key.unwrap_or_default());
        Ok(Arc::new(GeminiClient::new(config)?))
    }
}
