//! Generative-AI provider connection settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How Sol reaches the remote model.
///
/// The API key itself never lives in the config file. Only the name of the
/// environment variable holding it is configured, and the key is read when
/// a session is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL of the models endpoint.
    pub base_url: String,
    /// Maximum tokens per reply (valid range: 1-8192).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Upper bound for one request round trip in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_key_env: "API_KEY".into(),
            base_url: DEFAULT_GEMINI_BASE_URL.into(),
            max_tokens: 1024,
            temperature: 0.7,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
