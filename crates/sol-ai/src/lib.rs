//! AI engine for Sol.
//!
//! Owns the chat-session lifecycle:
//! - Provider capability traits with a Gemini adapter and a mock
//! - A session cache holding one session for the current display language
//! - A message exchange service that always resolves to displayable text

pub mod credentials;
pub mod exchange;
pub mod gemini;
pub mod mock;
pub mod prompts;
pub mod provider;
pub mod session;

pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use exchange::{ChatService, MessageExchange, FALLBACK_MESSAGE};
pub use gemini::{GeminiClient, GeminiClientFactory, GeminiConfig};
pub use mock::MockProvider;
pub use provider::{ClientFactory, ProviderClient, ProviderSession};
pub use session::{DegradedReason, SessionCache, SessionHandle, SessionResult};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Client construction failed: {0}")]
    Construction(String),
    #[error("Session unavailable: {0}")]
    Unavailable(String),
}
