//! Provider capability traits.
//!
//! The core only needs three things from a generative-AI backend: build a
//! client from a key, open a chat session seeded with a system instruction,
//! and exchange one turn of text. Gemini and the mock provider both plug in
//! here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::AiError;

/// Builds provider clients.
///
/// Implementations must not validate the key; a missing or bad key shows up
/// as an error on the first `send`.
pub trait ClientFactory: Send + Sync {
    fn create_client(&self, api_key: Option<&str>) -> Result<Arc<dyn ProviderClient>, AiError>;
}

/// A client bound to one credential.
pub trait ProviderClient: Send + Sync {
    /// Open a stateful chat seeded with `system_instruction`.
    fn create_session(&self, system_instruction: &str)
        -> Result<Arc<dyn ProviderSession>, AiError>;
}

/// One stateful conversation with the provider.
#[async_trait]
pub trait ProviderSession: Send + Sync {
    /// Send a user turn and return the reply text untouched.
    async fn send(&self, text: &str) -> Result<String, AiError>;
}
