//! Message exchange: one user turn in, displayable text out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sol_common::Language;
use tracing::{debug, warn};

use crate::credentials::CredentialSource;
use crate::gemini::{GeminiClientFactory, GeminiConfig};
use crate::provider::ClientFactory;
use crate::session::SessionCache;
use crate::AiError;

/// Shown in place of a reply whenever the provider cannot answer.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";

/// The single call point the chat widget depends on.
///
/// Implementations always resolve; failures become [`FALLBACK_MESSAGE`].
#[async_trait]
pub trait MessageExchange: Send + Sync {
    async fn send_message(&self, language: Language, text: &str) -> String;
}

/// Sends user turns through the cached session for the requested language.
pub struct ChatService {
    cache: SessionCache,
    request_timeout: Option<Duration>,
}

impl ChatService {
    pub fn new(cache: SessionCache) -> Self {
        Self {
            cache,
            request_timeout: None,
        }
    }

    pub fn from_parts(
        factory: Arc<dyn ClientFactory>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self::new(SessionCache::new(factory, credentials))
    }

    /// A service backed by Gemini; the key comes from `credentials`.
    pub fn gemini(settings: GeminiConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        let timeout = settings.request_timeout;
        Self::from_parts(Arc::new(GeminiClientFactory::new(settings)), credentials)
            .with_request_timeout(timeout)
    }

    /// Bound how long one exchange may stay pending.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Like [`MessageExchange::send_message`] but keeps the error.
    ///
    /// `text` is passed through untouched; filtering blank input is the
    /// caller's job.
    pub async fn try_send_message(&self, language: Language, text: &str) -> Result<String, AiError> {
        let session = self.cache.get_session(language);
        debug!(session = session.id().short(), %language, "sending chat message");

        let reply = session.send(text);
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, reply)
                .await
                .map_err(|_| AiError::Timeout)?,
            None => reply.await,
        }
    }
}

#[async_trait]
impl MessageExchange for ChatService {
    async fn send_message(&self, language: Language, text: &str) -> String {
        match self.try_send_message(language, text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(%language, error = %e, "chat exchange failed, using fallback message");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
