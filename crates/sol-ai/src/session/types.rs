//! Session handle and construction outcome types.

use std::sync::Arc;

use sol_common::{Language, SessionId};

use crate::provider::ProviderSession;
use crate::AiError;

/// Why a session is not fully functional.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DegradedReason {
    #[error("API key is missing")]
    MissingCredential,
    #[error("session construction failed: {0}")]
    ConstructionFailed(String),
}

/// Outcome of building a session.
#[derive(Clone)]
pub enum SessionResult {
    Ready(Arc<dyn ProviderSession>),
    /// `session` is a best-effort placeholder when one could be built.
    Degraded {
        reason: DegradedReason,
        session: Option<Arc<dyn ProviderSession>>,
    },
}

impl SessionResult {
    pub fn provider_session(&self) -> Option<&Arc<dyn ProviderSession>> {
        match self {
            SessionResult::Ready(session) => Some(session),
            SessionResult::Degraded { session, .. } => session.as_ref(),
        }
    }
}

impl std::fmt::Debug for SessionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionResult::Ready(_) => f.write_str("Ready"),
            SessionResult::Degraded { reason, session } => f
                .debug_struct("Degraded")
                .field("reason", reason)
                .field("has_session", &session.is_some())
                .finish(),
        }
    }
}

/// Shared handle to the cached session.
///
/// Clones point at the same conversation; use [`SessionHandle::same_session`]
/// to compare identity.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    id: SessionId,
    language: Language,
    result: SessionResult,
}

impl SessionHandle {
    pub(crate) fn new(language: Language, result: SessionResult) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                id: SessionId::new(),
                language,
                result,
            }),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.inner.id
    }

    pub fn language(&self) -> Language {
        self.inner.language
    }

    pub fn result(&self) -> &SessionResult {
        &self.inner.result
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.inner.result, SessionResult::Ready(_))
    }

    pub fn degraded_reason(&self) -> Option<&DegradedReason> {
        match &self.inner.result {
            SessionResult::Ready(_) => None,
            SessionResult::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn same_session(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Send one user turn through this session.
    pub async fn send(&self, text: &str) -> Result<String, AiError> {
        match self.inner.result.provider_session() {
            Some(session) => session.send(text).await,
            None => Err(AiError::Unavailable(
                self.degraded_reason()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            )),
        }
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("id", &self.inner.id)
            .field("language", &self.inner.language)
            .field("result", &self.inner.result)
            .finish()
    }
}
