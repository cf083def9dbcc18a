//! The session cache: one live session, keyed by display language.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sol_common::Language;
use tracing::{info, warn};

use crate::credentials::CredentialSource;
use crate::prompts;
use crate::provider::ClientFactory;

use super::types::{DegradedReason, SessionHandle, SessionResult};

/// Holds at most one provider session, tagged with its language.
///
/// The slot is locked for the whole get-or-create step and construction is
/// synchronous, so concurrent callers asking for the same language always
/// end up with the same session.
pub struct SessionCache {
    factory: Arc<dyn ClientFactory>,
    credentials: Arc<dyn CredentialSource>,
    slot: Mutex<Option<SessionHandle>>,
    constructions: AtomicU64,
}

impl SessionCache {
    pub fn new(factory: Arc<dyn ClientFactory>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            factory,
            credentials,
            slot: Mutex::new(None),
            constructions: AtomicU64::new(0),
        }
    }

    /// Return the session for `language`, building a new one if the slot is
    /// empty or holds another language. Never fails.
    pub fn get_session(&self, language: Language) -> SessionHandle {
        let mut slot = self.lock_slot();
        if let Some(handle) = slot.as_ref() {
            if handle.language() == language {
                return handle.clone();
            }
        }

        let handle = self.construct(language);
        if let Some(previous) = slot.replace(handle.clone()) {
            info!(
                from = %previous.language(),
                to = %language,
                "language changed, replaced chat session"
            );
        }
        handle
    }

    /// Language of the cached session, if any.
    pub fn current_language(&self) -> Option<Language> {
        self.lock_slot().as_ref().map(SessionHandle::language)
    }

    /// Drop the cached session; the next `get_session` builds a fresh one.
    pub fn reset(&self) {
        self.lock_slot().take();
    }

    /// Number of sessions built so far.
    pub fn constructions(&self) -> u64 {
        self.constructions.load(Ordering::Relaxed)
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<SessionHandle>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn construct(&self, language: Language) -> SessionHandle {
        self.constructions.fetch_add(1, Ordering::Relaxed);

        // Read at construction time only; not kept afterwards.
        let api_key = self.credentials.api_key();
        if api_key.is_none() {
            warn!(
                %language,
                "API key is missing; creating a placeholder chat session that cannot reach the provider"
            );
        }

        let instruction = prompts::system_instruction(language);
        let built = self
            .factory
            .create_client(api_key.as_deref())
            .and_then(|client| client.create_session(instruction));

        let result = match built {
            Ok(session) if api_key.is_some() => SessionResult::Ready(session),
            Ok(session) => SessionResult::Degraded {
                reason: DegradedReason::MissingCredential,
                session: Some(session),
            },
            Err(e) => {
                warn!(%language, error = %e, "chat session construction failed; replies will fall back");
                SessionResult::Degraded {
                    reason: DegradedReason::ConstructionFailed(e.to_string()),
                    session: None,
                }
            }
        };

        let handle = SessionHandle::new(language, result);
        info!(
            session = handle.id().short(),
            %language,
            ready = handle.is_ready(),
            "chat session created"
        );
        handle
    }
}
