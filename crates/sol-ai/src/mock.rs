//! Mock provider for testing.
//!
//! Implements all three provider capability traits with scripted replies
//! and records what the core asked of it, so callers can assert on
//! construction counts, keys and messages without touching the network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::provider::{ClientFactory, ProviderClient, ProviderSession};
use crate::AiError;

/// What a mock session answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Text(String),
    /// Fail the send with `AiError::ApiError`.
    Error(String),
    /// Never resolve.
    Hang,
}

impl Default for MockReply {
    fn default() -> Self {
        MockReply::Text("Mock AI Response".to_string())
    }
}

#[derive(Default)]
struct MockState {
    /// Replies used first, in order.
    queued: Mutex<VecDeque<MockReply>>,
    /// Reply once the queue is drained.
    fallback: Mutex<MockReply>,
    construction_error: Mutex<Option<String>>,
    clients_created: AtomicUsize,
    sessions_created: AtomicUsize,
    sends: AtomicUsize,
    api_keys: Mutex<Vec<Option<String>>>,
    instructions: Mutex<Vec<String>>,
    received: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock generative-AI provider. Clones share state.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<MockState>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send resolves to `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let provider = Self::new();
        *lock(&provider.state.fallback) = MockReply::Text(text.into());
        provider
    }

    /// Every send fails with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        let provider = Self::new();
        *lock(&provider.state.fallback) = MockReply::Error(message.into());
        provider
    }

    /// Every send stays pending forever.
    pub fn hanging() -> Self {
        let provider = Self::new();
        *lock(&provider.state.fallback) = MockReply::Hang;
        provider
    }

    /// Queue replies returned before the fallback reply.
    pub fn with_replies<I, S>(self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.state.queued).extend(texts.into_iter().map(|t| MockReply::Text(t.into())));
        self
    }

    /// Make `create_client` fail.
    pub fn with_construction_error(self, message: impl Into<String>) -> Self {
        *lock(&self.state.construction_error) = Some(message.into());
        self
    }

    pub fn client_count(&self) -> usize {
        self.state.clients_created.load(Ordering::SeqCst)
    }

    pub fn session_count(&self) -> usize {
        self.state.sessions_created.load(Ordering::SeqCst)
    }

    pub fn send_count(&self) -> usize {
        self.state.sends.load(Ordering::SeqCst)
    }

    /// Keys passed to `create_client`, in call order.
    pub fn api_keys(&self) -> Vec<Option<String>> {
        lock(&self.state.api_keys).clone()
    }

    /// System instructions sessions were opened with, in order.
    pub fn system_instructions(&self) -> Vec<String> {
        lock(&self.state.instructions).clone()
    }

    /// Texts received by any session, in order.
    pub fn received_messages(&self) -> Vec<String> {
        lock(&self.state.received).clone()
    }

    fn next_reply(&self) -> MockReply {
        lock(&self.state.queued)
            .pop_front()
            .unwrap_or_else(|| lock(&self.state.fallback).clone())
    }
}

impl ClientFactory for MockProvider {
    fn create_client(&self, api_key: Option<&str>) -> Result<Arc<dyn ProviderClient>, AiError> {
        lock(&self.state.api_keys).push(api_key.map(str::to_string));
        if let Some(message) = lock(&self.state.construction_error).clone() {
            return Err(AiError::Construction(message));
        }
        self.state.clients_created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockClient {
            provider: self.clone(),
        }))
    }
}

struct MockClient {
    provider: MockProvider,
}

impl ProviderClient for MockClient {
    fn create_session(
        &self,
        system_instruction: &str,
    ) -> Result<Arc<dyn ProviderSession>, AiError> {
        let state = &self.provider.state;
        state.sessions_created.fetch_add(1, Ordering::SeqCst);
        lock(&state.instructions).push(system_instruction.to_string());
        Ok(Arc::new(MockSession {
            provider: self.provider.clone(),
        }))
    }
}

struct MockSession {
    provider: MockProvider,
}

#[async_trait]
impl ProviderSession for MockSession {
    async fn send(&self, text: &str) -> Result<String, AiError> {
        let state = &self.provider.state;
        state.sends.fetch_add(1, Ordering::SeqCst);
        lock(&state.received).push(text.to_string());

        match self.provider.next_reply() {
            MockReply::Text(reply) => Ok(reply),
            MockReply::Error(message) => Err(AiError::ApiError(message)),
            MockReply::Hang => std::future::pending().await,
        }
    }
}
