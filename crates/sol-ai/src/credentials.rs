//! Where the provider API key comes from.
//!
//! The key is looked up each time a session is constructed and handed
//! straight to the client factory; nothing here caches it.

/// Supplies the API key at session-construction time.
pub trait CredentialSource: Send + Sync {
    /// The current key, or `None` when it is absent or blank.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new("API_KEY")
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// A fixed key, mostly for tests and embedding.
#[derive(Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.0.as_ref().map(|_| "[REDACTED]");
        f.debug_tuple("StaticCredential").field(&shown).finish()
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.trim().is_empty())
    }
}
