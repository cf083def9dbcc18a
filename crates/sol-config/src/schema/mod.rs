//! Configuration schema types for Sol.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod logging;
mod provider;

pub use chat::*;
pub use logging::*;
pub use provider::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Sol.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
