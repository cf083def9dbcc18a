//! Chat widget defaults.

use serde::{Deserialize, Serialize};
use sol_common::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Language used when none is given on the command line.
    pub default_language: Language,
    /// Open the chat panel immediately instead of showing the launcher.
    pub open_on_start: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            open_on_start: false,
        }
    }
}
