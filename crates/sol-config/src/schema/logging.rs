//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the sol crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "sol=debug",
            LogLevel::Info => "sol=info",
            LogLevel::Warning => "sol=warn",
            LogLevel::Error => "sol=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_uppercase_toml() {
        let config: LoggingConfig = toml::from_str("level = \"WARNING\"").unwrap();
        assert_eq!(config.level, LogLevel::Warning);
        assert_eq!(config.level.directive(), "sol=warn");
    }
}
