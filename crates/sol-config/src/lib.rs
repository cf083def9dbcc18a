//! Sol configuration system.
//!
//! TOML-based configuration for the provider connection, chat defaults and
//! logging. Every section uses serde defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sol_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.provider.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChatConfig, LogLevel, LoggingConfig, ProviderConfig, SolConfig};

use sol_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<SolConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path override, or the platform default.
pub fn load_config_from(path: Option<&Path>) -> Result<SolConfig, ConfigError> {
    match path {
        Some(p) => {
            let config = toml_loader::load_from_path(p)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sol.toml");
        std::fs::write(&path, "[chat]\ndefault_language = \"es\"\n").unwrap();

        let config = load_config_from(Some(path.as_path())).unwrap();
        assert_eq!(config.chat.default_language, sol_common::Language::Es);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sol.toml");
        std::fs::write(&path, "[provider]\ntemperature = 9.0\n").unwrap();

        let err = load_config_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
