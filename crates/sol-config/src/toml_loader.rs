//! TOML config file loading and creation.

use crate::schema::SolConfig;
use sol_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Range checks are left to [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<SolConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: SolConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/sol/config.toml`
/// On Linux: `~/.config/sol/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SolConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(SolConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("sol").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

fn default_config_toml() -> &'static str {
    r##"# Sol Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# model = "gemini-2.5-flash"
# api_key_env = "API_KEY"      # the key itself is read from this variable
# max_tokens = 1024            # 1-8192
# temperature = 0.7            # 0.0-2.0
# connect_timeout_secs = 10    # 1-120
# request_timeout_secs = 30    # 1-600

[chat]
# default_language = "en"      # en | es
# open_on_start = false

[logging]
# level = "INFO"               # DEBUG | INFO | WARNING | ERROR
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_common::Language;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_sol_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[provider]
model = "gemini-2.0-flash"

[chat]
default_language = "es"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.chat.default_language, Language::Es);
        // Defaults preserved
        assert_eq!(config.provider.api_key_env, "API_KEY");
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.provider.model, SolConfig::default().provider.model);
        assert!(crate::validation::validate(&config).is_ok());
    }

    #[test]
    fn load_from_path_only_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\ntemperature = 9.0\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.provider.temperature, 9.0);
    }

    #[test]
    fn default_config_path_ends_with_sol() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("sol/config.toml"));
        }
    }
}
