mod cli;
mod repl;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sol_ai::{ChatService, EnvCredential, GeminiConfig};
use sol_common::Language;
use sol_config::{ProviderConfig, SolConfig};
use sol_widget::ChatWidget;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter};

const DEFAULT_LOG_DIRECTIVE: &str = "sol=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/sol-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn gemini_settings(provider: &ProviderConfig) -> GeminiConfig {
    GeminiConfig::default()
        .with_model(&provider.model)
        .with_base_url(&provider.base_url)
        .with_max_tokens(provider.max_tokens)
        .with_temperature(provider.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(provider.connect_timeout_secs)),
            Duration::from_secs(u64::from(provider.request_timeout_secs)),
        )
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().expect("static directive")),
    )
}

/// Level from the config file, unless `--log-level` already picked one.
fn configured_directive(cli_level: Option<&str>, config: &SolConfig) -> Option<&'static str> {
    match cli_level {
        Some(_) => None,
        None => Some(config.logging.level.directive()),
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    // Subscriber before config load; the file's level is applied after it via
    // the reload handle.
    let log_directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let (filter, filter_handle) = reload::Layer::new(env_filter(log_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Sol v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = sol_config::load_config_from(args.config.as_deref().map(Path::new))
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            SolConfig::default()
        });

    if let Some(directive) = configured_directive(args.log_level.as_deref(), &config) {
        if let Err(e) = filter_handle.reload(env_filter(directive)) {
            tracing::warn!("Could not apply configured log level: {e}");
        }
    }

    let language = args
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or(config.chat.default_language);

    let credentials = Arc::new(EnvCredential::new(&config.provider.api_key_env));
    let service = ChatService::gemini(gemini_settings(&config.provider), credentials);

    let mut widget = ChatWidget::new(language);
    if config.chat.open_on_start {
        widget.open();
    }

    if let Err(e) = repl::run(&mut widget, &service).await {
        tracing::error!("Input error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_settings_follow_provider_config() {
        let provider = ProviderConfig {
            model: "gemini-2.0-flash".into(),
            request_timeout_secs: 12,
            ..ProviderConfig::default()
        };
        let settings = gemini_settings(&provider);
        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.request_timeout, Duration::from_secs(12));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert!(settings.api_key.is_empty());
    }

    #[test]
    fn cli_log_level_overrides_config() {
        let mut config = SolConfig::default();
        config.logging.level = sol_config::LogLevel::Debug;

        assert_eq!(configured_directive(Some("sol=warn"), &config), None);
        assert_eq!(configured_directive(None, &config), Some("sol=debug"));
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let filter = env_filter("sol=notalevel");
        assert!(filter.to_string().contains("sol=info"));
    }
}
