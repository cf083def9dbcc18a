//! Configuration validation.
//!
//! Collects every problem instead of stopping at the first one.

use crate::schema::SolConfig;
use sol_common::ConfigError;

pub fn validate(config: &SolConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let provider = &config.provider;

    validate_non_empty(&mut errors, "provider.model", &provider.model);
    validate_non_empty(&mut errors, "provider.api_key_env", &provider.api_key_env);
    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = '{}' must be an http(s) URL",
            provider.base_url
        ));
    }

    validate_range(&mut errors, "provider.max_tokens", provider.max_tokens, 1, 8192);
    validate_range_f64(&mut errors, "provider.temperature", provider.temperature, 0.0, 2.0);
    validate_range(
        &mut errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        &mut errors,
        "provider.request_timeout_secs",
        provider.request_timeout_secs,
        1,
        600,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&SolConfig::default()).is_ok());
    }

    #[test]
    fn catches_empty_model() {
        let mut config = SolConfig::default();
        config.provider.model = "  ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("provider.model"));
    }

    #[test]
    fn catches_temperature_out_of_range() {
        let mut config = SolConfig::default();
        config.provider.temperature = 2.5;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("provider.temperature"));
    }

    #[test]
    fn catches_zero_request_timeout() {
        let mut config = SolConfig::default();
        config.provider.request_timeout_secs = 0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("provider.request_timeout_secs"));
    }

    #[test]
    fn catches_non_http_base_url() {
        let mut config = SolConfig::default();
        config.provider.base_url = "ftp://example.com".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("provider.base_url"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = SolConfig::default();
        config.provider.max_tokens = 0;
        config.provider.api_key_env = String::new();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("provider.max_tokens"));
        assert!(err.contains("provider.api_key_env"));
    }
}
