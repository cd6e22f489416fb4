//! Remote backend connection values.
//!
//! The surrounding application owns where these come from (env, a config
//! file, build-time injection). This layer only asks one question of them:
//! is a remote backend actually configured?

/// Endpoint URL and access credential for the hosted backend.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl BackendConfig {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self { endpoint, api_key }
    }

    /// True when both values are present, non-empty, and not placeholders.
    /// Shipped `.env` templates use `YOUR_…` placeholders, which must not
    /// count as configured.
    pub fn is_configured(&self) -> bool {
        fn usable(value: &Option<String>) -> bool {
            value
                .as_deref()
                .map(str::trim)
                .is_some_and(|v| !v.is_empty() && !v.starts_with("YOUR_"))
        }
        usable(&self.endpoint) && usable(&self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, key: &str) -> BackendConfig {
        BackendConfig::new(Some(endpoint.to_string()), Some(key.to_string()))
    }

    #[test]
    fn test_full_config_is_configured() {
        assert!(config("https://backend.example.com", "sk-abc123").is_configured());
    }

    #[test]
    fn test_missing_or_empty_values() {
        assert!(!BackendConfig::default().is_configured());
        assert!(!config("", "sk-abc123").is_configured());
        assert!(!config("https://backend.example.com", "  ").is_configured());
        assert!(
            !BackendConfig::new(Some("https://backend.example.com".into()), None).is_configured()
        );
    }

    #[test]
    fn test_placeholders_do_not_count() {
        assert!(!config("YOUR_BACKEND_URL", "sk-abc123").is_configured());
        assert!(!config("https://backend.example.com", "YOUR_API_KEY").is_configured());
    }
}
