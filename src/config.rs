//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configured endpoint
const ENDPOINT_ENV: &str = "CONTACT_FORM_ENDPOINT";

const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;
const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_RESET_DELAY_SECS: u64 = 5;

/// Which transport delivers submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Http,
    Simulated,
}

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Contact endpoint URL
    pub endpoint: Option<String>,
    /// Transport override; inferred from `endpoint` when unset
    pub transport: Option<TransportKind>,
    /// Delay used by the simulated transport
    pub simulated_delay_ms: Option<u64>,
    /// Upper bound on a single submission attempt
    pub submit_timeout_secs: Option<u64>,
    /// How long the confirmation stays before the form resets
    pub reset_delay_secs: Option<u64>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint from the environment, falling back to the config file
    pub fn endpoint(&self) -> Option<String> {
        Self::endpoint_with_env(self, std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_env(&self, env: Option<String>) -> Option<String> {
        env.filter(|e| !e.is_empty())
            .or_else(|| self.endpoint.clone().filter(|e| !e.is_empty()))
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.transport.unwrap_or(if self.endpoint().is_some() {
            TransportKind::Http
        } else {
            TransportKind::Simulated
        })
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms.unwrap_or(DEFAULT_SIMULATED_DELAY_MS))
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(
            self.submit_timeout_secs
                .unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS)
                .max(1),
        )
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs.unwrap_or(DEFAULT_RESET_DELAY_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.transport.is_none());
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
        assert_eq!(config.submit_timeout(), Duration::from_secs(15));
        assert_eq!(config.reset_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_serialization() {
        let config = ContactConfig {
            endpoint: Some("https://example.org/contact".to_string()),
            transport: Some(TransportKind::Http),
            simulated_delay_ms: Some(10),
            submit_timeout_secs: Some(30),
            reset_delay_secs: Some(2),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ContactConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("https://example.org/contact".to_string())
        );
        assert_eq!(parsed.transport, Some(TransportKind::Http));
        assert_eq!(parsed.simulated_delay(), Duration::from_millis(10));
        assert_eq!(parsed.submit_timeout(), Duration::from_secs(30));
        assert_eq!(parsed.reset_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"transport": "simulated", "unknown_field": "value"}"#;
        let parsed: ContactConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.transport, Some(TransportKind::Simulated));
    }

    #[test]
    fn test_env_overrides_file_endpoint() {
        let config = ContactConfig {
            endpoint: Some("http://file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_with_env(Some("http://env".to_string())),
            Some("http://env".to_string())
        );
        assert_eq!(
            config.endpoint_with_env(Some(String::new())),
            Some("http://file".to_string())
        );
        assert_eq!(
            config.endpoint_with_env(None),
            Some("http://file".to_string())
        );
    }

    #[test]
    fn test_explicit_transport_wins() {
        let config = ContactConfig {
            endpoint: Some("http://file".to_string()),
            transport: Some(TransportKind::Simulated),
            ..Default::default()
        };
        assert_eq!(config.transport_kind(), TransportKind::Simulated);
    }

    #[test]
    fn test_submit_timeout_never_zero() {
        let config = ContactConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.submit_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_returns_ok() {
        // Load should return default config when file doesn't exist
        let result = ContactConfig::load();
        assert!(result.is_ok());
    }
}
