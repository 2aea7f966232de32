use crate::retry::RetryPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub base_delay_ms: u64,
    /// Backoff multiplier per subsequent attempt.
    pub factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            base_delay_ms: policy.base_delay.as_millis() as u64,
            factor: policy.factor,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
            factor: self.factor,
        }
    }
}

/// Client configuration loaded from `~/.config/backstop/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Optional retry policy; if missing, the built-in default is used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl ClientConfig {
    /// The effective retry policy: the `[retry]` section when present,
    /// otherwise `RetryPolicy::default()`.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("backstop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ClientConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_retry_section() {
        let cfg = ClientConfig::default();
        assert!(cfg.retry.is_none());
        assert_eq!(cfg.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn retry_section_defaults_match_named_policy() {
        let section = RetryConfig::default();
        assert_eq!(section.max_attempts, 3);
        assert_eq!(section.base_delay_ms, 1000);
        assert_eq!(section.factor, 2.0);
        assert_eq!(section.to_policy(), RetryPolicy::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ClientConfig {
            retry: Some(RetryConfig::default()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ClientConfig = toml::from_str(&toml).unwrap();
        let retry = parsed.retry.unwrap();
        assert_eq!(retry.max_attempts, 3);
        assert_eq!(retry.base_delay_ms, 1000);
    }

    #[test]
    fn config_toml_custom_retry_values() {
        let toml = r#"
            [retry]
            max_attempts = 5
            base_delay_ms = 250
            factor = 1.5
        "#;
        let cfg: ClientConfig = toml::from_str(toml).unwrap();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
        assert!((policy.factor - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_config_parses() {
        let cfg: ClientConfig = toml::from_str("").unwrap();
        assert!(cfg.retry.is_none());
    }
}
