//! Configuration handling for the TUI

use crate::api::DEFAULT_ADDRESS;
use crate::state::ProfileUpdate;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the profile service address
pub const ADDRESS_ENV: &str = "PROFILE_API_ADDRESS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Profile service address
    pub api_address: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Profile shown when the service cannot be reached at startup
    pub default_profile: Option<ProfileUpdate>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "profile", "profile-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the service address: environment, then config, then default
    pub fn resolve_address(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_address.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.default_profile.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_address: Some("http://localhost:50061".to_string()),
            request_timeout_secs: Some(3),
            default_profile: Some(ProfileUpdate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_address, Some("http://localhost:50061".to_string()));
        assert_eq!(parsed.request_timeout_secs, Some(3));
        assert_eq!(parsed.default_profile, config.default_profile);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_address": "http://h:1", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_address, Some("http://h:1".to_string()));
    }

    #[test]
    fn test_partial_default_profile_rejected() {
        let json = r#"{"default_profile": {"name": "Alice"}}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_resolve_address_precedence() {
        let config = TuiConfig {
            api_address: Some("http://config:1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_address(Some("http://env:1".to_string())),
            "http://env:1"
        );
        assert_eq!(config.resolve_address(Some(String::new())), "http://config:1");
        assert_eq!(config.resolve_address(None), "http://config:1");
        assert_eq!(TuiConfig::default().resolve_address(None), DEFAULT_ADDRESS);
    }

    #[test]
    fn test_request_timeout_defaults() {
        assert_eq!(TuiConfig::default().request_timeout(), Duration::from_secs(10));
        let zero = TuiConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_returns_ok_without_file() {
        // Load should return default config when file doesn't exist
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TuiConfig {
            request_timeout_secs: Some(5),
            default_profile: Some(ProfileUpdate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();

        assert_eq!(loaded.request_timeout_secs, Some(5));
        assert_eq!(loaded.default_profile, config.default_profile);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TuiConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.api_address.is_none());
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }
}
