//! Configuration handling for the demo

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use switchkraft::FormMode;

const DEFAULT_FIRST_NAME: &str = "John";
const DEFAULT_LAST_NAME: &str = "Doe";
const DEFAULT_EMAIL: &str = "john.doe@example.com";

/// User configuration for the demo form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    /// Open the form in Edit mode instead of View
    pub start_in_edit: Option<bool>,
    /// Initial first name
    pub first_name: Option<String>,
    /// Initial last name
    pub last_name: Option<String>,
    /// Initial email
    pub email: Option<String>,
}

impl DemoConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "switchkraft", "switchkraft")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: DemoConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn initial_mode(&self) -> FormMode {
        if self.start_in_edit.unwrap_or(false) {
            FormMode::Edit
        } else {
            FormMode::View
        }
    }

    pub fn first_name(&self) -> String {
        self.first_name
            .clone()
            .unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string())
    }

    pub fn last_name(&self) -> String {
        self.last_name
            .clone()
            .unwrap_or_else(|| DEFAULT_LAST_NAME.to_string())
    }

    pub fn email(&self) -> String {
        self.email
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert!(config.start_in_edit.is_none());
        assert!(config.first_name.is_none());
        assert!(config.last_name.is_none());
        assert!(config.email.is_none());
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let config = DemoConfig::default();
        assert_eq!(config.initial_mode(), FormMode::View);
        assert_eq!(config.first_name(), "John");
        assert_eq!(config.last_name(), "Doe");
        assert_eq!(config.email(), "john.doe@example.com");
    }

    #[test]
    fn test_start_in_edit() {
        let config = DemoConfig {
            start_in_edit: Some(true),
            ..Default::default()
        };
        assert_eq!(config.initial_mode(), FormMode::Edit);
    }

    #[test]
    fn test_serialization() {
        let config = DemoConfig {
            start_in_edit: Some(false),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DemoConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.start_in_edit, Some(false));
        assert_eq!(parsed.first_name(), "Ada");
        assert_eq!(parsed.last_name(), "Lovelace");
        assert_eq!(parsed.email(), "ada@example.com");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: DemoConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_name.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"first_name": "Grace", "unknown_field": "value"}"#;
        let parsed: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_name(), "Grace");
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "switchkraft-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = DemoConfig::load_from(&path).unwrap();
        assert!(config.first_name.is_none());
        assert_eq!(config.initial_mode(), FormMode::View);
    }

    #[test]
    fn test_load_reads_file() {
        let path = temp_config_path("present");
        fs::write(&path, r#"{"start_in_edit": true, "email": "ada@example.com"}"#).unwrap();

        let config = DemoConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.initial_mode(), FormMode::Edit);
        assert_eq!(config.email(), "ada@example.com");
        assert_eq!(config.first_name(), "John");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let path = temp_config_path("invalid");
        fs::write(&path, "not json").unwrap();

        let result = DemoConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
