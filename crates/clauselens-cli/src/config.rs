//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API connection settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API key (flag and environment take precedence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clauselens").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the API key: explicit flag/env first, then the config file.
    pub fn resolve_api_key(&self, flag_key: Option<String>) -> Result<String> {
        flag_key
            .or_else(|| self.api.api_key.clone())
            .filter(|key| !key.is_empty())
            .ok_or(CliError::MissingApiKey)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_endpoint() -> String {
    clauselens_llm::openai::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    clauselens_llm::openai::DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    clauselens_llm::openai::DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.api.model, default_model());
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_resolve_api_key_prefers_flag() {
        let mut config = Config::default();
        config.api.api_key = Some("from-config".to_string());

        let key = config.resolve_api_key(Some("from-flag".to_string())).unwrap();
        assert_eq!(key, "from-flag");
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_config() {
        let mut config = Config::default();
        config.api.api_key = Some("from-config".to_string());

        let key = config.resolve_api_key(None).unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_api_key(None),
            Err(CliError::MissingApiKey)
        ));
        assert!(matches!(
            config.resolve_api_key(Some(String::new())),
            Err(CliError::MissingApiKey)
        ));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.api.model = "gpt-4o-mini".to_string();
        config.settings.color = false;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.model, "gpt-4o-mini");
        assert!(!parsed.settings.color);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[api]\nmodel = \"gpt-4o\"\n").unwrap();
        assert_eq!(parsed.api.model, "gpt-4o");
        assert_eq!(parsed.api.endpoint, default_endpoint());
        assert!(parsed.settings.color);
    }
}
