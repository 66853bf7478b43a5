//! Configuration for the Analyzer

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum contract text length (characters)
    pub max_text_length: usize,

    /// Maximum rewrite input length (characters)
    pub max_clause_length: usize,

    /// Maximum time for a single model call (seconds)
    pub request_timeout_secs: u64,
}

impl AnalyzerConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_text_length == 0 {
            return Err(EngineError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        if self.max_clause_length == 0 {
            return Err(EngineError::Config(
                "max_clause_length must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(EngineError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for AnalyzerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            max_clause_length: 8_000,
            request_timeout_secs: 180,
        }
    }
}
