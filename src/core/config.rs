//! Configuration management

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TranslationError};

/// Default provider endpoint (Google Cloud Translation v2)
const DEFAULT_API_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Configuration for the translation client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub api_key: String,
    pub api_endpoint: String,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TRANSLATE_API_KEY").unwrap_or_default(),
            api_endpoint: std::env::var("TRANSLATE_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TRANSLATE_API_KEY").map_err(|_| {
            TranslationError::ConfigError {
                message: "TRANSLATE_API_KEY environment variable is required".to_string(),
            }
        })?;

        let api_endpoint = std::env::var("TRANSLATE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("Invalid REQUEST_TIMEOUT_MS: {}", e),
            })?;

        Ok(Self {
            api_key,
            api_endpoint,
            timeout_ms,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Endpoint for the supported-languages listing
    pub fn languages_endpoint(&self) -> String {
        format!("{}/languages", self.api_endpoint.trim_end_matches('/'))
    }
}
