//! Translation provider client

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{LanguageInfo, SourceLanguage};

/// Boundary for a single text-translation call.
///
/// One implementor call translates one text; no retries, no caching.
pub trait TranslateText {
    /// Translate `text` from `source` into the `target` language tag
    fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Request body for the provider translate endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: Vec<&'a str>,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationsPayload,
}

#[derive(Debug, Deserialize)]
struct TranslationsPayload {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    data: LanguagesPayload,
}

#[derive(Debug, Deserialize)]
struct LanguagesPayload {
    languages: Vec<LanguageInfo>,
}

/// HTTP client for the translation provider
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl TranslationClient {
    /// Create a new translation client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Send one translate request to the provider
    async fn send_request(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<String> {
        let body = TranslateRequest {
            q: vec![text],
            target,
            format: "text",
            source: source.tag(),
        };

        let response = self
            .client
            .post(&self.config.api_endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(TranslationError::RateLimitError { retry_after });
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "No translation in response".to_string(),
            })
    }

    /// List the language tags the provider supports
    pub async fn supported_languages(&self) -> Result<Vec<LanguageInfo>> {
        let response = self
            .client
            .get(self.config.languages_endpoint())
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("target", "en"),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: LanguagesResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        Ok(parsed.data.languages)
    }
}

impl TranslateText for TranslationClient {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<String> {
        self.send_request(text, source, target).await
    }
}
