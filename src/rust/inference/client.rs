use std::time::Duration;

use log::{debug, error, info};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::error::InferenceError;
use super::model::ClassificationResult;

/// Default bound on a single endpoint call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach one hosted classifier.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub url: String,
    pub api_key: Option<String>,
    /// Let the service answer from its own result cache
    pub use_cache: bool,
    /// Block on a cold model instead of failing with a loading error
    pub wait_for_model: bool,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            api_key,
            use_cache: true,
            wait_for_model: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    use_cache: bool,
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the hosted inference API.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(timeout: Duration) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `text` to the endpoint and decodes the returned distribution.
    ///
    /// Fails with [`InferenceError::Auth`] before any network traffic when
    /// the endpoint has no API key.
    pub async fn classify(
        &self,
        text: &str,
        endpoint: &EndpointConfig,
    ) -> Result<ClassificationResult, InferenceError> {
        let api_key = endpoint
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InferenceError::Auth("no API key configured (set HF_API_KEY)".into()))?;

        let payload = InferenceRequest {
            inputs: text,
            use_cache: endpoint.use_cache,
            wait_for_model: endpoint.wait_for_model,
        };

        info!("Querying {}", endpoint.url);
        debug!(
            "Payload: {} chars, use_cache={}, wait_for_model={}",
            text.len(),
            payload.use_cache,
            payload.wait_for_model
        );

        let response = self
            .http
            .post(&endpoint.url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", endpoint.url, e);
                InferenceError::Transport(e)
            })?;

        let status = response.status();
        debug!("Response status from {}: {}", endpoint.url, status);
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| body.trim().to_string());
            error!("{} answered {}: {}", endpoint.url, status, message);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InferenceError::Auth(message),
                _ => InferenceError::Service { status, message },
            });
        }

        if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(&body) {
            return Err(InferenceError::Service { status, message: error });
        }

        let result = ClassificationResult::from_json(&body)?;
        debug!("Decoded {} labels from {}", result.len(), endpoint.url);
        Ok(result)
    }
}
