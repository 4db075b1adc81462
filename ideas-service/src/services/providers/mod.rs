//! Text generation provider abstraction.
//!
//! The handler only sees `TextProvider`, so the Gemini client can be swapped
//! for the recording mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("Backend API Error: Failed to connect to Gemini: {0}")]
    Network(String),

    #[error("Backend API Error: Gemini returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Backend API Error: Could not decode Gemini response: {0}")]
    Decode(String),

    #[error("Backend API Error: Unexpected Gemini response format.")]
    UnexpectedFormat,

    #[error("Gemini API did not return expected content.")]
    EmptyResponse,
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AppError::ConfigError(anyhow::anyhow!(msg)),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

/// Result of a provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Text of the first candidate.
    pub text: String,

    pub input_tokens: Option<i32>,

    pub output_tokens: Option<i32>,

    pub finish_reason: Option<String>,
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue a single generation call. Implementations never retry.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Cheap readiness check; must not call the upstream API.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn missing_credential_maps_to_500_config_error() {
        let err: AppError = ProviderError::NotConfigured("key missing".to_string()).into();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Configuration error: key missing");
    }

    #[test]
    fn upstream_failures_map_to_500_with_message() {
        let err: AppError = ProviderError::Network("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            AppError::Upstream(msg) => {
                assert_eq!(msg, "Backend API Error: Failed to connect to Gemini: connection refused")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
