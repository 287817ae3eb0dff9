//! Oracle errors
//!
//! Gantree: L5_Oracle → Errors

use qcd_core::QcdError;
use thiserror::Error;

/// Oracle call failures. Every variant is a hard failure for the caller.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No API key configured
    #[error("OpenAI API key not configured. Set QCD_OPENAI_API_KEY or OPENAI_API_KEY")]
    MissingApiKey,

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Authentication rejected
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// API error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimited {
        /// Seconds to wait before retry
        retry_after: u64,
    },

    /// The reply had no content
    #[error("No response from the oracle")]
    EmptyResponse,

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reply does not have the expected shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// The oracle does not offer this request
    #[error("Not supported by this oracle: {0}")]
    Unsupported(&'static str),
}

impl OracleError {
    /// Check if retrying later may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            OracleError::RateLimited { .. } => true,
            OracleError::Api { code, .. } => *code >= 500,
            OracleError::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

impl From<OracleError> for QcdError {
    fn from(err: OracleError) -> Self {
        QcdError::Oracle(err.to_string())
    }
}
