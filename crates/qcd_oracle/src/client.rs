//! Chat-completions oracle client
//!
//! Gantree: L5_Oracle → Client

use crate::analysis::{parse_analysis, parse_suggestions, CircuitAnalysis};
use crate::config::{OracleConfig, Sampling};
use crate::error::OracleError;
use crate::oracle::{CircuitOracle, GenerationRequest};
use crate::prompt::{
    analysis_prompt, generation_prompt, suggestions_prompt, ANALYSIS_SYSTEM_PROMPT,
    GENERATION_SYSTEM_PROMPT, SUGGESTIONS_SYSTEM_PROMPT,
};
use async_trait::async_trait;
use qcd_core::Circuit;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire Types
// ============================================================================

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" or "user"
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    fn user(content: String) -> Self {
        Self {
            role: "user".into(),
            content,
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Conversation
    pub messages: Vec<ChatMessage>,
    /// Completion token limit
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Chat-completions response body (fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completions
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: Option<ChatReply>,
}

/// Generated message
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Text, absent for tool calls
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice; empty or missing content is an error
    pub fn first_content(self) -> Result<String, OracleError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(OracleError::EmptyResponse)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Oracle backed by an OpenAI-compatible chat-completions endpoint
/// Gantree: OpenAiOracle // HTTP 오라클
#[derive(Clone)]
pub struct OpenAiOracle {
    /// HTTP client
    client: reqwest::Client,

    /// Endpoint, model and sampling settings
    config: OracleConfig,
}

impl OpenAiOracle {
    /// Create a client. A missing API key is reported on the first request.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("qcd-oracle/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self, OracleError> {
        Self::new(OracleConfig::from_env())
    }

    /// Get configuration
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Build a request body
    pub fn chat_request(&self, system: &str, user: String, sampling: Sampling) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        }
    }

    /// Send one chat request and return the first choice's text
    pub async fn chat(&self, body: &ChatRequest) -> Result<String, OracleError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(OracleError::MissingApiKey)?;

        log::debug!(
            "POST {} (model {}, max_tokens {})",
            self.config.completions_url(),
            body.model,
            body.max_tokens
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .header(AUTHORIZATION, format!("Bearer {}", key))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            let parsed: ChatResponse = serde_json::from_str(&text)?;
            parsed.first_content()
        } else {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            let text = response.text().await.unwrap_or_default();
            Err(status_error(status.as_u16(), retry_after.as_deref(), text))
        }
    }
}

/// Map a non-success status to an error
pub fn status_error(code: u16, retry_after: Option<&str>, body: String) -> OracleError {
    match code {
        401 | 403 => OracleError::Unauthorized(if body.is_empty() {
            "Invalid or expired API key".to_string()
        } else {
            body
        }),
        429 => OracleError::RateLimited {
            retry_after: retry_after.and_then(|s| s.trim().parse().ok()).unwrap_or(60),
        },
        _ => OracleError::Api {
            code,
            message: body,
        },
    }
}

#[async_trait]
impl CircuitOracle for OpenAiOracle {
    fn name(&self) -> &str {
        "openai"
    }

    async fn request_generation(&self, request: &GenerationRequest) -> Result<String, OracleError> {
        let body = self.chat_request(
            GENERATION_SYSTEM_PROMPT,
            generation_prompt(request),
            self.config.generation,
        );
        self.chat(&body).await
    }

    async fn request_analysis(&self, circuit: &Circuit) -> Result<CircuitAnalysis, OracleError> {
        let body = self.chat_request(
            ANALYSIS_SYSTEM_PROMPT,
            analysis_prompt(circuit),
            self.config.analysis,
        );
        let text = self.chat(&body).await?;
        Ok(parse_analysis(&text))
    }

    async fn request_suggestions(&self, circuit: &Circuit) -> Result<Vec<String>, OracleError> {
        let body = self.chat_request(
            SUGGESTIONS_SYSTEM_PROMPT,
            suggestions_prompt(circuit),
            self.config.suggestions,
        );
        let text = self.chat(&body).await?;
        Ok(parse_suggestions(&text))
    }
}
