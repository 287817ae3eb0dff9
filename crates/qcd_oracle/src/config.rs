//! Oracle configuration
//!
//! Gantree: L5_Oracle → OracleConfig
//!
//! Credentials and sampling settings for the chat-completions oracle.
//! Sources (in priority order):
//! 1. Environment variables (`QCD_OPENAI_API_KEY`, `OPENAI_API_KEY`)
//! 2. Explicit values via the `with_*` builders

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default chat-completions endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Token limit and temperature for one kind of request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sampling {
    /// Completion token limit
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Sampling {
    /// Create sampling settings
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// Oracle configuration
/// Gantree: OracleConfig // 오라클 설정
#[derive(Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// API key; never serialized
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Endpoint root, without trailing slash
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Circuit generation
    pub generation: Sampling,

    /// Circuit analysis
    pub analysis: Sampling,

    /// Improvement suggestions
    pub suggestions: Sampling,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            generation: Sampling::new(1000, 0.7),
            analysis: Sampling::new(500, 0.7),
            suggestions: Sampling::new(300, 0.8),
            timeout_secs: 60,
        }
    }
}

impl OracleConfig {
    /// Defaults plus whatever the environment provides
    /// Gantree: from_env() -> Self // 환경 변수
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(key) = env_non_empty("QCD_OPENAI_API_KEY").or_else(|| env_non_empty("OPENAI_API_KEY")) {
            config.api_key = Some(key);
        }
        if let Some(model) = env_non_empty("QCD_ORACLE_MODEL") {
            config.model = model;
        }
        if let Some(url) = env_non_empty("QCD_ORACLE_BASE_URL") {
            config = config.with_base_url(url);
        }

        if config.api_key.is_some() {
            log::info!("Oracle configured from environment (model {})", config.model);
        } else {
            log::info!("No oracle API key in environment");
        }
        config
    }

    /// Set API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set endpoint root
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check if an API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Chat-completions URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("generation", &self.generation)
            .field("analysis", &self.analysis)
            .field("suggestions", &self.suggestions)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
