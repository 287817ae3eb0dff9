//! # QCD Oracle
//!
//! Generative circuit and analysis service integration.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_oracle // L5: Oracle (완료)
//!     CircuitOracle // async trait (완료)
//!         GenerationRequest // 요청 스냅샷 (완료)
//!         FallbackOracle // 실패 시 대체 (완료)
//!     OracleConfig // 키/모델/샘플링 (완료)
//!     Client // chat-completions HTTP (완료)
//!     TemplateOracle // 오프라인 키워드 템플릿 (완료)
//!     Prompt // 프롬프트 + 회로 요약 (완료)
//!     Analysis // 응답 파싱 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qcd_oracle::prelude::*;
//!
//! let oracle = FallbackOracle::new(OpenAiOracle::from_env()?, TemplateOracle::new());
//! let raw = oracle
//!     .request_generation(&GenerationRequest::generate("a bell state"))
//!     .await?;
//! // `raw` is untrusted text: validate it before use
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! export QCD_OPENAI_API_KEY="sk-..."      # or OPENAI_API_KEY
//! export QCD_ORACLE_MODEL="gpt-4"          # Optional
//! export QCD_ORACLE_BASE_URL="https://api.openai.com/v1"  # Optional
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Error types (Gantree: L5_Oracle → Errors)
pub mod error;

/// Configuration (Gantree: L5_Oracle → OracleConfig)
pub mod config;

/// Oracle trait (Gantree: L5_Oracle → CircuitOracle)
pub mod oracle;

/// Analysis parsing (Gantree: L5_Oracle → Analysis)
pub mod analysis;

/// Prompt construction (Gantree: L5_Oracle → Prompt)
pub mod prompt;

/// HTTP client (Gantree: L5_Oracle → Client)
pub mod client;

/// Offline templates (Gantree: L5_Oracle → TemplateOracle)
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use analysis::{
    parse_analysis, parse_suggestions, CircuitAnalysis, MAX_SUGGESTIONS, SUGGESTIONS_UNAVAILABLE,
};
pub use client::OpenAiOracle;
pub use config::{OracleConfig, Sampling};
pub use error::OracleError;
pub use oracle::{CircuitOracle, FallbackOracle, GenerationMode, GenerationRequest};
pub use prompt::describe_circuit;
pub use template::TemplateOracle;

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::CircuitAnalysis;
    pub use crate::client::OpenAiOracle;
    pub use crate::config::OracleConfig;
    pub use crate::error::OracleError;
    pub use crate::oracle::{CircuitOracle, FallbackOracle, GenerationMode, GenerationRequest};
    pub use crate::template::TemplateOracle;
}

// ============================================================================
// Integration Tests
// ============================================================================
