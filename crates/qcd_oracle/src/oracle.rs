//! Oracle contract
//!
//! Gantree: L5_Oracle → CircuitOracle
//!
//! The generative/analysis service is opaque and untrusted. Generation
//! returns raw text; the caller must run it through the validator before
//! it becomes a circuit.

use crate::analysis::CircuitAnalysis;
use crate::error::OracleError;
use async_trait::async_trait;
use qcd_core::Circuit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the prompt describes a new circuit or edits the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Build from scratch
    #[default]
    Generate,
    /// Modify the current circuit
    Modify,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Generate => write!(f, "generate"),
            GenerationMode::Modify => write!(f, "modify"),
        }
    }
}

/// Inputs of one generation call, captured when the request is issued
/// Gantree: GenerationRequest // 생성 요청
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language description
    pub prompt: String,
    /// Generate or modify
    pub mode: GenerationMode,
    /// Circuit at request time (used in modify mode)
    pub current: Option<Circuit>,
}

impl GenerationRequest {
    /// Request a fresh circuit
    pub fn generate(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Generate,
            current: None,
        }
    }

    /// Request a modification of `current`
    pub fn modify(prompt: impl Into<String>, current: Circuit) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Modify,
            current: Some(current),
        }
    }

    /// Circuit to modify, if this is a modify request that carries one
    pub fn circuit_to_modify(&self) -> Option<&Circuit> {
        match self.mode {
            GenerationMode::Modify => self.current.as_ref(),
            GenerationMode::Generate => None,
        }
    }
}

/// Generative and analysis service
/// Gantree: CircuitOracle // 오라클 trait
#[async_trait]
pub trait CircuitOracle: Send + Sync {
    /// Oracle name for logs
    fn name(&self) -> &str;

    /// Raw circuit-shaped text for a prompt
    async fn request_generation(&self, request: &GenerationRequest) -> Result<String, OracleError>;

    /// Structured analysis of a circuit
    async fn request_analysis(&self, circuit: &Circuit) -> Result<CircuitAnalysis, OracleError>;

    /// Up to three improvement suggestions
    async fn request_suggestions(&self, circuit: &Circuit) -> Result<Vec<String>, OracleError>;
}

/// Try `primary`, then `secondary` on any failure
/// Gantree: FallbackOracle // 대체 오라클
pub struct FallbackOracle<P, S> {
    primary: P,
    secondary: S,
}

impl<P: CircuitOracle, S: CircuitOracle> FallbackOracle<P, S> {
    /// Chain two oracles
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P: CircuitOracle, S: CircuitOracle> CircuitOracle for FallbackOracle<P, S> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    async fn request_generation(&self, request: &GenerationRequest) -> Result<String, OracleError> {
        match self.primary.request_generation(request).await {
            Ok(raw) => Ok(raw),
            Err(err) => {
                log::warn!(
                    "{} generation failed ({}), using {}",
                    self.primary.name(),
                    err,
                    self.secondary.name()
                );
                self.secondary.request_generation(request).await
            }
        }
    }

    async fn request_analysis(&self, circuit: &Circuit) -> Result<CircuitAnalysis, OracleError> {
        match self.primary.request_analysis(circuit).await {
            Ok(analysis) => Ok(analysis),
            Err(err) => {
                log::warn!("{} analysis failed: {}", self.primary.name(), err);
                self.secondary.request_analysis(circuit).await
            }
        }
    }

    async fn request_suggestions(&self, circuit: &Circuit) -> Result<Vec<String>, OracleError> {
        match self.primary.request_suggestions(circuit).await {
            Ok(list) => Ok(list),
            Err(err) => {
                log::warn!("{} suggestions failed: {}", self.primary.name(), err);
                self.secondary.request_suggestions(circuit).await
            }
        }
    }
}
