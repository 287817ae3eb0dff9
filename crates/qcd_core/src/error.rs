//! Error types for QCD
//!
//! Gantree: L0_Foundation → Errors
//!
//! Workspace-wide error type. Recoverable conditions (dropped entries,
//! clamped fields, no-op edits) never surface here; only hard failures and
//! programming errors do.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QCD
/// Gantree: QcdError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QcdError {
    // ========================================================================
    // Payload Errors
    // ========================================================================
    /// External payload is not a structure at all
    /// Gantree: MalformedPayload(String) // 하드 실패
    #[error("Malformed circuit payload: {0}")]
    MalformedPayload(String),

    // ========================================================================
    // Model Errors
    // ========================================================================
    /// Gate references a wire outside the circuit
    /// Gantree: QubitOutOfRange{{qubit,qubits}} // 큐비트 범위
    #[error("Qubit {qubit} out of range: circuit has {qubits} qubits")]
    QubitOutOfRange { qubit: usize, qubits: usize },

    /// Requested qubit count outside [1, max]
    #[error("Qubit count {requested} out of range [1, {max}]")]
    QubitCountOutOfRange { requested: usize, max: usize },

    /// Two gates share an id
    #[error("Duplicate gate id '{0}'")]
    DuplicateGateId(String),

    /// Strict gate type parsing failed
    #[error("Unknown gate type '{0}'")]
    UnknownGateType(String),

    /// Operation needs at least one gate
    #[error("Circuit is empty")]
    EmptyCircuit,

    // ========================================================================
    // Collaborator Errors
    // ========================================================================
    /// Generative/analysis service failure
    /// Gantree: Oracle(String) // 오라클
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for QCD operations
/// Gantree: QcdResult<T> // type alias
pub type QcdResult<T> = Result<T, QcdError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QcdError {
    fn from(err: serde_json::Error) -> Self {
        QcdError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QcdError {
    fn from(err: std::io::Error) -> Self {
        QcdError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QcdError {
    /// Check if the caller should substitute a default circuit
    pub fn is_hard_failure(&self) -> bool {
        matches!(self, QcdError::MalformedPayload(_) | QcdError::Oracle(_))
    }

    /// Check if error is a data model violation
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            QcdError::QubitOutOfRange { .. }
                | QcdError::QubitCountOutOfRange { .. }
                | QcdError::DuplicateGateId(_)
                | QcdError::UnknownGateType(_)
                | QcdError::EmptyCircuit
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QcdError::QubitOutOfRange {
            qubit: 12,
            qubits: 3,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_is_hard_failure() {
        assert!(QcdError::MalformedPayload("not json".into()).is_hard_failure());
        assert!(QcdError::Oracle("timeout".into()).is_hard_failure());
        assert!(!QcdError::EmptyCircuit.is_hard_failure());
    }

    #[test]
    fn test_is_model_error() {
        assert!(QcdError::DuplicateGateId("gate-1".into()).is_model_error());
        assert!(!QcdError::Config("bad".into()).is_model_error());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(QcdError::from(err), QcdError::JsonError(_)));
    }
}
