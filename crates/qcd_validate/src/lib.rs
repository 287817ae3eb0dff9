//! # QCD Validate
//!
//! Normalization of untrusted circuit payloads (oracle replies, imported files).
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_validate // L2: Validation (완료)
//!     Payload // 원문 → JSON 객체 (완료)
//!         extract_object // 직접 파싱 + 중괄호 추출 (완료)
//!         into_object // 객체 여부 확인 (완료)
//!     Normalizer // 모델 불변식 맞추기 (완료)
//!         Validator // 기본 이름별 검증기 (완료)
//!         ValidationReport // 변경 내역 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qcd_validate::prelude::*;
//!
//! let raw = r#"Here you go: {"qubits": 3, "gates": [{"type": "BOGUS", "qubit": 5, "time": 0}]}"#;
//! let out = Validator::for_generated().validate_str(raw).unwrap();
//!
//! assert_eq!(out.circuit.qubits(), 3);
//! assert_eq!(out.circuit.gates()[0].qubit, 2);
//! assert_eq!(out.report.coerced_types.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Raw payload extraction (Gantree: L2_Validation → Payload)
pub mod payload;

/// Normalizer (Gantree: L2_Validation → Normalizer)
pub mod normalize;

// ============================================================================
// Re-exports
// ============================================================================

pub use normalize::{validate, CoercedType, Validated, ValidationReport, Validator};
pub use payload::{extract_object, into_object};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::normalize::{validate, CoercedType, Validated, ValidationReport, Validator};
    pub use crate::payload::extract_object;
    pub use qcd_core::prelude::*;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
