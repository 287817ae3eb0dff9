//! # QCD Core
//!
//! Gate and circuit data model for the Quantum Circuit Designer editing engine.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_core // L0+L1: Foundation + Model (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // ids, Cell, aliases (완료)
//!         Constants // 범위/이름/그리드 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Model // 회로 모델 (완료)
//!         Gate // GateType + Gate + Measurement (완료)
//!         Circuit // 회로 구조체 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qcd_core::prelude::*;
//!
//! // Bell pair: H on q0 at t0, CNOT q0 -> q1 at t1
//! let circuit = CircuitBuilder::new(2)
//!     .h(0, 0)
//!     .cnot(0, 1, 1)
//!     .build();
//!
//! assert_eq!(circuit.depth(), 2);
//! assert_eq!(circuit.gate_type_count(), 2);
//! println!("{}", circuit.to_qasm());
//! ```
//!
//! ## Invariants
//!
//! ```rust
//! use qcd_core::prelude::*;
//!
//! let mut circuit = Circuit::new(2);
//! let gate = Gate::new(GateType::X, Cell::new(3, 0));
//! assert!(circuit.insert_gate(gate).is_err()); // wire 3 does not exist
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Gates (Gantree: L1_Model → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Model → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Model → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::{Circuit, GateSignature};
pub use constants::{grid, limits, names};
pub use error::{QcdError, QcdResult};
pub use gate::{Gate, GateType, Measurement};
pub use types::{Angle, Cell, CircuitId, GateId, MeasurementBasis, Parameters, QubitId, TimeStep};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qcd_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::{Circuit, GateSignature};
    pub use crate::constants::{grid, limits, names};
    pub use crate::error::{QcdError, QcdResult};
    pub use crate::gate::{Gate, GateType, Measurement};
    pub use crate::types::{
        Angle, Cell, CircuitId, GateId, MeasurementBasis, Parameters, QubitId, TimeStep,
    };
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_bell_scenario() {
        let circuit = CircuitBuilder::new(2).h(0, 0).cnot(0, 1, 1).build();

        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.gate_type_count(), 2);
        assert!(circuit.check_invariants().is_ok());
    }

    #[test]
    fn test_palette_covers_all_types() {
        assert_eq!(GateType::ALL.len(), 11);
        for t in GateType::ALL {
            assert_eq!(GateType::parse(t.symbol()), Some(t));
            assert!(!t.description().is_empty());
        }
    }

    #[test]
    fn test_export_shape_matches_wire_format() {
        let circuit = CircuitBuilder::with_name(3, "Wire format")
            .rx(2, 1, 0.25)
            .cnot(0, 1, 0)
            .measurement(2, 2, MeasurementBasis::Computational)
            .build();

        let v: serde_json::Value = serde_json::from_str(&circuit.to_json().unwrap()).unwrap();
        assert!(v["id"].is_string());
        assert_eq!(v["name"], "Wire format");
        assert_eq!(v["qubits"], 3);

        let first = &v["gates"][0];
        assert_eq!(first["type"], "CNOT");
        assert_eq!(first["controlQubit"], 0);
        assert_eq!(v["gates"][1]["parameters"]["angle"], 0.25);
        assert_eq!(v["measurements"][0]["basis"], "computational");
    }

    #[test]
    fn test_depth_ignores_insertion_order() {
        let mut circuit = Circuit::new(3);
        circuit
            .insert_gate(Gate::new(GateType::Z, Cell::new(2, 9)))
            .unwrap();
        circuit
            .insert_gate(Gate::new(GateType::H, Cell::new(0, 0)))
            .unwrap();
        assert_eq!(circuit.depth(), 10);
    }
}
