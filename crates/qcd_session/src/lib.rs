//! # QCD Session
//!
//! Single-user editing session over a quantum circuit.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_session // L6: Session (완료)
//!     SessionConfig // 캔버스/기본값 설정 (완료)
//!         from_file(), auto_load()
//!         with_grid(), with_move_policy()
//!     EditingSession // 편집 세션 (완료)
//!         add_gate(), remove_gate(), move_gate() // 배치 엔진 경유
//!         update_gate_parameters(), set_control_qubit()
//!         set_qubit_count(), rename(), clear(), duplicate(), new_circuit()
//!         undo(), redo() // 히스토리 커서
//!         import_circuit(), export_circuit(), export_qasm()
//!         click(), preview() // 포인터 입력
//!         generate(), analyze() // 오라클 경유
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qcd_session::prelude::*;
//!
//! let mut session = EditingSession::default();
//! session.add_gate(GateType::H, 0, 0);
//! session.add_controlled_gate(GateType::Cnot, 1, 1, 0);
//! assert_eq!(session.circuit().depth(), 2);
//!
//! session.undo();
//! assert_eq!(session.circuit().gate_count(), 1);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Configuration (Gantree: L6_Session → SessionConfig)
pub mod config;

/// Editing session (Gantree: L6_Session → EditingSession)
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{SessionConfig, CONFIG_ENV_VAR};
pub use session::{AnalysisReport, EditingSession};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::session::{AnalysisReport, EditingSession};
    pub use qcd_core::prelude::*;
    pub use qcd_oracle::prelude::*;
    pub use qcd_placement::{GridGeometry, MovePolicy};
    pub use qcd_validate::ValidationReport;
}

// ============================================================================
// Version Info
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_bell_scenario() {
        let mut s = EditingSession::default();
        assert!(s.add_gate(GateType::H, 0, 0));
        assert!(s.add_controlled_gate(GateType::Cnot, 1, 1, 0));

        let c = s.circuit();
        assert_eq!(c.depth(), 2);
        assert_eq!(c.gate_type_count(), 2);
        assert_eq!(s.history_len(), 3);
        assert!(s.export_qasm().contains("cx q[0],q[1];"));
    }

    #[test]
    fn test_double_add_is_noop() {
        let mut s = EditingSession::default();
        assert!(s.add_gate(GateType::X, 1, 4));
        let before = s.snapshot();
        assert!(!s.add_gate(GateType::Z, 1, 4));
        assert!(Arc::ptr_eq(&before, &s.snapshot()));
        assert_eq!(s.history_len(), 2);
    }

    #[test]
    fn test_bogus_import_scenario() {
        let mut s = EditingSession::default();
        let report = s
            .import_circuit(
                r#"{"name": "Imported", "qubits": 2,
                    "gates": [{"type": "BOGUS", "qubit": 7, "time": -3}]}"#,
            )
            .unwrap();

        let gate = &s.circuit().gates()[0];
        assert_eq!(gate.gate_type, GateType::H);
        assert_eq!(gate.cell(), Cell::new(1, 0));
        assert!(!report.is_clean());
        assert!(s.circuit().check_invariants().is_ok());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut s = EditingSession::default();
        s.add_gate(GateType::H, 0, 0);
        s.add_gate(GateType::Rz, 1, 2);
        let id = s.circuit().gates()[1].id.clone();
        let mut params = Parameters::new();
        params.insert("angle".into(), 0.75);
        s.update_gate_parameters(&id, params);

        let exported = s.export_circuit().unwrap();
        let mut other = EditingSession::default();
        let report = other.import_circuit(&exported).unwrap();
        assert!(report.is_clean());
        assert!(other.circuit().same_content(s.circuit()));
        assert_eq!(other.circuit().id(), s.circuit().id());
    }

    #[test]
    fn test_undo_redo_at_ends() {
        let mut s = EditingSession::default();
        assert!(!s.undo());
        assert!(!s.redo());
        s.add_gate(GateType::H, 0, 0);
        assert!(s.undo());
        assert!(!s.undo());
        assert!(s.redo());
        assert!(!s.redo());
    }

    #[tokio::test]
    async fn test_offline_generation_chain() {
        let oracle = FallbackOracle::new(
            OpenAiOracle::new(OracleConfig::default()).unwrap(),
            TemplateOracle::new(),
        );
        let mut s = EditingSession::default();
        s.generate(&oracle, "quantum fourier transform", GenerationMode::Generate)
            .await
            .unwrap();
        assert_eq!(s.circuit().qubits(), 3);
        assert_eq!(s.circuit().gate_count(), 7);

        let report = s.analyze(&oracle).await.unwrap();
        assert_eq!(report.analysis, CircuitAnalysis::unavailable());
        assert_eq!(report.suggestions.len(), 1);
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    #[derive(Debug, Clone)]
    enum Op {
        Add(GateType, usize, usize),
        Controlled(usize, usize, usize),
        Remove(usize),
        Move(usize, i64, i64),
        Qubits(usize),
        Rename(String),
        Clear,
        Duplicate,
        Undo,
        Redo,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        let gate_type = prop::sample::select(GateType::ALL.to_vec());
        prop_oneof![
            4 => (gate_type, 0usize..12, 0usize..8).prop_map(|(g, q, t)| Op::Add(g, q, t)),
            1 => (0usize..10, 0usize..8, 0usize..10).prop_map(|(q, t, c)| Op::Controlled(q, t, c)),
            2 => (0usize..8).prop_map(Op::Remove),
            2 => (0usize..8, -3i64..12, -3i64..10).prop_map(|(i, q, t)| Op::Move(i, q, t)),
            1 => (0usize..14).prop_map(Op::Qubits),
            1 => "[a-z ]{0,6}".prop_map(Op::Rename),
            1 => Just(Op::Clear),
            1 => Just(Op::Duplicate),
            2 => Just(Op::Undo),
            2 => Just(Op::Redo),
        ]
    }

    fn nth_id(s: &EditingSession, i: usize) -> Option<GateId> {
        let gates = s.circuit().gates();
        (!gates.is_empty()).then(|| gates[i % gates.len()].id.clone())
    }

    /// Apply an op; returns whether it claims to have recorded a snapshot
    fn apply(s: &mut EditingSession, op: &Op) -> Option<bool> {
        match op {
            Op::Add(g, q, t) => Some(s.add_gate(*g, *q, *t)),
            Op::Controlled(q, t, c) => Some(s.add_controlled_gate(GateType::Cnot, *q, *t, *c)),
            Op::Remove(i) => Some(nth_id(s, *i).is_some_and(|id| s.remove_gate(&id))),
            Op::Move(i, q, t) => Some(nth_id(s, *i).is_some_and(|id| s.move_gate(&id, *q, *t))),
            Op::Qubits(n) => Some(s.set_qubit_count(*n).is_some()),
            Op::Rename(name) => Some(s.rename(name)),
            Op::Clear => {
                s.clear();
                Some(true)
            }
            Op::Duplicate => {
                s.duplicate();
                Some(true)
            }
            Op::Undo | Op::Redo => None,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_every_state_is_valid(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut s = EditingSession::default();
            for op in &ops {
                match op {
                    Op::Undo => { s.undo(); }
                    Op::Redo => { s.redo(); }
                    _ => { apply(&mut s, op); }
                }
                prop_assert!(s.circuit().check_invariants().is_ok());
                if let Some(gate) = s.selected_gate() {
                    prop_assert!(s.circuit().contains_gate(&gate.id));
                }
            }
        }

        #[test]
        fn prop_mutations_record_exactly_once(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut s = EditingSession::default();
            for op in &ops {
                let len = s.history_len();
                let undoable = s.can_undo();
                match op {
                    Op::Undo => {
                        let moved = s.undo();
                        prop_assert_eq!(moved, undoable);
                        prop_assert_eq!(s.history_len(), len);
                    }
                    Op::Redo => {
                        s.redo();
                        prop_assert_eq!(s.history_len(), len);
                    }
                    _ => {
                        let before = s.snapshot();
                        let recorded = apply(&mut s, op).unwrap_or(false);
                        if recorded {
                            prop_assert!(!s.can_redo());
                            prop_assert!(s.can_undo());
                        } else {
                            prop_assert!(Arc::ptr_eq(&before, &s.snapshot()));
                            prop_assert_eq!(s.history_len(), len);
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_undo_then_redo_restores(ops in prop::collection::vec(arb_op(), 1..30)) {
            let mut s = EditingSession::default();
            for op in &ops {
                let before = s.snapshot();
                if apply(&mut s, op) == Some(true) {
                    let after = s.snapshot();
                    prop_assert!(s.undo());
                    prop_assert!(Arc::ptr_eq(&before, &s.snapshot()));
                    prop_assert!(s.redo());
                    prop_assert!(Arc::ptr_eq(&after, &s.snapshot()));
                }
            }
            let head = s.snapshot();
            let mut steps = 0;
            while s.undo() {
                steps += 1;
            }
            prop_assert_eq!(s.circuit().gate_count(), 0);
            for _ in 0..steps {
                prop_assert!(s.redo());
            }
            prop_assert!(Arc::ptr_eq(&head, &s.snapshot()));
        }
    }
}
