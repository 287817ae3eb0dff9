//! Offline template oracle
//!
//! Gantree: L5_Oracle → TemplateOracle
//!
//! Keyword-matched circuits for use without network access. Output is JSON
//! text, so it goes through the same validation as any other oracle reply.

use crate::analysis::CircuitAnalysis;
use crate::error::OracleError;
use crate::oracle::{CircuitOracle, GenerationRequest};
use async_trait::async_trait;
use qcd_core::names::GENERATED_CIRCUIT_NAME;
use qcd_core::{Circuit, CircuitBuilder, GateId, GateType};
use serde_json::{json, Value};
use std::f64::consts::PI;

/// Keyword-driven circuit templates
/// Gantree: TemplateOracle // 오프라인 템플릿
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateOracle;

impl TemplateOracle {
    /// Create the template oracle
    pub fn new() -> Self {
        Self
    }

    /// Template circuit for a prompt
    /// Gantree: template_for(prompt) -> Circuit // 키워드 매칭
    pub fn template_for(prompt: &str) -> Circuit {
        let p = prompt.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| p.contains(w));

        if has(&["bell", "entanglement"]) {
            CircuitBuilder::with_name(2, "Bell State Circuit")
                .h(0, 0)
                .cnot(0, 1, 1)
                .build()
        } else if has(&["superposition", "hadamard"]) {
            CircuitBuilder::with_name(1, "Superposition Circuit")
                .h(0, 0)
                .build()
        } else if has(&["quantum fourier", "qft"]) {
            CircuitBuilder::with_name(3, "Quantum Fourier Transform")
                .h(0, 0)
                .phase(1, 1, PI / 2.0)
                .cnot(0, 1, 2)
                .h(1, 3)
                .phase(2, 4, PI / 4.0)
                .cnot(0, 2, 5)
                .h(2, 6)
                .build()
        } else if has(&["grover", "search"]) {
            CircuitBuilder::with_name(2, "Grover Search Algorithm")
                .h(0, 0)
                .h(1, 0)
                .x(0, 1)
                .x(1, 1)
                .h(1, 2)
                .cnot(0, 1, 3)
                .h(1, 4)
                .x(0, 5)
                .x(1, 5)
                .h(0, 6)
                .h(1, 6)
                .build()
        } else {
            CircuitBuilder::with_name(2, GENERATED_CIRCUIT_NAME)
                .h(0, 0)
                .x(1, 0)
                .build()
        }
    }

    /// Apply a keyword edit to `current`, appending at `time = gate count`.
    /// The appended entry is not range-checked here; validation clamps it.
    pub fn modify(prompt: &str, current: &Circuit) -> Result<Value, OracleError> {
        let p = prompt.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| p.contains(w));
        let time = current.gate_count();

        let appended = if has(&["add hadamard", "add h gate"]) {
            Some(gate_entry(GateType::H, 0, time, None))
        } else if has(&["add cnot", "add controlled"]) {
            Some(gate_entry(GateType::Cnot, 1, time, Some(0)))
        } else if has(&["measure", "add measurement"]) {
            Some(gate_entry(GateType::Measure, 0, time, None))
        } else {
            None
        };

        let mut value = serde_json::to_value(current)?;
        if let Some(entry) = appended {
            let gates = value
                .get_mut("gates")
                .and_then(Value::as_array_mut)
                .ok_or_else(|| OracleError::InvalidFormat("circuit has no gate list".into()))?;
            gates.push(entry);
        }
        Ok(value)
    }
}

fn gate_entry(gate_type: GateType, qubit: usize, time: usize, control: Option<usize>) -> Value {
    let mut entry = json!({
        "id": GateId::generate(),
        "type": gate_type,
        "qubit": qubit,
        "time": time,
        "parameters": {},
    });
    if let Some(c) = control {
        entry["controlQubit"] = json!(c);
    }
    entry
}

#[async_trait]
impl CircuitOracle for TemplateOracle {
    fn name(&self) -> &str {
        "templates"
    }

    async fn request_generation(&self, request: &GenerationRequest) -> Result<String, OracleError> {
        let value = match request.circuit_to_modify() {
            Some(current) => Self::modify(&request.prompt, current)?,
            None => serde_json::to_value(Self::template_for(&request.prompt))?,
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    async fn request_analysis(&self, _circuit: &Circuit) -> Result<CircuitAnalysis, OracleError> {
        Err(OracleError::Unsupported("circuit analysis"))
    }

    async fn request_suggestions(&self, _circuit: &Circuit) -> Result<Vec<String>, OracleError> {
        Err(OracleError::Unsupported("circuit suggestions"))
    }
}
