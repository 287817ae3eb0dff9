//! Circuit structure for QCD
//!
//! Gantree: L1_Model → Circuit
//!
//! A grid of gates over `qubits` wires. Every mutator here re-checks the
//! range and id invariants, so a `Circuit` value is always well-formed.
//! Untrusted payloads enter through `qcd_validate`, never through serde.

use crate::builder::CircuitBuilder;
use crate::constants::limits::{self, DEFAULT_QUBITS, MAX_QUBITS};
use crate::constants::names::{DEFAULT_CIRCUIT_NAME, GENERATED_CIRCUIT_NAME};
use crate::error::{QcdError, QcdResult};
use crate::gate::{Gate, GateType, Measurement};
use crate::types::{CircuitId, GateId, Parameters, QubitId, TimeStep};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Quantum circuit on a (qubit, time) grid
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    /// Identity
    id: CircuitId,

    /// User-facing label
    name: String,

    /// Number of wires, in [1, MAX_QUBITS]
    /// Gantree: qubits: usize // 큐비트 수
    qubits: usize,

    /// Placed gates; order carries no meaning
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Measurement records
    measurements: Vec<Measurement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Content of a gate without its id, used for multiset comparison
#[derive(Debug, Clone, PartialEq)]
pub struct GateSignature {
    /// Time column
    pub time: TimeStep,
    /// Primary wire
    pub qubit: QubitId,
    /// Gate type
    pub gate_type: GateType,
    /// Control wire
    pub control_qubit: Option<QubitId>,
    /// Secondary wire
    pub target_qubit: Option<QubitId>,
    /// Parameters
    pub parameters: Parameters,
}

impl From<&Gate> for GateSignature {
    fn from(g: &Gate) -> Self {
        Self {
            time: g.time,
            qubit: g.qubit,
            gate_type: g.gate_type,
            control_qubit: g.control_qubit,
            target_qubit: g.target_qubit,
            parameters: g.parameters.clone(),
        }
    }
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit; the qubit count is clamped to [1, 10]
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(qubits: usize) -> Self {
        Self::with_name(qubits, DEFAULT_CIRCUIT_NAME)
    }

    /// Create an empty circuit with a name
    pub fn with_name(qubits: usize, name: impl Into<String>) -> Self {
        Self {
            id: CircuitId::generate(),
            name: name.into(),
            qubits: limits::clamp_qubits(qubits),
            gates: Vec::new(),
            measurements: Vec::new(),
            description: None,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// The empty two-qubit circuit a new session starts with
    pub fn empty() -> Self {
        Self::new(DEFAULT_QUBITS)
    }

    /// Minimal circuit installed when an external payload is unusable:
    /// `H` on q0 at t0, `CNOT` on q1 at t1 controlled by q0
    /// Gantree: fallback() -> Self // 기본 회로
    pub fn fallback() -> Self {
        CircuitBuilder::with_name(2, GENERATED_CIRCUIT_NAME)
            .h(0, 0)
            .cnot(0, 1, 1)
            .build()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Circuit id
    pub fn id(&self) -> &CircuitId {
        &self.id
    }

    /// Circuit name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// Gates in storage order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Measurement records
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Optional description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creation timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last modification timestamp
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Look up a gate by id
    pub fn gate(&self, id: &GateId) -> Option<&Gate> {
        self.gates.iter().find(|g| &g.id == id)
    }

    /// Check if a gate id is present
    pub fn contains_gate(&self, id: &GateId) -> bool {
        self.gate(id).is_some()
    }

    /// Check if circuit has no gates
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Metadata Mutators
    // ========================================================================

    /// Replace identity
    pub fn set_id(&mut self, id: CircuitId) {
        self.id = id;
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Override timestamps (used when importing)
    pub fn set_timestamps(
        &mut self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    /// Mark as modified now
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    // ========================================================================
    // Gate Mutators
    // ========================================================================

    /// Add a gate, checking wire range and id uniqueness
    /// Gantree: insert_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn insert_gate(&mut self, gate: Gate) -> QcdResult<()> {
        self.check_wires(&gate)?;
        if self.contains_gate(&gate.id) {
            return Err(QcdError::DuplicateGateId(gate.id.to_string()));
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn insert_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> QcdResult<()> {
        for gate in gates {
            self.insert_gate(gate)?;
        }
        Ok(())
    }

    /// Remove a gate by id
    pub fn remove_gate(&mut self, id: &GateId) -> Option<Gate> {
        let pos = self.gates.iter().position(|g| &g.id == id)?;
        Some(self.gates.remove(pos))
    }

    /// Apply an edit to one gate. The edit is rolled back if it breaks the
    /// wire-range invariant. Returns `Ok(false)` when the id is unknown.
    /// The gate id must not be changed by `edit`.
    pub fn update_gate<F>(&mut self, id: &GateId, edit: F) -> QcdResult<bool>
    where
        F: FnOnce(&mut Gate),
    {
        let Some(pos) = self.gates.iter().position(|g| &g.id == id) else {
            return Ok(false);
        };
        let mut edited = self.gates[pos].clone();
        edit(&mut edited);
        if edited.id != *id {
            return Err(QcdError::InternalError(format!(
                "gate edit changed id {} to {}",
                id, edited.id
            )));
        }
        self.check_wires(&edited)?;
        self.gates[pos] = edited;
        Ok(true)
    }

    /// Remove all gates and measurements
    pub fn clear(&mut self) {
        self.gates.clear();
        self.measurements.clear();
    }

    /// Add a measurement record
    pub fn insert_measurement(&mut self, measurement: Measurement) -> QcdResult<()> {
        if measurement.qubit >= self.qubits {
            return Err(QcdError::QubitOutOfRange {
                qubit: measurement.qubit,
                qubits: self.qubits,
            });
        }
        self.measurements.push(measurement);
        Ok(())
    }

    /// Change the qubit count. The count is clamped to [1, 10]; gates and
    /// measurements referencing removed wires are dropped. Returns the
    /// number of dropped gates.
    /// Gantree: resize(&mut, n) -> usize // 큐비트 수 변경
    pub fn resize(&mut self, qubits: usize) -> usize {
        let qubits = limits::clamp_qubits(qubits);
        self.qubits = qubits;
        let before = self.gates.len();
        self.gates.retain(|g| g.max_wire() < qubits);
        self.measurements.retain(|m| m.qubit < qubits);
        before - self.gates.len()
    }

    /// Sort gates by (time, qubit), stable
    pub fn sort_canonical(&mut self) {
        self.gates.sort_by_key(|g| (g.time, g.qubit));
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Number of time columns in use: max(time) + 1, or 0 when empty
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        self.gates.iter().map(|g| g.time + 1).max().unwrap_or(0)
    }

    /// Number of distinct gate types present
    /// Gantree: gate_type_count(&self) -> usize // 게이트 종류 수
    pub fn gate_type_count(&self) -> usize {
        self.gates
            .iter()
            .map(|g| g.gate_type)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Gate count per type
    pub fn gate_type_histogram(&self) -> BTreeMap<GateType, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.gate_type).or_insert(0) += 1;
        }
        counts
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates
            .iter()
            .filter(|g| g.gate_type.is_parameterized())
            .count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates
            .iter()
            .filter(|g| g.gate_type.is_two_qubit())
            .count()
    }

    /// Gates in canonical (time, qubit) order
    pub fn canonical_gates(&self) -> Vec<&Gate> {
        let mut gates: Vec<&Gate> = self.gates.iter().collect();
        gates.sort_by_key(|g| (g.time, g.qubit));
        gates
    }

    /// Gate contents without ids, sorted, for multiset comparison
    pub fn gate_signatures(&self) -> Vec<GateSignature> {
        let mut sigs: Vec<GateSignature> = self.gates.iter().map(GateSignature::from).collect();
        sigs.sort_by(|a, b| {
            (a.time, a.qubit, a.gate_type, a.control_qubit, a.target_qubit).cmp(&(
                b.time,
                b.qubit,
                b.gate_type,
                b.control_qubit,
                b.target_qubit,
            ))
        });
        sigs
    }

    /// Same name, qubit count and gate multiset; ids and timestamps ignored
    pub fn same_content(&self, other: &Circuit) -> bool {
        self.name == other.name
            && self.qubits == other.qubits
            && self.gate_signatures() == other.gate_signatures()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn check_wires(&self, gate: &Gate) -> QcdResult<()> {
        for qubit in gate.wires() {
            if qubit >= self.qubits {
                return Err(QcdError::QubitOutOfRange {
                    qubit,
                    qubits: self.qubits,
                });
            }
        }
        Ok(())
    }

    /// Re-check every invariant (used by tests and debug assertions)
    pub fn check_invariants(&self) -> QcdResult<()> {
        if !(1..=MAX_QUBITS).contains(&self.qubits) {
            return Err(QcdError::QubitCountOutOfRange {
                requested: self.qubits,
                max: MAX_QUBITS,
            });
        }
        let mut seen = HashSet::new();
        for gate in &self.gates {
            self.check_wires(gate)?;
            if !seen.insert(&gate.id) {
                return Err(QcdError::DuplicateGateId(gate.id.to_string()));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Canonical JSON export (gates sorted by time, then qubit)
    /// Gantree: to_json(&self) -> Result<String> // JSON 출력
    pub fn to_json(&self) -> QcdResult<String> {
        let mut canonical = self.clone();
        canonical.sort_canonical();
        Ok(serde_json::to_string_pretty(&canonical)?)
    }

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(format!("// {}", self.name));
        lines.push(String::new());

        // Register declarations
        lines.push(format!("qreg q[{}];", self.qubits));
        lines.push(format!("creg c[{}];", self.qubits));
        lines.push(String::new());

        // Gates
        for gate in self.canonical_gates() {
            lines.push(gate.to_qasm());
        }

        lines.join("\n")
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit '{}' ({} qubits, {} gates)",
            self.name,
            self.qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  Gate types: {}", self.gate_type_count())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn gate(t: GateType, q: usize, time: usize) -> Gate {
        Gate::new(t, Cell::new(q, time))
    }

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::new(5);
        assert_eq!(circuit.qubits(), 5);
        assert_eq!(circuit.name(), DEFAULT_CIRCUIT_NAME);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_qubit_count_is_clamped() {
        assert_eq!(Circuit::new(0).qubits(), 1);
        assert_eq!(Circuit::new(42).qubits(), MAX_QUBITS);
    }

    #[test]
    fn test_insert_gate_out_of_range() {
        let mut circuit = Circuit::new(2);
        assert!(circuit.insert_gate(gate(GateType::H, 2, 0)).is_err());
        let cx = gate(GateType::Cnot, 1, 0).control(3);
        assert!(matches!(
            circuit.insert_gate(cx),
            Err(QcdError::QubitOutOfRange { qubit: 3, .. })
        ));
    }

    #[test]
    fn test_insert_duplicate_id() {
        let mut circuit = Circuit::new(2);
        let g = gate(GateType::H, 0, 0);
        circuit.insert_gate(g.clone()).unwrap();
        assert!(matches!(
            circuit.insert_gate(g),
            Err(QcdError::DuplicateGateId(_))
        ));
    }

    #[test]
    fn test_depth_and_type_count() {
        let mut circuit = Circuit::new(2);
        assert_eq!(circuit.depth(), 0);
        assert_eq!(circuit.gate_type_count(), 0);

        circuit.insert_gate(gate(GateType::H, 0, 0)).unwrap();
        circuit.insert_gate(gate(GateType::H, 1, 0)).unwrap();
        circuit
            .insert_gate(gate(GateType::Cnot, 1, 4).control(0))
            .unwrap();
        assert_eq!(circuit.depth(), 5);
        assert_eq!(circuit.gate_type_count(), 2);
        assert_eq!(circuit.gate_type_histogram()[&GateType::H], 2);
    }

    #[test]
    fn test_update_gate_rolls_back_out_of_range() {
        let mut circuit = Circuit::new(2);
        let g = gate(GateType::X, 0, 0);
        let id = g.id.clone();
        circuit.insert_gate(g).unwrap();

        assert!(circuit.update_gate(&id, |g| g.qubit = 5).is_err());
        assert_eq!(circuit.gate(&id).unwrap().qubit, 0);

        assert!(circuit.update_gate(&id, |g| g.time = 3).unwrap());
        assert_eq!(circuit.gate(&id).unwrap().time, 3);

        assert!(!circuit
            .update_gate(&GateId::new("missing"), |g| g.time = 1)
            .unwrap());
    }

    #[test]
    fn test_resize_drops_gates_on_removed_wires() {
        let mut circuit = Circuit::new(3);
        circuit.insert_gate(gate(GateType::H, 0, 0)).unwrap();
        circuit.insert_gate(gate(GateType::X, 2, 0)).unwrap();
        circuit
            .insert_gate(gate(GateType::Cnot, 1, 1).control(2))
            .unwrap();

        let dropped = circuit.resize(2);
        assert_eq!(dropped, 2);
        assert_eq!(circuit.qubits(), 2);
        assert!(circuit.check_invariants().is_ok());
    }

    #[test]
    fn test_fallback_circuit() {
        let circuit = Circuit::fallback();
        assert_eq!(circuit.qubits(), 2);
        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.depth(), 2);
        let cx = &circuit.canonical_gates()[1];
        assert_eq!(cx.gate_type, GateType::Cnot);
        assert_eq!(cx.qubit, 1);
        assert_eq!(cx.control_qubit, Some(0));
    }

    #[test]
    fn test_to_json_is_canonical() {
        let mut circuit = Circuit::new(2);
        circuit.insert_gate(gate(GateType::X, 1, 2)).unwrap();
        circuit.insert_gate(gate(GateType::H, 0, 0)).unwrap();
        circuit.insert_gate(gate(GateType::Y, 0, 2)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&circuit.to_json().unwrap()).unwrap();
        let order: Vec<&str> = json["gates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["type"].as_str().unwrap())
            .collect();
        assert_eq!(order, vec!["H", "Y", "X"]);
        assert_eq!(json["qubits"], 2);
        assert!(json["measurements"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_to_qasm() {
        let qasm = Circuit::fallback().to_qasm();
        assert!(qasm.contains("OPENQASM 2.0"));
        assert!(qasm.contains("qreg q[2]"));
        assert!(qasm.contains("h q[0]"));
        assert!(qasm.contains("cx q[0],q[1]"));
    }

    #[test]
    fn test_same_content_ignores_ids() {
        let a = Circuit::fallback();
        let b = Circuit::fallback();
        assert_ne!(a.id(), b.id());
        assert!(a.same_content(&b));
    }
}
