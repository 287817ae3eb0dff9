//! Circuit builder for QCD
//!
//! Gantree: L1_Model → CircuitBuilder
//!
//! Fluent builder placing gates at explicit grid cells. Gates that would
//! violate the wire range are skipped, like the interactive editor would.

use crate::circuit::Circuit;
use crate::gate::{Gate, GateType, Measurement};
use crate::types::{Angle, Cell, MeasurementBasis, QubitId, TimeStep};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    /// Internal circuit being built
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(qubits, name),
        }
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.circuit.set_description(Some(description.into()));
        self
    }

    // ========================================================================
    // Generic Placement
    // ========================================================================

    /// Place an arbitrary gate
    pub fn gate(mut self, gate: Gate) -> Self {
        let _ = self.circuit.insert_gate(gate);
        self
    }

    /// Place a non-parameterized single-wire gate
    pub fn place(self, gate_type: GateType, qubit: QubitId, time: TimeStep) -> Self {
        self.gate(Gate::new(gate_type, Cell::new(qubit, time)))
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    /// Gantree: h(self, q, t) -> Self // H 추가
    pub fn h(self, qubit: QubitId, time: TimeStep) -> Self {
        self.place(GateType::H, qubit, time)
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId, time: TimeStep) -> Self {
        self.place(GateType::X, qubit, time)
    }

    /// Add Pauli-Y gate
    pub fn y(self, qubit: QubitId, time: TimeStep) -> Self {
        self.place(GateType::Y, qubit, time)
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId, time: TimeStep) -> Self {
        self.place(GateType::Z, qubit, time)
    }

    /// Add measurement gate
    pub fn measure(self, qubit: QubitId, time: TimeStep) -> Self {
        self.place(GateType::Measure, qubit, time)
    }

    // ========================================================================
    // Parameterized Gates
    // ========================================================================

    /// Add Rx rotation
    /// Gantree: rx(self, q, t, a) -> Self // Rx 추가
    pub fn rx(self, qubit: QubitId, time: TimeStep, angle: Angle) -> Self {
        self.gate(Gate::new(GateType::Rx, Cell::new(qubit, time)).angle(angle))
    }

    /// Add Ry rotation
    pub fn ry(self, qubit: QubitId, time: TimeStep, angle: Angle) -> Self {
        self.gate(Gate::new(GateType::Ry, Cell::new(qubit, time)).angle(angle))
    }

    /// Add Rz rotation
    pub fn rz(self, qubit: QubitId, time: TimeStep, angle: Angle) -> Self {
        self.gate(Gate::new(GateType::Rz, Cell::new(qubit, time)).angle(angle))
    }

    /// Add phase shift
    pub fn phase(self, qubit: QubitId, time: TimeStep, angle: Angle) -> Self {
        self.gate(Gate::new(GateType::Phase, Cell::new(qubit, time)).angle(angle))
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT; the gate sits on the target wire
    /// Gantree: cnot(self, c, t, time) -> Self // CNOT 추가
    pub fn cnot(self, control: QubitId, target: QubitId, time: TimeStep) -> Self {
        self.gate(Gate::new(GateType::Cnot, Cell::new(target, time)).control(control))
    }

    /// Add SWAP between two wires
    pub fn swap(self, a: QubitId, b: QubitId, time: TimeStep) -> Self {
        self.gate(Gate::new(GateType::Swap, Cell::new(a, time)).target(b))
    }

    // ========================================================================
    // Measurements
    // ========================================================================

    /// Record a measurement
    pub fn measurement(mut self, qubit: QubitId, time: TimeStep, basis: MeasurementBasis) -> Self {
        let _ = self
            .circuit
            .insert_measurement(Measurement::new(qubit, time, basis));
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the circuit
    /// Gantree: build(self) -> Circuit // 회로 반환
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// ============================================================================
// Tests
// ============================================================================
