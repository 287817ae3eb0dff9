//! Gate definitions for QCD
//!
//! Gantree: L1_Model → Gate
//!
//! The closed gate-type set offered by the palette, placed gates, and the
//! measurement records a circuit tracks alongside them.

use crate::constants::names::ANGLE_PARAM;
use crate::error::QcdError;
use crate::types::{Angle, Cell, GateId, MeasurementBasis, Parameters, QubitId, TimeStep};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gate type enumeration (closed set)
/// Gantree: GateType // 게이트 종류 enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateType {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    /// Gantree: H // 하다마드
    H,

    /// Pauli-X gate (NOT)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT; `qubit` is the target, `control_qubit` the control
    /// Gantree: CNOT // 제어 NOT
    Cnot,

    /// SWAP gate
    Swap,

    // ========================================================================
    // Parameterized Gates
    // ========================================================================
    /// Rotation around X-axis
    Rx,

    /// Rotation around Y-axis
    Ry,

    /// Rotation around Z-axis
    Rz,

    /// Phase shift
    Phase,

    // ========================================================================
    // Measurement
    // ========================================================================
    /// Measurement in the computational basis
    Measure,
}

impl GateType {
    /// All gate types in palette order
    pub const ALL: [GateType; 11] = [
        GateType::H,
        GateType::X,
        GateType::Y,
        GateType::Z,
        GateType::Cnot,
        GateType::Swap,
        GateType::Rx,
        GateType::Ry,
        GateType::Rz,
        GateType::Phase,
        GateType::Measure,
    ];

    /// Wire-format symbol
    /// Gantree: symbol(&self) -> &str // "H", "CNOT", ...
    pub fn symbol(&self) -> &'static str {
        match self {
            GateType::H => "H",
            GateType::X => "X",
            GateType::Y => "Y",
            GateType::Z => "Z",
            GateType::Cnot => "CNOT",
            GateType::Swap => "SWAP",
            GateType::Rx => "RX",
            GateType::Ry => "RY",
            GateType::Rz => "RZ",
            GateType::Phase => "PHASE",
            GateType::Measure => "MEASURE",
        }
    }

    /// Human-readable palette name
    pub fn display_name(&self) -> &'static str {
        match self {
            GateType::H => "Hadamard",
            GateType::X => "Pauli-X",
            GateType::Y => "Pauli-Y",
            GateType::Z => "Pauli-Z",
            GateType::Cnot => "CNOT",
            GateType::Swap => "SWAP",
            GateType::Rx => "RX",
            GateType::Ry => "RY",
            GateType::Rz => "RZ",
            GateType::Phase => "Phase",
            GateType::Measure => "Measure",
        }
    }

    /// One-line description shown in the properties panel
    pub fn description(&self) -> &'static str {
        match self {
            GateType::H => "Hadamard gate creates superposition states",
            GateType::X => "Pauli-X gate (quantum NOT) flips the qubit state",
            GateType::Y => "Pauli-Y gate performs Y-axis rotation",
            GateType::Z => "Pauli-Z gate performs Z-axis rotation",
            GateType::Cnot => "Controlled NOT gate with control and target qubits",
            GateType::Swap => "SWAP gate exchanges two qubit states",
            GateType::Rx => "Rotation around X-axis by specified angle",
            GateType::Ry => "Rotation around Y-axis by specified angle",
            GateType::Rz => "Rotation around Z-axis by specified angle",
            GateType::Phase => "Phase shift gate",
            GateType::Measure => "Measurement gate collapses the quantum state",
        }
    }

    /// Check if gate takes an `angle` parameter
    /// Gantree: is_parameterized(&self) -> bool // 파라미터 여부
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            GateType::Rx | GateType::Ry | GateType::Rz | GateType::Phase
        )
    }

    /// Check if gate has a control wire
    pub fn is_controlled(&self) -> bool {
        matches!(self, GateType::Cnot)
    }

    /// Check if gate acts on two wires
    /// Gantree: is_two_qubit(&self) -> bool // 2Q 판별
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, GateType::Cnot | GateType::Swap)
    }

    /// Parse leniently: trims whitespace and ignores case
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        GateType::ALL
            .into_iter()
            .find(|t| t.symbol().eq_ignore_ascii_case(wanted))
    }
}

impl FromStr for GateType {
    type Err = QcdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateType::parse(s).ok_or_else(|| QcdError::UnknownGateType(s.to_string()))
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Gate
// ============================================================================

/// A gate placed on the grid
/// Gantree: Gate // 배치된 게이트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    /// Unique within the owning circuit, never reused
    pub id: GateId,

    /// Gate type
    #[serde(rename = "type")]
    pub gate_type: GateType,

    /// Primary wire
    pub qubit: QubitId,

    /// Time column
    pub time: TimeStep,

    /// Named numeric parameters; absent names read as 0
    #[serde(default)]
    pub parameters: Parameters,

    /// Control wire for controlled gates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_qubit: Option<QubitId>,

    /// Secondary wire for two-qubit gates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_qubit: Option<QubitId>,
}

impl Gate {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a gate with a fresh id and no parameters
    /// Gantree: new(type, cell) -> Self // 생성자
    pub fn new(gate_type: GateType, cell: Cell) -> Self {
        Self::with_id(GateId::generate(), gate_type, cell)
    }

    /// Create a gate with a given id
    pub fn with_id(id: GateId, gate_type: GateType, cell: Cell) -> Self {
        Self {
            id,
            gate_type,
            qubit: cell.qubit,
            time: cell.time,
            parameters: Parameters::new(),
            control_qubit: None,
            target_qubit: None,
        }
    }

    /// Set control wire
    pub fn control(mut self, control: QubitId) -> Self {
        self.control_qubit = Some(control);
        self
    }

    /// Set secondary wire
    pub fn target(mut self, target: QubitId) -> Self {
        self.target_qubit = Some(target);
        self
    }

    /// Set a named parameter
    pub fn parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Set the `angle` parameter
    pub fn angle(self, angle: Angle) -> Self {
        self.parameter(ANGLE_PARAM, angle)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Grid cell of the primary wire
    pub fn cell(&self) -> Cell {
        Cell::new(self.qubit, self.time)
    }

    /// Read a parameter, defaulting to 0
    pub fn param(&self, name: &str) -> f64 {
        self.parameters.get(name).copied().unwrap_or(0.0)
    }

    /// Rotation angle (0 when unset)
    pub fn angle_value(&self) -> Angle {
        self.param(ANGLE_PARAM)
    }

    /// All wires the gate references
    /// Gantree: wires(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn wires(&self) -> Vec<QubitId> {
        let mut wires = vec![self.qubit];
        wires.extend(self.control_qubit);
        wires.extend(self.target_qubit);
        wires
    }

    /// Highest wire index referenced
    pub fn max_wire(&self) -> QubitId {
        self.wires().into_iter().max().unwrap_or(self.qubit)
    }

    /// Partner wire of a two-qubit gate, if known
    fn partner(&self) -> Option<QubitId> {
        match self.gate_type {
            GateType::Cnot => self.control_qubit,
            GateType::Swap => self.target_qubit.or(self.control_qubit),
            _ => None,
        }
    }

    /// Convert to an OpenQASM 2.0 statement
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm(&self) -> String {
        let q = self.qubit;
        match self.gate_type {
            GateType::H => format!("h q[{}];", q),
            GateType::X => format!("x q[{}];", q),
            GateType::Y => format!("y q[{}];", q),
            GateType::Z => format!("z q[{}];", q),
            GateType::Rx => format!("rx({}) q[{}];", self.angle_value(), q),
            GateType::Ry => format!("ry({}) q[{}];", self.angle_value(), q),
            GateType::Rz => format!("rz({}) q[{}];", self.angle_value(), q),
            GateType::Phase => format!("p({}) q[{}];", self.angle_value(), q),
            GateType::Measure => format!("measure q[{}] -> c[{}];", q, q),
            GateType::Cnot => match self.partner() {
                Some(c) => format!("cx q[{}],q[{}];", c, q),
                None => format!("// cx q[{}]: missing control qubit", q),
            },
            GateType::Swap => match self.partner() {
                Some(p) => format!("swap q[{}],q[{}];", q, p),
                None => format!("// swap q[{}]: missing partner qubit", q),
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.gate_type, self.cell())?;
        if let Some(c) = self.control_qubit {
            write!(f, " ctrl q{}", c)?;
        }
        Ok(())
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// A measurement record; tracked but not processed further
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Identifier
    pub id: String,
    /// Measured wire
    pub qubit: QubitId,
    /// Time column
    pub time: TimeStep,
    /// Basis
    #[serde(default)]
    pub basis: MeasurementBasis,
}

impl Measurement {
    /// Create a measurement with a fresh id
    pub fn new(qubit: QubitId, time: TimeStep, basis: MeasurementBasis) -> Self {
        Self {
            id: format!("measurement-{}", Uuid::new_v4().simple()),
            qubit,
            time,
            basis,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gate_type_serde_symbols() {
        assert_eq!(serde_json::to_string(&GateType::Cnot).unwrap(), "\"CNOT\"");
        assert_eq!(serde_json::to_string(&GateType::Phase).unwrap(), "\"PHASE\"");
        let t: GateType = serde_json::from_str("\"RX\"").unwrap();
        assert_eq!(t, GateType::Rx);
    }

    #[test]
    fn test_gate_type_parse() {
        assert_eq!(GateType::parse("cnot"), Some(GateType::Cnot));
        assert_eq!(GateType::parse(" measure "), Some(GateType::Measure));
        assert_eq!(GateType::parse("BOGUS"), None);
        assert!("BOGUS".parse::<GateType>().is_err());
    }

    #[test]
    fn test_gate_type_classification() {
        assert!(GateType::Rx.is_parameterized());
        assert!(GateType::Phase.is_parameterized());
        assert!(!GateType::H.is_parameterized());
        assert!(GateType::Cnot.is_controlled());
        assert!(GateType::Swap.is_two_qubit());
        assert!(!GateType::Swap.is_controlled());
    }

    #[test]
    fn test_gate_wires() {
        let g = Gate::new(GateType::Cnot, Cell::new(1, 1)).control(0);
        assert_eq!(g.wires(), vec![1, 0]);
        assert_eq!(g.max_wire(), 1);
    }

    #[test]
    fn test_missing_parameter_reads_zero() {
        let g = Gate::new(GateType::Rz, Cell::new(0, 0));
        assert_relative_eq!(g.angle_value(), 0.0);
        let g = g.angle(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(g.angle_value(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_gate_to_qasm() {
        let h = Gate::new(GateType::H, Cell::new(0, 0));
        assert_eq!(h.to_qasm(), "h q[0];");

        let cx = Gate::new(GateType::Cnot, Cell::new(1, 1)).control(0);
        assert_eq!(cx.to_qasm(), "cx q[0],q[1];");

        let bare = Gate::new(GateType::Cnot, Cell::new(1, 1));
        assert!(bare.to_qasm().starts_with("//"));

        let rx = Gate::new(GateType::Rx, Cell::new(0, 2)).angle(0.5);
        assert_eq!(rx.to_qasm(), "rx(0.5) q[0];");
    }

    #[test]
    fn test_gate_json_shape() {
        let g = Gate::with_id(GateId::new("gate-1"), GateType::Cnot, Cell::new(1, 1)).control(0);
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["type"], "CNOT");
        assert_eq!(v["controlQubit"], 0);
        assert!(v.get("targetQubit").is_none());
        assert!(v["parameters"].as_object().unwrap().is_empty());
    }
}
