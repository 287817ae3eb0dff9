//! Core types for QCD
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases, identifiers and grid coordinates shared by every layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit (wire) index, 0-based
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Discrete time column, 0-based
/// Gantree: TimeStep // pub type TimeStep = usize
pub type TimeStep = usize;

/// Rotation angle in radians
pub type Angle = f64;

/// Gate parameters: name -> value. Ordered so exports are deterministic.
/// Gantree: Parameters // BTreeMap<String, f64>
pub type Parameters = BTreeMap<String, f64>;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque gate identifier
/// Gantree: GateId // newtype
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(String);

impl GateId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    /// Gantree: generate() -> Self // uuid v4
    pub fn generate() -> Self {
        Self(format!("gate-{}", Uuid::new_v4().simple()))
    }

    /// Borrow as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque circuit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitId(String);

impl CircuitId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(format!("circuit-{}", Uuid::new_v4().simple()))
    }

    /// Borrow as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Grid Cell
// ============================================================================

/// A `(qubit, time)` coordinate on the circuit grid
/// Gantree: Cell // 그리드 좌표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Wire index
    pub qubit: QubitId,
    /// Time column
    pub time: TimeStep,
}

impl Cell {
    /// Create a new cell
    pub const fn new(qubit: QubitId, time: TimeStep) -> Self {
        Self { qubit, time }
    }

    /// Canonical sort key: time first, then qubit
    pub fn canonical_key(&self) -> (TimeStep, QubitId) {
        (self.time, self.qubit)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(q{}, t{})", self.qubit, self.time)
    }
}

// ============================================================================
// Measurement Basis
// ============================================================================

/// Basis of a recorded measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementBasis {
    /// Z basis
    #[default]
    Computational,
    /// Bell basis
    Bell,
    /// User-defined
    Custom,
}

impl MeasurementBasis {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "computational" => Some(MeasurementBasis::Computational),
            "bell" => Some(MeasurementBasis::Bell),
            "custom" => Some(MeasurementBasis::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for MeasurementBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementBasis::Computational => write!(f, "computational"),
            MeasurementBasis::Bell => write!(f, "bell"),
            MeasurementBasis::Custom => write!(f, "custom"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = GateId::generate();
        let b = GateId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("gate-"));
        assert!(CircuitId::generate().as_str().starts_with("circuit-"));
    }

    #[test]
    fn test_gate_id_serializes_as_string() {
        let id = GateId::new("gate-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"gate-7\"");
    }

    #[test]
    fn test_cell_ordering_key() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(0, 0)];
        cells.sort_by_key(Cell::canonical_key);
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn test_measurement_basis_parse() {
        assert_eq!(MeasurementBasis::parse("Bell"), Some(MeasurementBasis::Bell));
        assert_eq!(MeasurementBasis::parse(" custom "), Some(MeasurementBasis::Custom));
        assert_eq!(MeasurementBasis::parse("x"), None);
        assert_eq!(
            serde_json::to_string(&MeasurementBasis::Computational).unwrap(),
            "\"computational\""
        );
    }
}
