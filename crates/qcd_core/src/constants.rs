//! Constants for QCD
//!
//! Gantree: L0_Foundation → Constants
//!
//! Grid limits, default names and canvas geometry.

// ============================================================================
// Limits
// Gantree: limits // 범위 상수
// ============================================================================

pub mod limits {
    //! Qubit-count bounds that keep the grid practical

    /// Minimum number of qubits in a circuit
    pub const MIN_QUBITS: usize = 1;

    /// Maximum number of qubits in a circuit
    /// Gantree: MAX_QUBITS: usize = 10
    pub const MAX_QUBITS: usize = 10;

    /// Qubit count for new circuits and payloads without a usable count
    /// Gantree: DEFAULT_QUBITS: usize = 2
    pub const DEFAULT_QUBITS: usize = 2;

    /// Clamp a requested qubit count into `[MIN_QUBITS, MAX_QUBITS]`
    #[inline]
    pub fn clamp_qubits(requested: usize) -> usize {
        requested.clamp(MIN_QUBITS, MAX_QUBITS)
    }
}

// ============================================================================
// Names
// ============================================================================

pub mod names {
    //! Default labels

    /// Name of a freshly created circuit
    pub const DEFAULT_CIRCUIT_NAME: &str = "New Circuit";

    /// Name given to oracle output without a usable name
    pub const GENERATED_CIRCUIT_NAME: &str = "Generated Circuit";

    /// Name given to imported payloads without a usable name
    pub const IMPORTED_CIRCUIT_NAME: &str = "Imported Circuit";

    /// Appended to the label of a duplicated circuit
    pub const COPY_SUFFIX: &str = " (Copy)";

    /// Parameter key holding the rotation angle
    pub const ANGLE_PARAM: &str = "angle";
}

// ============================================================================
// Grid Geometry
// ============================================================================

pub mod grid {
    //! Canvas geometry defaults

    /// Default cell width in pixels
    pub const DEFAULT_CELL_WIDTH_PX: f64 = 80.0;

    /// Default cell height in pixels
    pub const DEFAULT_CELL_HEIGHT_PX: f64 = 80.0;

    /// Number of time columns drawn by default
    pub const VISIBLE_TIME_STEPS: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_qubits() {
        assert_eq!(limits::clamp_qubits(0), 1);
        assert_eq!(limits::clamp_qubits(4), 4);
        assert_eq!(limits::clamp_qubits(15), limits::MAX_QUBITS);
    }
}
