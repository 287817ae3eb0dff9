//! # QCD Placement
//!
//! Grid coordinate mapping and collision-aware gate placement.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_placement // L3: Placement (완료)
//!     GridGeometry // 픽셀 ↔ 셀 변환 (완료)
//!     Engine // 순수 배치 연산 (완료)
//!         gate_at // 점유 조회 O(gates) (완료)
//!         add // 빈 셀에만 추가 (완료)
//!         move_gate // 클램프 + MovePolicy (완료)
//!         remove // 없는 id는 no-op (완료)
//!     Interaction // 팔레트/선택 상태 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qcd_placement::prelude::*;
//!
//! let circuit = Circuit::new(2);
//! let grid = GridGeometry::default();
//!
//! let cell = grid.cell_at(90.0, 10.0, circuit.qubits()).unwrap();
//! let next = add(&circuit, GateType::H, cell).unwrap();
//! assert!(add(&next, GateType::X, cell).is_none()); // occupied
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Grid geometry (Gantree: L3_Placement → GridGeometry)
pub mod grid;

/// Placement operations (Gantree: L3_Placement → Engine)
pub mod engine;

/// Pointer interaction (Gantree: L3_Placement → Interaction)
pub mod interaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use engine::{add, gate_at, is_free, is_occupied, move_gate, place, remove, MovePolicy};
pub use grid::GridGeometry;
pub use interaction::{ClickOutcome, Interaction};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::engine::{
        add, gate_at, is_free, is_occupied, move_gate, place, remove, MovePolicy,
    };
    pub use crate::grid::GridGeometry;
    pub use crate::interaction::{ClickOutcome, Interaction};
    pub use qcd_core::prelude::*;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_double_add_same_cell() {
        let circuit = Circuit::new(2);
        let cell = Cell::new(0, 0);
        let once = add(&circuit, GateType::H, cell).unwrap();
        assert!(add(&once, GateType::X, cell).is_none());
        assert_eq!(once.gate_count(), 1);
    }

    #[test]
    fn test_click_then_drag_flow() {
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();
        let circuit = Circuit::new(3);

        ui.select_type(Some(GateType::Rx));
        let ClickOutcome::Placed(circuit) = ui.click(&circuit, &grid, 170.0, 20.0) else {
            panic!("expected placement");
        };
        let id = circuit.gates()[0].id.clone();
        assert_eq!(circuit.gates()[0].cell(), Cell::new(0, 2));

        let dragged = move_gate(&circuit, &id, 2, 4, MovePolicy::default()).unwrap();
        assert_eq!(dragged.gate(&id).unwrap().cell(), Cell::new(2, 4));
        assert_eq!(dragged.depth(), 5);

        let removed = remove(&dragged, &id).unwrap();
        assert!(removed.is_empty());
        assert!(removed.check_invariants().is_ok());
    }
}
