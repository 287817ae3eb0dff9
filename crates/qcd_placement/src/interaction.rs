//! Pointer interaction state
//!
//! Gantree: L3_Placement → Interaction
//!
//! Tracks the palette selection and the selected gate, and turns canvas
//! clicks into placement or selection.

use crate::engine::{self, gate_at};
use crate::grid::GridGeometry;
use qcd_core::{Cell, Circuit, GateId, GateType};

/// Result of a canvas click
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// A gate was placed; carries the next circuit
    Placed(Circuit),
    /// The pending type was consumed but the cell was taken
    Blocked(Cell),
    /// A gate was selected
    Selected(GateId),
    /// The selection was cleared (click on an empty cell)
    Deselected,
    /// Click outside the grid
    Ignored,
}

/// Palette and selection state
/// Gantree: Interaction // 포인터 상태
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interaction {
    pending: Option<GateType>,
    selected: Option<GateId>,
}

impl Interaction {
    /// No pending type, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate type waiting to be placed
    pub fn pending(&self) -> Option<GateType> {
        self.pending
    }

    /// Selected gate id
    pub fn selected(&self) -> Option<&GateId> {
        self.selected.as_ref()
    }

    /// Pick a type from the palette (`None` cancels)
    pub fn select_type(&mut self, gate_type: Option<GateType>) {
        self.pending = gate_type;
    }

    /// Select a gate (`None` clears)
    pub fn select_gate(&mut self, id: Option<GateId>) {
        self.selected = id;
    }

    /// Drop the selection if its gate no longer exists
    pub fn reconcile(&mut self, circuit: &Circuit) {
        if let Some(id) = &self.selected {
            if !circuit.contains_gate(id) {
                self.selected = None;
            }
        }
    }

    /// Handle a click at canvas offset `(x, y)`.
    ///
    /// With a pending type, an in-range click adds that gate (if the cell is
    /// free) and clears the pending type. Without one, the click selects the
    /// gate under the pointer.
    /// Gantree: click(&mut, circuit, grid, x, y) -> ClickOutcome // 클릭 처리
    pub fn click(&mut self, circuit: &Circuit, grid: &GridGeometry, x: f64, y: f64) -> ClickOutcome {
        let Some(cell) = grid.cell_at(x, y, circuit.qubits()) else {
            return ClickOutcome::Ignored;
        };

        match self.pending.take() {
            Some(gate_type) => match engine::add(circuit, gate_type, cell) {
                Some(next) => ClickOutcome::Placed(next),
                None => ClickOutcome::Blocked(cell),
            },
            None => match gate_at(circuit, cell) {
                Some(gate) => {
                    self.selected = Some(gate.id.clone());
                    ClickOutcome::Selected(gate.id.clone())
                }
                None => {
                    self.selected = None;
                    ClickOutcome::Deselected
                }
            },
        }
    }

    /// Hover preview: the cell under the pointer, only while a type is pending
    /// and the cell is in range and free
    /// Gantree: preview(&self, circuit, grid, x, y) -> Option<Cell> // 미리보기
    pub fn preview(&self, circuit: &Circuit, grid: &GridGeometry, x: f64, y: f64) -> Option<Cell> {
        self.pending?;
        let cell = grid.cell_at(x, y, circuit.qubits())?;
        engine::is_free(circuit, cell).then_some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcd_core::CircuitBuilder;

    #[test]
    fn test_click_places_and_clears_pending() {
        let circuit = Circuit::new(2);
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();
        ui.select_type(Some(GateType::H));

        let outcome = ui.click(&circuit, &grid, 10.0, 90.0);
        let ClickOutcome::Placed(next) = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        assert_eq!(next.gates()[0].cell(), Cell::new(1, 0));
        assert_eq!(ui.pending(), None);
    }

    #[test]
    fn test_click_outside_keeps_pending() {
        let circuit = Circuit::new(2);
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();
        ui.select_type(Some(GateType::X));

        assert_eq!(ui.click(&circuit, &grid, 10.0, 500.0), ClickOutcome::Ignored);
        assert_eq!(ui.pending(), Some(GateType::X));
    }

    #[test]
    fn test_click_on_occupied_cell_is_blocked() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();
        ui.select_type(Some(GateType::X));

        assert_eq!(
            ui.click(&circuit, &grid, 5.0, 5.0),
            ClickOutcome::Blocked(Cell::new(0, 0))
        );
        assert_eq!(ui.pending(), None);
    }

    #[test]
    fn test_click_selects_gate() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let id = circuit.gates()[0].id.clone();
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();

        assert_eq!(ui.click(&circuit, &grid, 5.0, 5.0), ClickOutcome::Selected(id.clone()));
        assert_eq!(ui.selected(), Some(&id));

        assert_eq!(ui.click(&circuit, &grid, 200.0, 5.0), ClickOutcome::Deselected);
        assert_eq!(ui.selected(), None);
    }

    #[test]
    fn test_preview() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let grid = GridGeometry::default();
        let mut ui = Interaction::new();

        assert_eq!(ui.preview(&circuit, &grid, 100.0, 5.0), None);
        ui.select_type(Some(GateType::Z));
        assert_eq!(ui.preview(&circuit, &grid, 5.0, 5.0), None);
        assert_eq!(ui.preview(&circuit, &grid, 100.0, 5.0), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_reconcile_drops_stale_selection() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let mut ui = Interaction::new();
        ui.select_gate(Some(GateId::new("gone")));
        ui.reconcile(&circuit);
        assert_eq!(ui.selected(), None);
    }
}
