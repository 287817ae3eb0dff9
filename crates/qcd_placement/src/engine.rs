//! Placement engine
//!
//! Gantree: L3_Placement → Engine
//!
//! Every operation takes the current circuit by reference and returns the
//! next circuit, or `None` when the gesture is a no-op (occupied cell,
//! unknown id, out-of-range click). No-ops are normal interactive outcomes
//! and are never reported as errors.

use qcd_core::{Cell, Circuit, Gate, GateId, GateType};
use serde::{Deserialize, Serialize};

/// Collision handling for moves
/// Gantree: MovePolicy // 이동 충돌 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Overlapping gates after a drag are accepted
    #[default]
    Tolerate,
    /// Moving onto another gate's cell is a no-op
    RejectOccupied,
}

// ============================================================================
// Occupancy
// ============================================================================

/// Gate whose primary wire sits at `cell`, if any. O(gates).
/// Gantree: gate_at(circuit, cell) -> Option<&Gate> // 점유 조회
pub fn gate_at(circuit: &Circuit, cell: Cell) -> Option<&Gate> {
    circuit
        .gates()
        .iter()
        .find(|g| g.qubit == cell.qubit && g.time == cell.time)
}

/// Check whether a cell holds a gate
pub fn is_occupied(circuit: &Circuit, cell: Cell) -> bool {
    gate_at(circuit, cell).is_some()
}

/// Cell inside the wire range and free
pub fn is_free(circuit: &Circuit, cell: Cell) -> bool {
    cell.qubit < circuit.qubits() && !is_occupied(circuit, cell)
}

// ============================================================================
// Mutations
// ============================================================================

/// Add a fresh gate of `gate_type` with zero parameters at `cell`
/// Gantree: add(circuit, type, cell) -> Option<Circuit> // 게이트 추가
pub fn add(circuit: &Circuit, gate_type: GateType, cell: Cell) -> Option<Circuit> {
    place(circuit, Gate::new(gate_type, cell))
}

/// Add a prepared gate at its own cell. Collision and range checks apply.
pub fn place(circuit: &Circuit, gate: Gate) -> Option<Circuit> {
    let cell = gate.cell();
    if let Some(occupant) = gate_at(circuit, cell) {
        log::debug!("Add {} at {} ignored: occupied by {}", gate.gate_type, cell, occupant.id);
        return None;
    }

    let mut next = circuit.clone();
    match next.insert_gate(gate) {
        Ok(()) => Some(next),
        Err(err) => {
            log::debug!("Add at {} ignored: {}", cell, err);
            None
        }
    }
}

/// Move a gate. `qubit` is clamped to `[0, qubits - 1]` and `time` to `>= 0`.
/// A move that leaves the gate where it is counts as a no-op.
/// Gantree: move_gate(circuit, id, q, t, policy) -> Option<Circuit> // 게이트 이동
pub fn move_gate(
    circuit: &Circuit,
    id: &GateId,
    qubit: i64,
    time: i64,
    policy: MovePolicy,
) -> Option<Circuit> {
    let current = circuit.gate(id)?;
    let max_qubit = circuit.qubits().saturating_sub(1) as i64;
    let target = Cell::new(qubit.clamp(0, max_qubit) as usize, time.max(0) as usize);

    if target == current.cell() {
        return None;
    }
    if policy == MovePolicy::RejectOccupied && is_occupied(circuit, target) {
        log::debug!("Move of {} to {} rejected: occupied", id, target);
        return None;
    }

    let mut next = circuit.clone();
    match next.update_gate(id, |g| {
        g.qubit = target.qubit;
        g.time = target.time;
    }) {
        Ok(true) => Some(next),
        Ok(false) => None,
        Err(err) => {
            log::debug!("Move of {} ignored: {}", id, err);
            None
        }
    }
}

/// Delete a gate by id; unknown ids are a no-op
/// Gantree: remove(circuit, id) -> Option<Circuit> // 게이트 삭제
pub fn remove(circuit: &Circuit, id: &GateId) -> Option<Circuit> {
    let mut next = circuit.clone();
    next.remove_gate(id).map(|_| next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcd_core::CircuitBuilder;

    #[test]
    fn test_add_to_free_cell() {
        let circuit = Circuit::new(2);
        let next = add(&circuit, GateType::H, Cell::new(0, 0)).unwrap();
        assert_eq!(next.gate_count(), 1);
        let g = gate_at(&next, Cell::new(0, 0)).unwrap();
        assert_eq!(g.gate_type, GateType::H);
        assert!(g.parameters.is_empty());
        // input untouched
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_add_to_occupied_cell_is_noop() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        assert!(add(&circuit, GateType::X, Cell::new(0, 0)).is_none());
        assert!(add(&circuit, GateType::X, Cell::new(1, 0)).is_some());
    }

    #[test]
    fn test_add_out_of_range_is_noop() {
        let circuit = Circuit::new(2);
        assert!(add(&circuit, GateType::H, Cell::new(2, 0)).is_none());
        let cx = Gate::new(GateType::Cnot, Cell::new(1, 0)).control(4);
        assert!(place(&circuit, cx).is_none());
    }

    #[test]
    fn test_occupancy_uses_primary_wire() {
        let circuit = CircuitBuilder::new(2).cnot(0, 1, 0).build();
        assert!(is_occupied(&circuit, Cell::new(1, 0)));
        assert!(!is_occupied(&circuit, Cell::new(0, 0)));
        assert!(is_free(&circuit, Cell::new(0, 0)));
        assert!(!is_free(&circuit, Cell::new(5, 0)));
    }

    #[test]
    fn test_move_clamps() {
        let circuit = CircuitBuilder::new(3).h(0, 2).build();
        let id = circuit.gates()[0].id.clone();

        let moved = move_gate(&circuit, &id, 9, -4, MovePolicy::Tolerate).unwrap();
        let g = moved.gate(&id).unwrap();
        assert_eq!((g.qubit, g.time), (2, 0));
    }

    #[test]
    fn test_move_tolerates_overlap_by_default() {
        let circuit = CircuitBuilder::new(2).h(0, 0).x(1, 0).build();
        let x = gate_at(&circuit, Cell::new(1, 0)).unwrap().id.clone();

        let moved = move_gate(&circuit, &x, 0, 0, MovePolicy::Tolerate).unwrap();
        assert_eq!(moved.gate_count(), 2);
        assert!(move_gate(&circuit, &x, 0, 0, MovePolicy::RejectOccupied).is_none());
    }

    #[test]
    fn test_move_noops() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let id = circuit.gates()[0].id.clone();
        assert!(move_gate(&circuit, &id, 0, 0, MovePolicy::Tolerate).is_none());
        assert!(move_gate(&circuit, &GateId::new("nope"), 1, 1, MovePolicy::Tolerate).is_none());
    }

    #[test]
    fn test_remove() {
        let circuit = CircuitBuilder::new(2).h(0, 0).build();
        let id = circuit.gates()[0].id.clone();
        assert!(remove(&circuit, &id).unwrap().is_empty());
        assert!(remove(&circuit, &GateId::new("nope")).is_none());
    }
}
