//! Grid geometry
//!
//! Gantree: L3_Placement → GridGeometry
//!
//! Pure pixel ↔ cell mapping. Column index is time, row index is qubit.

use qcd_core::grid::{DEFAULT_CELL_HEIGHT_PX, DEFAULT_CELL_WIDTH_PX, VISIBLE_TIME_STEPS};
use qcd_core::Cell;
use serde::{Deserialize, Serialize};

/// Fixed cell dimensions of the canvas
/// Gantree: GridGeometry // 그리드 크기
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Cell width in pixels (one time step)
    pub cell_width: f64,
    /// Cell height in pixels (one qubit wire)
    pub cell_height: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH_PX,
            cell_height: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

impl GridGeometry {
    /// Create geometry; non-positive or non-finite sizes fall back to the defaults
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        let sane = |v: f64, default: f64| if v.is_finite() && v > 0.0 { v } else { default };
        Self {
            cell_width: sane(cell_width, DEFAULT_CELL_WIDTH_PX),
            cell_height: sane(cell_height, DEFAULT_CELL_HEIGHT_PX),
        }
    }

    /// Square cells
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    /// Map a canvas offset to a cell: `time = floor(x / w)`, `qubit = floor(y / h)`.
    /// Returns `None` when the point lies outside `[0, qubits) × [0, ∞)`.
    /// Gantree: cell_at(&self, x, y, qubits) -> Option<Cell> // 좌표 변환
    pub fn cell_at(&self, x: f64, y: f64, qubits: usize) -> Option<Cell> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let time = (x / self.cell_width).floor();
        let qubit = (y / self.cell_height).floor();
        if qubit >= qubits as f64 || time >= usize::MAX as f64 {
            return None;
        }
        Some(Cell::new(qubit as usize, time as usize))
    }

    /// Top-left pixel of a cell
    pub fn origin(&self, cell: Cell) -> (f64, f64) {
        (
            cell.time as f64 * self.cell_width,
            cell.qubit as f64 * self.cell_height,
        )
    }

    /// Pixel size of a canvas showing `qubits` wires and the default visible columns
    pub fn canvas_size(&self, qubits: usize) -> (f64, f64) {
        (
            VISIBLE_TIME_STEPS as f64 * self.cell_width,
            qubits as f64 * self.cell_height,
        )
    }
}
