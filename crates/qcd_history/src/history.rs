//! Linear undo/redo history
//!
//! Gantree: L4_History → History
//!
//! ```text
//! record(c3)
//!   snapshots: [c0, c1, c2, c3]   cursor = 3
//!
//! undo() x2
//!   snapshots: [c0, c1, c2, c3]   cursor = 1   (c2, c3 form the redo lane)
//!
//! record(c4)   redo lane discarded
//!   snapshots: [c0, c1, c4]       cursor = 2
//! ```
//!
//! Snapshots are whole circuits behind `Arc`, so handing the current one
//! out is a pointer copy and a recorded snapshot can never change.

use qcd_core::Circuit;
use std::fmt;
use std::sync::Arc;

/// Snapshot stack with a cursor on the active circuit
/// Gantree: History // 실행 취소 기록
#[derive(Clone)]
pub struct History {
    /// Never empty
    snapshots: Vec<Arc<Circuit>>,
    /// Index of the active snapshot
    cursor: usize,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Circuit::empty())
    }
}

impl History {
    /// Start a history whose only snapshot is `initial`
    pub fn new(initial: Circuit) -> Self {
        Self {
            snapshots: vec![Arc::new(initial)],
            cursor: 0,
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Truncate to `[0, cursor]`, append, and move the cursor to the end
    /// Gantree: record(&mut, Circuit) -> Arc<Circuit> // 스냅샷 기록
    pub fn record(&mut self, circuit: Circuit) -> Arc<Circuit> {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            log::debug!("Discarding {} redo snapshot(s)", discarded);
        }
        self.snapshots.truncate(self.cursor + 1);
        let snapshot = Arc::new(circuit);
        self.snapshots.push(Arc::clone(&snapshot));
        self.cursor = self.snapshots.len() - 1;
        snapshot
    }

    /// Step back; `None` at the start of history
    /// Gantree: undo(&mut) -> Option<Arc<Circuit>> // 실행 취소
    pub fn undo(&mut self) -> Option<Arc<Circuit>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward; `None` at the end of history
    /// Gantree: redo(&mut) -> Option<Arc<Circuit>> // 다시 실행
    pub fn redo(&mut self) -> Option<Arc<Circuit>> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Active snapshot
    pub fn current(&self) -> Arc<Circuit> {
        Arc::clone(&self.snapshots[self.cursor])
    }

    /// Borrow the active snapshot
    pub fn current_ref(&self) -> &Circuit {
        &self.snapshots[self.cursor]
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the initial snapshot is always retained
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots available to undo
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Snapshots available to redo
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }
}
