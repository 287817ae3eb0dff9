//! # QCD History
//!
//! Linear undo/redo over whole-circuit snapshots, unbounded within a session.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qcd_history // L4: History (완료)
//!     History // 스냅샷 + 커서 (완료)
//!         record // 잘라내고 추가 (완료)
//!         undo // 커서 감소 (완료)
//!         redo // 커서 증가 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qcd_core::Circuit;
//! use qcd_history::History;
//!
//! let mut history = History::new(Circuit::empty());
//! history.record(Circuit::with_name(2, "edited"));
//!
//! assert_eq!(history.undo().unwrap().name(), "New Circuit");
//! assert_eq!(history.redo().unwrap().name(), "edited");
//! assert!(history.redo().is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Snapshot history (Gantree: L4_History → History)
pub mod history;

pub use history::History;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Property Tests
// ============================================================================
