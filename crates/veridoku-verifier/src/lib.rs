//! Concurrent verification engine for Sudoku grids.
//!
//! A grid is **complete** when no cell is empty, and **valid** when every
//! row, column, and box contains each value in `1..=N` exactly once. This
//! crate decides both, fanning the per-unit checks out across a thread pool
//! and folding the partial results into one [`Verdict`].
//!
//! The interesting part is the aggregation protocol: every unit gets its
//! own result slot, written exactly once by the task that checked it, and
//! a slot still [`NotEvaluated`](UnitOutcome::NotEvaluated) after the join
//! barrier is reported as an [`EngineError`], never as a puzzle property.
//!
//! # Examples
//!
//! ```
//! use veridoku_core::Grid;
//! use veridoku_verifier::ValidationEngine;
//!
//! let grid: Grid = "4
//!     1 2 3 4
//!     3 4 1 2
//!     2 1 4 3
//!     4 3 2 1
//! "
//! .parse()?;
//!
//! let report = ValidationEngine::new().verify(&grid)?;
//! assert!(report.verdict().complete);
//! assert!(report.verdict().valid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod check;
pub mod engine;
pub mod outcome;

pub use self::{
    check::check_unit,
    engine::{EngineError, ValidationEngine},
    outcome::{UnitOutcome, ValidationReport, Verdict},
};
