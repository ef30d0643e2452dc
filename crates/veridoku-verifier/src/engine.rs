//! The parallel validation engine.

use log::debug;
use rayon::prelude::*;
use veridoku_core::{Geometry, GeometryError, Grid, Unit};

use crate::{UnitOutcome, ValidationReport, check::check_unit};

/// An error raised by [`ValidationEngine::verify`].
///
/// The internal-consistency variants are deliberately distinct from an
/// invalid verdict: "the puzzle is wrong" is a [`ValidationReport`], while
/// "the checker is broken" is an `EngineError`.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EngineError {
    /// The grid size cannot be split into boxes; a configuration error,
    /// fatal regardless of the grid's fill state.
    #[display("cannot split the grid into units: {_0}")]
    Geometry(#[from] GeometryError),
    /// A unit was enumerated but no task recorded a result for it.
    #[display("internal consistency failure: {unit} was never evaluated")]
    #[from(skip)]
    UnitNotEvaluated {
        /// The unit whose result slot stayed unwritten.
        unit: Unit,
    },
    /// Two results were recorded for the same unit, which means some other
    /// unit's slot was left unwritten.
    #[display("internal consistency failure: {unit} was evaluated more than once")]
    #[from(skip)]
    UnitEvaluatedTwice {
        /// The unit whose result slot was written twice.
        unit: Unit,
    },
    /// The dedicated worker pool could not be built.
    #[display("failed to build worker pool: {_0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// The parallel validation engine.
///
/// Verification is a data-parallel map over independent units (each task
/// reads the shared grid and produces its own `(unit, outcome)` pair)
/// followed by a reduce (AND across outcomes), so any worker count from 1
/// to `3 * N` yields the same verdict; only latency changes. Each task's
/// result slot is derived from its own unit value, never from shared
/// mutable state.
///
/// # Examples
///
/// ```
/// use veridoku_core::Grid;
/// use veridoku_verifier::ValidationEngine;
///
/// let grid: Grid = "4  1 2 3 4  3 4 1 2  2 1 4 3  4 3 2 1".parse()?;
///
/// // The default engine shares rayon's global pool; a dedicated pool
/// // pins the worker count without changing the verdict.
/// let parallel = ValidationEngine::new().verify(&grid)?;
/// let serial = ValidationEngine::with_workers(1)?.verify(&grid)?;
/// assert_eq!(parallel, serial);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ValidationEngine {
    pool: Option<rayon::ThreadPool>,
}

impl ValidationEngine {
    /// Creates an engine that runs unit checks on rayon's global pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { pool: None }
    }

    /// Creates an engine with a dedicated pool of `workers` threads.
    ///
    /// A count of zero lets rayon pick its default thread count.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkerPool`] when the pool cannot be built.
    pub fn with_workers(workers: usize) -> Result<Self, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Verifies a grid, returning the complete/valid verdict plus per-unit
    /// outcome tables.
    ///
    /// An incomplete grid short-circuits to `{complete: false, valid:
    /// false}` without checking a single unit. A complete grid gets one
    /// concurrent check per unit; aggregation waits for all of them (the
    /// join barrier) before reading any result.
    ///
    /// The grid is only read; calling `verify` again on the same grid
    /// returns an identical report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Geometry`] when the grid size is not a
    /// perfect square, and an internal-consistency error when the result
    /// tables are not covered exactly once after the join barrier.
    pub fn verify(&self, grid: &Grid) -> Result<ValidationReport, EngineError> {
        let geometry = Geometry::new(grid.size())?;

        if !grid.is_complete() {
            debug!(
                "size-{} grid is incomplete, skipping unit checks",
                grid.size()
            );
            return Ok(ValidationReport::incomplete());
        }

        let outcomes = match &self.pool {
            Some(pool) => pool.install(|| check_all(grid, &geometry)),
            None => check_all(grid, &geometry),
        };

        let report = aggregate(&geometry, &outcomes)?;
        debug!(
            "checked {} units of a size-{} grid: valid={}",
            outcomes.len(),
            grid.size(),
            report.verdict().valid
        );
        Ok(report)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fans one check per unit out across the current rayon pool.
///
/// `collect` is the join barrier: it returns only after every dispatched
/// check has completed, so no partial result ever escapes.
fn check_all(grid: &Grid, geometry: &Geometry) -> Vec<(Unit, UnitOutcome)> {
    let units: Vec<Unit> = geometry.units().collect();
    units
        .into_par_iter()
        .map(|unit| (unit, check_unit(grid, geometry, unit)))
        .collect()
}

/// Folds per-unit outcomes into the three result tables and reduces them
/// to one verdict.
///
/// Every slot starts `NotEvaluated` and must be written exactly once; both
/// a twice-written and a never-written slot surface as internal errors
/// before any verdict is formed.
fn aggregate(
    geometry: &Geometry,
    outcomes: &[(Unit, UnitOutcome)],
) -> Result<ValidationReport, EngineError> {
    let size = geometry.size();
    let mut rows = vec![UnitOutcome::NotEvaluated; size];
    let mut columns = vec![UnitOutcome::NotEvaluated; size];
    let mut boxes = vec![UnitOutcome::NotEvaluated; size];

    for &(unit, outcome) in outcomes {
        let slot = match unit {
            Unit::Row { y } => &mut rows[y],
            Unit::Column { x } => &mut columns[x],
            Unit::Box { index } => &mut boxes[index],
        };
        if !slot.is_not_evaluated() {
            return Err(EngineError::UnitEvaluatedTwice { unit });
        }
        *slot = outcome;
    }

    for unit in geometry.units() {
        let outcome = match unit {
            Unit::Row { y } => rows[y],
            Unit::Column { x } => columns[x],
            Unit::Box { index } => boxes[index],
        };
        if outcome.is_not_evaluated() {
            return Err(EngineError::UnitNotEvaluated { unit });
        }
    }

    let valid = rows
        .iter()
        .chain(&columns)
        .chain(&boxes)
        .all(|outcome| outcome.is_valid());
    Ok(ValidationReport::complete(valid, rows, columns, boxes))
}
