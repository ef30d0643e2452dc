//! Verification outcomes: per-unit results, verdicts, and reports.

use veridoku_core::Unit;

/// The outcome of checking a single unit.
///
/// Result slots start as `NotEvaluated` and are written exactly once by the
/// task that checks the unit, making "never checked" a named, testable
/// case rather than a magic number: a `NotEvaluated` surviving aggregation
/// signals a dispatch bug in the engine, not a property of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UnitOutcome {
    /// The unit contains every value in `1..=N` exactly once.
    Valid,
    /// The unit is missing a value, holds a duplicate, or holds a value
    /// outside the domain.
    Invalid,
    /// No task has written a result for this unit.
    NotEvaluated,
}

/// The final complete/valid determination for one grid.
///
/// `valid` only carries meaning when `complete` is true; for an incomplete
/// grid it is reported as `false` by convention, since nothing can be said
/// about the validity of a puzzle that is not fully filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether every cell of the grid is filled.
    pub complete: bool,
    /// Whether every row, column, and box checks out.
    pub valid: bool,
}

/// A full verification result: the verdict plus per-unit outcome tables.
///
/// The tables let callers and tests pinpoint which unit failed. For an
/// incomplete grid the tables are empty: the engine checks zero units
/// before short-circuiting.
///
/// # Examples
///
/// ```
/// use veridoku_core::{Grid, Unit};
/// use veridoku_verifier::{UnitOutcome, ValidationEngine};
///
/// // Top row holds a duplicated 1.
/// let grid: Grid = "4  1 1 3 4  3 4 1 2  2 1 4 3  4 3 2 1".parse()?;
/// let report = ValidationEngine::new().verify(&grid)?;
///
/// assert!(!report.verdict().valid);
/// assert_eq!(report.outcome(Unit::Row { y: 0 }), Some(UnitOutcome::Invalid));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    verdict: Verdict,
    rows: Vec<UnitOutcome>,
    columns: Vec<UnitOutcome>,
    boxes: Vec<UnitOutcome>,
}

impl ValidationReport {
    /// Builds the report for an incomplete grid: no unit was checked.
    pub(crate) const fn incomplete() -> Self {
        Self {
            verdict: Verdict {
                complete: false,
                valid: false,
            },
            rows: Vec::new(),
            columns: Vec::new(),
            boxes: Vec::new(),
        }
    }

    /// Builds the report for a complete grid from fully evaluated tables.
    pub(crate) fn complete(
        valid: bool,
        rows: Vec<UnitOutcome>,
        columns: Vec<UnitOutcome>,
        boxes: Vec<UnitOutcome>,
    ) -> Self {
        Self {
            verdict: Verdict {
                complete: true,
                valid,
            },
            rows,
            columns,
            boxes,
        }
    }

    /// Returns the final verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the per-row outcomes, indexed by `y`.
    #[must_use]
    pub fn rows(&self) -> &[UnitOutcome] {
        &self.rows
    }

    /// Returns the per-column outcomes, indexed by `x`.
    #[must_use]
    pub fn columns(&self) -> &[UnitOutcome] {
        &self.columns
    }

    /// Returns the per-box outcomes, indexed by box index.
    #[must_use]
    pub fn boxes(&self) -> &[UnitOutcome] {
        &self.boxes
    }

    /// Returns the outcome recorded for one unit, or `None` when the unit
    /// is out of range or no units were checked at all.
    #[must_use]
    pub fn outcome(&self, unit: Unit) -> Option<UnitOutcome> {
        let table = match unit {
            Unit::Row { .. } => &self.rows,
            Unit::Column { .. } => &self.columns,
            Unit::Box { .. } => &self.boxes,
        };
        table.get(unit.index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_report_has_empty_tables() {
        let report = ValidationReport::incomplete();
        assert!(!report.verdict().complete);
        assert!(!report.verdict().valid);
        assert!(report.rows().is_empty());
        assert!(report.columns().is_empty());
        assert!(report.boxes().is_empty());
        assert_eq!(report.outcome(Unit::Row { y: 0 }), None);
    }

    #[test]
    fn test_outcome_indexes_the_right_table() {
        let report = ValidationReport::complete(
            false,
            vec![UnitOutcome::Valid, UnitOutcome::Invalid],
            vec![UnitOutcome::Valid, UnitOutcome::Valid],
            vec![UnitOutcome::Invalid, UnitOutcome::Valid],
        );
        assert_eq!(report.outcome(Unit::Row { y: 1 }), Some(UnitOutcome::Invalid));
        assert_eq!(
            report.outcome(Unit::Column { x: 1 }),
            Some(UnitOutcome::Valid)
        );
        assert_eq!(
            report.outcome(Unit::Box { index: 0 }),
            Some(UnitOutcome::Invalid)
        );
        assert_eq!(report.outcome(Unit::Box { index: 2 }), None);
    }

    #[test]
    fn test_is_variant_helpers() {
        assert!(UnitOutcome::Valid.is_valid());
        assert!(UnitOutcome::Invalid.is_invalid());
        assert!(UnitOutcome::NotEvaluated.is_not_evaluated());
    }
}
