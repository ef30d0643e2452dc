//! Single-unit validity checking.

use veridoku_core::{Geometry, Grid, Unit};

use crate::UnitOutcome;

/// Checks one unit of a grid, returning [`UnitOutcome::Valid`] iff the
/// unit's `N` cells contain every value in `1..=N`.
///
/// A duplicate needs no separate detection: over exactly `N` cells and `N`
/// target values, a duplicate forces some other value to be absent, so
/// presence of every target value already decides validity. A cell outside
/// the domain (an empty `0` or a value above `N`) makes the unit invalid
/// immediately.
///
/// This function is pure: it reads the grid, produces an outcome, and has
/// no other observable effect, which is what licenses running one call per
/// unit concurrently with no coordination.
///
/// # Panics
///
/// Panics if `grid` and `geometry` disagree on the grid size.
///
/// # Examples
///
/// ```
/// use veridoku_core::{Geometry, Grid, Unit};
/// use veridoku_verifier::{UnitOutcome, check_unit};
///
/// let grid: Grid = "4  1 1 3 4  3 4 1 2  2 1 4 3  4 3 2 1".parse()?;
/// let geometry = Geometry::new(4)?;
///
/// assert_eq!(
///     check_unit(&grid, &geometry, Unit::Row { y: 0 }),
///     UnitOutcome::Invalid
/// );
/// assert_eq!(
///     check_unit(&grid, &geometry, Unit::Row { y: 1 }),
///     UnitOutcome::Valid
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn check_unit(grid: &Grid, geometry: &Geometry, unit: Unit) -> UnitOutcome {
    assert_eq!(grid.size(), geometry.size());
    let size = geometry.size();

    let mut seen = vec![false; size];
    for pos in geometry.positions(unit) {
        let value = grid.value(pos);
        if value == 0 || value > size {
            return UnitOutcome::Invalid;
        }
        seen[value - 1] = true;
    }

    if seen.into_iter().all(|present| present) {
        UnitOutcome::Valid
    } else {
        UnitOutcome::Invalid
    }
}
