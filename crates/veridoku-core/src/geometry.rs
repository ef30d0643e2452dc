//! Grid geometry: size validation and unit enumeration.

use std::{
    error::Error,
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{Position, Unit};

/// The shape of a square grid: its side length and derived box side.
///
/// Construction validates the size invariant once, so every other geometry
/// operation is infallible: a `Geometry` always describes a positive,
/// perfect-square size.
///
/// # Examples
///
/// ```
/// use veridoku_core::{Geometry, GeometryError, Unit};
///
/// let geometry = Geometry::new(9)?;
/// assert_eq!(geometry.box_side(), 3);
/// assert_eq!(geometry.units().count(), 27);
///
/// // 5 has no integer square root, so boxes cannot be formed.
/// assert_eq!(
///     Geometry::new(5),
///     Err(GeometryError::NotPerfectSquare { size: 5 })
/// );
/// # Ok::<(), GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    size: usize,
    box_side: usize,
}

/// An error constructing a [`Geometry`].
///
/// Both variants are configuration errors: the grid cannot be split into
/// checkable units at all, which is distinct from the grid merely holding
/// an invalid puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The grid size was zero.
    ZeroSize,
    /// The grid size has no exact integer square root, so the box side
    /// length is not well-defined.
    NotPerfectSquare {
        /// The offending size.
        size: usize,
    },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ZeroSize => f.write_str("grid size must be positive"),
            GeometryError::NotPerfectSquare { size } => {
                write!(f, "grid size {size} is not a perfect square")
            }
        }
    }
}

impl Error for GeometryError {}

impl Geometry {
    /// Creates a geometry for a grid of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroSize`] for `size == 0` and
    /// [`GeometryError::NotPerfectSquare`] when `size` has no exact integer
    /// square root.
    pub fn new(size: usize) -> Result<Self, GeometryError> {
        if size == 0 {
            return Err(GeometryError::ZeroSize);
        }
        let box_side = size.isqrt();
        if box_side * box_side != size {
            return Err(GeometryError::NotPerfectSquare { size });
        }
        Ok(Self { size, box_side })
    }

    /// Returns the grid side length.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the side length of one box (`sqrt(size)`).
    #[must_use]
    #[inline]
    pub const fn box_side(&self) -> usize {
        self.box_side
    }

    /// Returns the number of checkable units: `size` rows, `size` columns,
    /// and `size` boxes.
    #[must_use]
    #[inline]
    pub const fn unit_count(&self) -> usize {
        self.size * 3
    }

    /// Returns an iterator over all checkable units, in row, column, box
    /// order.
    #[must_use]
    #[inline]
    pub fn units(&self) -> Units {
        Units {
            front: 0,
            back: self.unit_count(),
            size: self.size,
        }
    }

    /// Converts a cell index within a unit (0 to `size - 1`) into an
    /// absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` or the unit's own index is not below `size`.
    #[must_use]
    pub fn position_from_cell_index(&self, unit: Unit, i: usize) -> Position {
        assert!(i < self.size);
        assert!(unit.index() < self.size);
        match unit {
            Unit::Row { y } => Position::new(i, y),
            Unit::Column { x } => Position::new(x, i),
            Unit::Box { index } => {
                let corner_x = (index % self.box_side) * self.box_side;
                let corner_y = (index / self.box_side) * self.box_side;
                Position::new(corner_x + i % self.box_side, corner_y + i / self.box_side)
            }
        }
    }

    /// Returns an iterator over the `size` member positions of a unit.
    ///
    /// Row and column members run in coordinate order; box members scan the
    /// block row by row.
    ///
    /// # Panics
    ///
    /// The returned iterator panics if the unit's index is not below
    /// `size`.
    #[must_use]
    #[inline]
    pub fn positions(&self, unit: Unit) -> UnitPositions {
        UnitPositions {
            geometry: *self,
            unit,
            front: 0,
            back: self.size,
        }
    }
}

/// Iterator over all checkable units of a [`Geometry`].
///
/// Yields `size` rows, then `size` columns, then `size` boxes.
#[derive(Debug, Clone)]
pub struct Units {
    front: usize,
    back: usize,
    size: usize,
}

impl Units {
    fn unit_at(&self, linear: usize) -> Unit {
        debug_assert!(linear < self.size * 3);
        match (linear / self.size, linear % self.size) {
            (0, y) => Unit::Row { y },
            (1, x) => Unit::Column { x },
            (_, index) => Unit::Box { index },
        }
    }
}

impl Iterator for Units {
    type Item = Unit;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let unit = self.unit_at(self.front);
        self.front += 1;
        Some(unit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Units {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.unit_at(self.back))
    }
}

impl FusedIterator for Units {}
impl ExactSizeIterator for Units {}

/// Iterator over the member positions of one unit.
#[derive(Debug, Clone)]
pub struct UnitPositions {
    geometry: Geometry,
    unit: Unit,
    front: usize,
    back: usize,
}

impl Iterator for UnitPositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.geometry.position_from_cell_index(self.unit, self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for UnitPositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.geometry.position_from_cell_index(self.unit, self.back))
    }
}

impl FusedIterator for UnitPositions {}
impl ExactSizeIterator for UnitPositions {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_accepts_perfect_squares() {
        for (size, box_side) in [(1, 1), (4, 2), (9, 3), (16, 4), (25, 5)] {
            let geometry = Geometry::new(size).unwrap();
            assert_eq!(geometry.size(), size);
            assert_eq!(geometry.box_side(), box_side);
        }
    }

    #[test]
    fn test_new_rejects_other_sizes() {
        assert_eq!(Geometry::new(0), Err(GeometryError::ZeroSize));
        for size in [2, 3, 5, 6, 8, 12, 15] {
            assert_eq!(
                Geometry::new(size),
                Err(GeometryError::NotPerfectSquare { size })
            );
        }
    }

    #[test]
    fn test_units_order_and_bounds() {
        let geometry = Geometry::new(4).unwrap();
        let units: Vec<_> = geometry.units().collect();
        assert_eq!(units.len(), 12);
        assert_eq!(units[0], Unit::Row { y: 0 });
        assert_eq!(units[3], Unit::Row { y: 3 });
        assert_eq!(units[4], Unit::Column { x: 0 });
        assert_eq!(units[8], Unit::Box { index: 0 });
        assert_eq!(units[11], Unit::Box { index: 3 });
    }

    #[test]
    fn test_units_double_ended() {
        let geometry = Geometry::new(9).unwrap();
        let mut iter = geometry.units();
        assert_eq!(iter.next(), Some(Unit::Row { y: 0 }));
        assert_eq!(iter.next_back(), Some(Unit::Box { index: 8 }));
        assert_eq!(iter.len(), 25);
    }

    #[test]
    fn test_box_corners() {
        // Block rows top to bottom, block columns left to right.
        let geometry = Geometry::new(9).unwrap();
        let corner = |index| geometry.position_from_cell_index(Unit::Box { index }, 0);
        assert_eq!(corner(0), Position::new(0, 0));
        assert_eq!(corner(1), Position::new(3, 0));
        assert_eq!(corner(2), Position::new(6, 0));
        assert_eq!(corner(3), Position::new(0, 3));
        assert_eq!(corner(8), Position::new(6, 6));
    }

    #[test]
    fn test_box_positions_scan_block_rows() {
        let geometry = Geometry::new(4).unwrap();
        let positions: Vec<_> = geometry.positions(Unit::Box { index: 3 }).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_row_and_column_positions() {
        let geometry = Geometry::new(4).unwrap();
        let row: Vec<_> = geometry.positions(Unit::Row { y: 1 }).collect();
        assert_eq!(row, (0..4).map(|x| Position::new(x, 1)).collect::<Vec<_>>());
        let column: Vec<_> = geometry.positions(Unit::Column { x: 2 }).collect();
        assert_eq!(
            column,
            (0..4).map(|y| Position::new(2, y)).collect::<Vec<_>>()
        );
    }

    #[test]
    #[should_panic(expected = "i < self.size")]
    fn test_cell_index_out_of_range_panics() {
        let geometry = Geometry::new(4).unwrap();
        let _ = geometry.position_from_cell_index(Unit::Row { y: 0 }, 4);
    }

    #[test]
    #[should_panic(expected = "unit.index() < self.size")]
    fn test_unit_index_out_of_range_panics() {
        let geometry = Geometry::new(4).unwrap();
        let _ = geometry.position_from_cell_index(Unit::Row { y: 4 }, 0);
    }

    proptest! {
        #[test]
        fn prop_each_position_covered_once_per_kind(box_side in 1_usize..=5) {
            let size = box_side * box_side;
            let geometry = Geometry::new(size).unwrap();

            let mut coverage: HashMap<Position, [usize; 3]> = HashMap::new();
            for unit in geometry.units() {
                let slot = match unit {
                    Unit::Row { .. } => 0,
                    Unit::Column { .. } => 1,
                    Unit::Box { .. } => 2,
                };
                for pos in geometry.positions(unit) {
                    coverage.entry(pos).or_default()[slot] += 1;
                }
            }

            prop_assert_eq!(coverage.len(), size * size);
            for counts in coverage.values() {
                prop_assert_eq!(*counts, [1, 1, 1]);
            }
        }

        #[test]
        fn prop_every_unit_has_size_members(box_side in 1_usize..=5) {
            let size = box_side * box_side;
            let geometry = Geometry::new(size).unwrap();
            prop_assert_eq!(geometry.units().count(), size * 3);
            for unit in geometry.units() {
                prop_assert_eq!(geometry.positions(unit).count(), size);
            }
        }
    }
}
