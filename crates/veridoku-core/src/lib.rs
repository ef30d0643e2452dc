//! Core data structures for the Veridoku verifier.
//!
//! This crate provides the dependency-free domain types shared by the
//! verification engine and the command-line frontend.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Coordinates** - [`position`] defines [`Position`], an `(x, y)` cell
//!    coordinate on a square grid.
//! 2. **Geometry** - [`geometry`] defines [`Geometry`], which validates a
//!    grid size (positive, perfect square) and enumerates the grid's
//!    checkable [`Unit`]s: rows, columns, and boxes.
//! 3. **Storage** - [`grid`] defines [`Grid`], the row-major cell store
//!    with its text loader ([`FromStr`](std::str::FromStr)) and renderer
//!    ([`Display`](std::fmt::Display)).
//!
//! # Examples
//!
//! ```
//! use veridoku_core::{Geometry, Grid, Position};
//!
//! let grid: Grid = "4
//!     1 2 3 4
//!     3 4 1 2
//!     2 1 4 3
//!     4 3 2 1
//! "
//! .parse()?;
//! assert!(grid.is_complete());
//! assert_eq!(grid.value(Position::new(1, 2)), 1);
//!
//! let geometry = Geometry::new(grid.size())?;
//! assert_eq!(geometry.units().count(), 12); // 4 rows + 4 columns + 4 boxes
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod geometry;
pub mod grid;
pub mod position;
pub mod unit;

pub use self::{
    geometry::{Geometry, GeometryError},
    grid::{Grid, GridError, ParseGridError},
    position::Position,
    unit::{Unit, UnitKind},
};
