//! Grid storage, text loading, and rendering.

use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use crate::Position;

/// An `N x N` grid of cell values.
///
/// Cell values are `0` for an empty cell and `1..=N` for a filled one,
/// stored row-major. A `Grid` can only be obtained through validating
/// constructors, so its dimensions and value ranges always hold; the
/// verifier borrows it immutably and never changes it.
///
/// The grid's text form is the verifier's file format: the size token
/// followed by `size * size` cell values in row-major order, parsed by
/// [`FromStr`] and produced by [`Display`].
///
/// # Examples
///
/// ```
/// use veridoku_core::{Grid, Position};
///
/// let grid: Grid = "4  1 2 3 4  3 4 1 2  2 1 4 3  4 3 2 1".parse()?;
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.value(Position::new(0, 1)), 3);
/// assert!(grid.is_complete());
/// # Ok::<(), veridoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<usize>,
}

/// An error constructing a [`Grid`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid size was zero.
    ZeroSize,
    /// The number of cells did not match `size * size`.
    CellCountMismatch {
        /// The declared grid size.
        size: usize,
        /// The expected cell count (`size * size`).
        expected: usize,
        /// The cell count actually supplied.
        actual: usize,
    },
    /// A cell held a value outside `0..=size`.
    ValueOutOfRange {
        /// Where the offending value sits.
        position: Position,
        /// The offending value.
        value: usize,
        /// The grid size bounding the domain.
        size: usize,
    },
}

impl Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => f.write_str("grid size must be positive"),
            GridError::CellCountMismatch {
                size,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "a grid of size {size} needs {expected} cells, got {actual}"
                )
            }
            GridError::ValueOutOfRange {
                position,
                value,
                size,
            } => {
                write!(
                    f,
                    "cell ({}, {}) holds {value}, outside 0..={size}",
                    position.x(),
                    position.y()
                )
            }
        }
    }
}

impl Error for GridError {}

/// An error parsing a [`Grid`] from text.
///
/// Parsing never partially constructs a grid: any malformed input fails
/// before a `Grid` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input held no tokens at all.
    MissingSize,
    /// A token was not a non-negative integer.
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// The input ended before `size * size` cell values were read.
    MissingCells {
        /// The expected cell count.
        expected: usize,
        /// The number of cells actually present.
        actual: usize,
    },
    /// Input continued after the last expected cell value.
    TrailingToken {
        /// The first unexpected token.
        token: String,
    },
    /// The tokens parsed but violated a grid invariant.
    Grid(GridError),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGridError::MissingSize => f.write_str("missing grid size"),
            ParseGridError::InvalidToken { token } => write!(f, "invalid token {token:?}"),
            ParseGridError::MissingCells { expected, actual } => {
                write!(f, "expected {expected} cell values, found {actual}")
            }
            ParseGridError::TrailingToken { token } => {
                write!(f, "unexpected trailing token {token:?}")
            }
            ParseGridError::Grid(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ParseGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseGridError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ParseGridError {
    fn from(err: GridError) -> Self {
        ParseGridError::Grid(err)
    }
}

impl Grid {
    /// Creates a grid from a size and row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSize`] for `size == 0`,
    /// [`GridError::CellCountMismatch`] when `cells.len() != size * size`,
    /// and [`GridError::ValueOutOfRange`] when a cell value exceeds `size`.
    pub fn new(size: usize, cells: Vec<usize>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                size,
                expected,
                actual: cells.len(),
            });
        }
        if let Some((i, &value)) = cells.iter().enumerate().find(|&(_, &value)| value > size) {
            return Err(GridError::ValueOutOfRange {
                position: Position::new(i % size, i / size),
                value,
                size,
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the grid side length.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at a position (`0` for an empty cell).
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    pub fn value(&self, pos: Position) -> usize {
        assert!(pos.x() < self.size && pos.y() < self.size);
        self.cells[pos.y() * self.size + pos.x()]
    }

    /// Returns `true` when no cell is empty.
    ///
    /// This is the completeness gate: validity checking only makes sense
    /// for a complete grid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let parse = |token: &str| {
            token
                .parse::<usize>()
                .map_err(|_| ParseGridError::InvalidToken {
                    token: token.to_owned(),
                })
        };

        let size = parse(tokens.next().ok_or(ParseGridError::MissingSize)?)?;
        let expected = size * size;

        let cells = tokens
            .by_ref()
            .take(expected)
            .map(parse)
            .collect::<Result<Vec<_>, _>>()?;
        if cells.len() < expected {
            return Err(ParseGridError::MissingCells {
                expected,
                actual: cells.len(),
            });
        }
        if let Some(token) = tokens.next() {
            return Err(ParseGridError::TrailingToken {
                token: token.to_owned(),
            });
        }

        Ok(Grid::new(size, cells)?)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.cells.chunks(self.size) {
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
