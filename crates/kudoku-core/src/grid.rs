//! The 9x9 board and its validity predicates.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9x9 Sudoku board.
///
/// Each cell is either empty (`None`) or holds a [`Digit`]. The type is
/// `Copy`, so the solver can snapshot a whole board by value; a snapshot
/// is 81 bytes.
///
/// # Text format
///
/// [`FromStr`] accepts nine rows of nine cells: digits `1`-`9` are filled
/// cells, and `_`, `.`, or `0` are empty cells. All whitespace is ignored,
/// so rows may be broken up for readability:
///
/// ```
/// use kudoku_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.empty_count(), 51);
/// # Ok::<(), kudoku_core::ParseGridError>(())
/// ```
///
/// [`Display`] writes the same format back out, one row per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Grid {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a board from a 9x9 numeric matrix, with 0 denoting an empty
    /// cell and 1-9 a filled cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] for the first cell value
    /// outside the range 0-9.
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                grid.cells[y][x] = match value {
                    0 => None,
                    _ => match Digit::try_from_value(value) {
                        Some(digit) => Some(digit),
                        None => return Err(GridError::ValueOutOfRange { x, y, value }),
                    },
                };
            }
        }
        Ok(grid)
    }

    /// Returns the board as a 9x9 numeric matrix, with 0 for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[usize::from(pos.y())][usize::from(pos.x())] =
                self.get(pos).map_or(0, Digit::value);
        }
        values
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = cell;
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
            .count()
    }

    /// Returns `true` if placing `digit` at `pos` would not conflict with
    /// any filled cell in the same row, column, or 3x3 box.
    ///
    /// The cell at `pos` is assumed to be empty; a filled cell at `pos`
    /// counts as a conflict like any other cell of its houses.
    #[must_use]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        let cell = Some(digit);
        for i in 0..9 {
            if self.cells[usize::from(pos.y())][i] == cell
                || self.cells[i][usize::from(pos.x())] == cell
            {
                return false;
            }
        }
        let origin = pos.block_origin();
        for y in origin.y()..origin.y() + 3 {
            for x in origin.x()..origin.x() + 3 {
                if self.cells[usize::from(y)][usize::from(x)] == cell {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if no filled cell conflicts with another filled cell
    /// in its row, column, or 3x3 box. Empty cells are ignored.
    ///
    /// Each filled cell is checked by clearing it on a scratch copy,
    /// asking [`allows`](Self::allows) about its own digit, and restoring
    /// it, walking the board in row-major order.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut scratch = *self;
        for pos in Position::ALL {
            if let Some(digit) = scratch.get(pos) {
                scratch.set(pos, None);
                let ok = scratch.allows(pos, digit);
                scratch.set(pos, Some(digit));
                if !ok {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if the board is completely filled and every cell
    /// satisfies the Sudoku rules.
    ///
    /// This is a full re-validation, not just an emptiness check: a fully
    /// filled board that breaks a rule is reported unsolved. The first
    /// empty cell short-circuits to `false`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut scratch = *self;
        for pos in Position::ALL {
            let Some(digit) = scratch.get(pos) else {
                return false;
            };
            scratch.set(pos, None);
            let ok = scratch.allows(pos, digit);
            scratch.set(pos, Some(digit));
            if !ok {
                return false;
            }
        }
        true
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    write!(f, " ")?;
                }
                match self.cells[y][x] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0_usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '_' | '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                #[expect(clippy::cast_possible_truncation)]
                grid.set(Position::from_cell_index(count as u8), cell);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

/// Errors building a [`Grid`] from numeric cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A cell value was outside the range 0-9.
    #[display("cell value out of range at ({x}, {y}): {value}")]
    ValueOutOfRange {
        /// Column of the offending cell (0-8).
        x: usize,
        /// Row of the offending cell (0-8).
        y: usize,
        /// The rejected value.
        value: u8,
    },
}

/// Errors parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contained a character that is neither a cell nor
    /// whitespace.
    #[display("invalid grid character: {character:?}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
}
