//! Core data structures for the kudoku Sudoku solver.
//!
//! This crate provides the board model shared by the solving components:
//!
//! - [`digit`]: type-safe cell values 1-9 ([`Digit`])
//! - [`digit_set`]: bitmask sets of digits, used for candidate tracking
//!   ([`DigitSet`])
//! - [`position`]: board coordinates and the row-major linear cell index
//!   ([`Position`])
//! - [`house`]: rows, columns, and 3x3 boxes as a single enumeration
//!   ([`House`])
//! - [`grid`]: the 9x9 board itself ([`Grid`]), including the validity
//!   predicates the solver is built on
//!
//! A cell is either empty or holds a [`Digit`]; the numeric convention of
//! external inputs (0 for empty, 1-9 for filled) is confined to the
//! [`Grid::from_values`] / [`Grid::to_values`] boundary.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! let pos = Position::new(4, 4);
//! grid.set(pos, Some(Digit::D5));
//!
//! // 5 is no longer allowed anywhere in the same row, column, or box.
//! assert!(!grid.allows(Position::new(0, 4), Digit::D5));
//! assert!(!grid.allows(Position::new(4, 0), Digit::D5));
//! assert!(!grid.allows(Position::new(3, 3), Digit::D5));
//! assert!(grid.allows(Position::new(0, 0), Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError, ParseGridError},
    house::House,
    position::Position,
};
