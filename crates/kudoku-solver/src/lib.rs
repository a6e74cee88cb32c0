//! Solving engine for 9x9 Sudoku boards.
//!
//! The solver layers three components on top of [`kudoku_core`]:
//!
//! - [`fill`]: deterministic constraint propagation: row, column, and box
//!   passes that fill cells where a digit has exactly one legal position,
//!   iterated to a fixed point by [`ConstraintFill`]
//! - [`ranking`]: the candidate ordering heuristic used to pick which
//!   digit to try first at a branch point
//! - [`Solver`]: the recursive depth-first backtracking search itself
//!
//! # Examples
//!
//! ```
//! use kudoku_core::Grid;
//! use kudoku_solver::Solver;
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solution = Solver::new().solve(&grid)?;
//! assert!(solution.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, fill::*, ranking::*, solver::*};

mod error;
pub mod fill;
pub mod ranking;
mod solver;

#[cfg(test)]
mod testing;
