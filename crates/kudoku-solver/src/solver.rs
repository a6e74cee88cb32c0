//! Recursive backtracking search.

use kudoku_core::{Grid, Position};

use crate::{ConstraintFill, SolverError, ranking};

/// A depth-first backtracking Sudoku solver.
///
/// The search walks the 81 cells in row-major order. On entering a cell it
/// first runs the constraint fill to its fixed point, and only then
/// branches, trying the cell's candidates in the order produced by
/// [`ranking::ranked_candidates`].
/// Each recursion level works on its own copy of the board, so abandoning
/// a branch is just returning the snapshot taken on entry; recursion depth
/// is bounded by the 81 cells.
///
/// The search is single-threaded and stops at the first solution it
/// reaches; puzzles with several solutions yield whichever one the
/// candidate ordering finds first.
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::{Solver, SolverError};
///
/// let solver = Solver::new();
///
/// // The empty board has many solutions; one of them comes back.
/// let solution = solver.solve(&Grid::new())?;
/// assert!(solution.is_solved());
///
/// // A contradictory board is rejected outright.
/// let text = "11_______".to_owned() + &"_".repeat(72);
/// let contradiction: Grid = text.parse()?;
/// assert_eq!(
///     solver.solve(&contradiction),
///     Err(SolverError::NoSolution)
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    fill: ConstraintFill,
}

impl Solver {
    /// Creates a solver using the standard fill passes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fill: ConstraintFill::standard(),
        }
    }

    /// Creates a solver using a custom fill driver.
    #[must_use]
    pub fn with_fill(fill: ConstraintFill) -> Self {
        Self { fill }
    }

    /// Solves the puzzle, returning the completed board.
    ///
    /// The input board is not modified. Boards whose given cells already
    /// violate the Sudoku rules are rejected without searching.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSolution`] if the givens contradict each
    /// other or the search exhausts every branch.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolverError> {
        if !grid.is_consistent() {
            return Err(SolverError::NoSolution);
        }
        let result = self.solve_from(*grid, 0);
        if result.is_solved() {
            Ok(result)
        } else {
            Err(SolverError::NoSolution)
        }
    }

    /// One level of the search, owning its copy of the board.
    ///
    /// Returns either a solved board, or a board equal to the one passed
    /// in (the entry snapshot) when every continuation from here fails.
    fn solve_from(&self, mut grid: Grid, index: u8) -> Grid {
        let orig = grid;

        self.fill.run(&mut grid);
        if grid.is_solved() {
            return grid;
        }

        // Past the last cell with an unsolved board: this branch is
        // exhausted.
        let Some(pos) = Position::try_from_cell_index(index) else {
            return orig;
        };

        if grid.get(pos).is_some() {
            let result = self.solve_from(grid, index + 1);
            return if result.is_solved() { result } else { orig };
        }

        for digit in ranking::ranked_candidates(&grid, pos) {
            grid.set(pos, Some(digit));
            if grid.is_solved() {
                return grid;
            }
            if index != 80 {
                let result = self.solve_from(grid, index + 1);
                if result.is_solved() {
                    return result;
                }
            }
        }
        orig
    }
}
