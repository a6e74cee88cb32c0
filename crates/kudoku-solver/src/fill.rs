//! Deterministic constraint-propagation passes.
//!
//! A fill pass scans one kind of house (rows, columns, or boxes) and, for
//! every (house, digit) pair, fills the single empty cell that can legally
//! take the digit, when exactly one such cell exists. [`ConstraintFill`]
//! chains the three passes and iterates them to a fixed point, which is
//! the cheap propagation step the backtracking solver runs before every
//! branch.

use std::{collections::HashMap, fmt::Debug};

use kudoku_core::{Digit, Grid, House, Position};

/// A single constraint-propagation pass over the board.
///
/// Passes only ever fill empty cells with values that are legal at the
/// moment of placement; they never clear or overwrite a cell. This is
/// what bounds the fixed-point iteration: each application makes
/// monotonic progress toward at most 81 filled cells.
pub trait FillPass: Debug + Send + Sync {
    /// Returns the name of the pass, used in [`FillStats`].
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the pass.
    fn clone_box(&self) -> BoxedFillPass;

    /// Applies the pass once, returning `true` if any cell was filled.
    fn apply(&self, grid: &mut Grid) -> bool;
}

/// A boxed fill pass.
pub type BoxedFillPass = Box<dyn FillPass>;

impl Clone for BoxedFillPass {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Fills every (house, digit) single among `houses`.
///
/// For each house and digit, empty cells that admit the digit are counted;
/// the scan of a house stops as soon as a second admitting cell turns up.
/// A lone admitting cell is assigned immediately, so later (house, digit)
/// pairs in the same application already see the placement.
fn fill_house_singles<I>(grid: &mut Grid, houses: I) -> bool
where
    I: IntoIterator<Item = House>,
{
    let mut changed = false;
    for house in houses {
        for digit in Digit::ALL {
            let mut found: Option<Position> = None;
            let mut multiple = false;
            for pos in house.positions() {
                if grid.get(pos).is_none() && grid.allows(pos, digit) {
                    if found.is_some() {
                        multiple = true;
                        break;
                    }
                    found = Some(pos);
                }
            }
            if !multiple && let Some(pos) = found {
                grid.set(pos, Some(digit));
                changed = true;
            }
        }
    }
    changed
}

/// Fills digits that have exactly one legal cell left in their row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowFill;

impl RowFill {
    /// Creates a new `RowFill` pass.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FillPass for RowFill {
    fn name(&self) -> &'static str {
        "row singles"
    }

    fn clone_box(&self) -> BoxedFillPass {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        fill_house_singles(grid, House::ROWS)
    }
}

/// Fills digits that have exactly one legal cell left in their column.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnFill;

impl ColumnFill {
    /// Creates a new `ColumnFill` pass.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FillPass for ColumnFill {
    fn name(&self) -> &'static str {
        "column singles"
    }

    fn clone_box(&self) -> BoxedFillPass {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        fill_house_singles(grid, House::COLUMNS)
    }
}

/// Fills digits that have exactly one legal cell left in their 3x3 box.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxFill;

impl BoxFill {
    /// Creates a new `BoxFill` pass.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FillPass for BoxFill {
    fn name(&self) -> &'static str {
        "box singles"
    }

    fn clone_box(&self) -> BoxedFillPass {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        fill_house_singles(grid, House::BOXES)
    }
}

/// Statistics collected while iterating fill passes.
///
/// Tracks how many times each pass filled at least one cell, and how many
/// full cycles the fixed-point iteration ran (including the final cycle
/// that changed nothing).
#[derive(Debug, Default, Clone)]
pub struct FillStats {
    /// Map of pass names to the number of applications that made progress.
    pub applications: HashMap<&'static str, usize>,
    /// Number of full cycles run.
    pub cycles: usize,
}

impl FillStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many applications of the named pass made progress.
    #[must_use]
    pub fn count(&self, pass_name: &str) -> usize {
        self.applications.get(pass_name).copied().unwrap_or(0)
    }

    /// Returns `true` if any pass filled at least one cell.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.applications.is_empty()
    }
}

/// Fixed-point driver over a sequence of fill passes.
///
/// One cycle runs every pass once, in order; cycles repeat until a full
/// cycle leaves the grid unchanged. The standard pass order is rows, then
/// columns, then boxes. The order affects how quickly the fixed point is
/// reached, not which cells end up filled, since every pass re-validates
/// the grid state it sees.
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::ConstraintFill;
///
/// let fill = ConstraintFill::standard();
/// let mut grid = Grid::new();
///
/// // An empty board has no forced cells.
/// assert!(!fill.run(&mut grid));
/// assert_eq!(grid, Grid::new());
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintFill {
    passes: Vec<BoxedFillPass>,
}

impl ConstraintFill {
    /// Creates a driver over the given passes, applied in order within
    /// each cycle.
    #[must_use]
    pub fn new(passes: Vec<BoxedFillPass>) -> Self {
        Self { passes }
    }

    /// Creates a driver with the standard row, column, box pass order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RowFill::new()),
            Box::new(ColumnFill::new()),
            Box::new(BoxFill::new()),
        ])
    }

    /// Runs one full cycle of all passes, returning `true` if the grid
    /// changed.
    pub fn cycle(&self, grid: &mut Grid) -> bool {
        let before = *grid;
        for pass in &self.passes {
            pass.apply(grid);
        }
        *grid != before
    }

    /// Iterates cycles until one changes nothing, returning `true` if any
    /// cell was filled along the way.
    pub fn run(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        while self.cycle(grid) {
            changed = true;
        }
        changed
    }

    /// Like [`run`](Self::run), but records per-pass statistics.
    pub fn run_with_stats(&self, grid: &mut Grid) -> FillStats {
        let mut stats = FillStats::new();
        loop {
            let before = *grid;
            for pass in &self.passes {
                if pass.apply(grid) {
                    *stats.applications.entry(pass.name()).or_default() += 1;
                }
            }
            stats.cycles += 1;
            if *grid == before {
                break;
            }
        }
        stats
    }
}

impl Default for ConstraintFill {
    fn default() -> Self {
        Self::standard()
    }
}
