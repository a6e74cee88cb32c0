//! Test utilities for fill passes.
//!
//! [`FillTester`] tracks the initial and current state of a board, applies
//! fill passes to it, and asserts cell-level outcomes with
//! `#[track_caller]` failure locations. All methods return `self` so tests
//! read as a single chain.

use kudoku_core::{Digit, Grid, Position};

use crate::{ConstraintFill, FillPass};

/// A test harness for fill pass implementations.
#[derive(Debug)]
pub struct FillTester {
    initial: Grid,
    current: Grid,
}

impl FillTester {
    /// Creates a new tester from an initial board.
    pub fn new(initial: Grid) -> Self {
        Self {
            initial,
            current: initial,
        }
    }

    /// Creates a new tester from grid text (see [`Grid`]'s `FromStr`).
    ///
    /// # Panics
    ///
    /// Panics if the text cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Applies the pass once.
    #[track_caller]
    pub fn apply_once<P>(mut self, pass: &P) -> Self
    where
        P: FillPass,
    {
        pass.apply(&mut self.current);
        self
    }

    /// Applies the pass repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<P>(mut self, pass: &P) -> Self
    where
        P: FillPass,
    {
        while pass.apply(&mut self.current) {}
        self
    }

    /// Runs a [`ConstraintFill`] to its fixed point.
    #[track_caller]
    pub fn run(mut self, fill: &ConstraintFill) -> Self {
        fill.run(&mut self.current);
        self
    }

    /// Asserts that an initially empty cell now holds `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was not empty initially or does not hold the
    /// expected digit now.
    #[track_caller]
    pub fn assert_filled(self, pos: Position, digit: Digit) -> Self {
        let initial = self.initial.get(pos);
        let current = self.current.get(pos);
        assert_eq!(
            initial, None,
            "Expected cell at {pos} to start empty, but it held {initial:?}"
        );
        assert_eq!(
            current,
            Some(digit),
            "Expected cell at {pos} to be filled with {digit}, but it holds {current:?}"
        );
        self
    }

    /// Asserts that a cell still holds its initial contents.
    ///
    /// # Panics
    ///
    /// Panics if the cell changed.
    #[track_caller]
    pub fn assert_unchanged(self, pos: Position) -> Self {
        let initial = self.initial.get(pos);
        let current = self.current.get(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but the cell went from {initial:?} to {current:?}"
        );
        self
    }

    /// Returns the current board state.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxedFillPass;

    // A pass that never fills anything.
    #[derive(Debug)]
    struct NoOpPass;

    impl FillPass for NoOpPass {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedFillPass {
            Box::new(NoOpPass)
        }

        fn apply(&self, _grid: &mut Grid) -> bool {
            false
        }
    }

    // A pass that fills (0, 0) with 1 if it is empty.
    #[derive(Debug)]
    struct PlaceD1At00;

    impl FillPass for PlaceD1At00 {
        fn name(&self) -> &'static str {
            "place-d1-at-00"
        }

        fn clone_box(&self) -> BoxedFillPass {
            Box::new(PlaceD1At00)
        }

        fn apply(&self, grid: &mut Grid) -> bool {
            let pos = Position::new(0, 0);
            if grid.get(pos).is_some() {
                return false;
            }
            grid.set(pos, Some(Digit::D1));
            true
        }
    }

    #[test]
    fn test_assert_filled() {
        FillTester::new(Grid::new())
            .apply_once(&PlaceD1At00)
            .assert_filled(Position::new(0, 0), Digit::D1);
    }

    #[test]
    #[should_panic(expected = "Expected cell at (0, 0) to be filled")]
    fn test_assert_filled_fails_when_not_filled() {
        FillTester::new(Grid::new())
            .apply_once(&NoOpPass)
            .assert_filled(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_assert_unchanged() {
        FillTester::new(Grid::new())
            .apply_once(&NoOpPass)
            .assert_unchanged(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "Expected no change at (0, 0)")]
    fn test_assert_unchanged_fails_when_changed() {
        FillTester::new(Grid::new())
            .apply_once(&PlaceD1At00)
            .assert_unchanged(Position::new(0, 0));
    }

    #[test]
    fn test_apply_until_stuck_stops() {
        let tester = FillTester::new(Grid::new()).apply_until_stuck(&PlaceD1At00);
        assert_eq!(tester.grid().get(Position::new(0, 0)), Some(Digit::D1));
    }
}
