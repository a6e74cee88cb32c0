//! Candidate ordering heuristic.
//!
//! Before branching on an empty cell, the solver asks for the cell's legal
//! digits ordered by how often each one already appears in the other rows
//! and columns passing through the cell's 3x3 box. A digit that shows up
//! in those neighboring lines is crowded out of more of the box, making
//! the current cell one of its few remaining homes, so it is tried first.
//! That tends to cut down on backtracking.

use kudoku_core::{Digit, DigitSet, Grid, House, Position};
use tinyvec::ArrayVec;

/// Returns every digit that can legally be placed in the empty cell at
/// `pos`.
#[must_use]
pub fn legal_candidates(grid: &Grid, pos: Position) -> DigitSet {
    Digit::ALL
        .into_iter()
        .filter(|&digit| grid.allows(pos, digit))
        .collect()
}

/// Counts how often each legal digit appears in `house`.
///
/// Houses with no empty cell left are skipped: a completed line cannot
/// receive any of the cell's candidates, so it carries no signal.
fn tally_house(grid: &Grid, house: House, possible: DigitSet, occurrences: &mut [u8; 9]) {
    if house.positions().all(|pos| grid.get(pos).is_some()) {
        return;
    }
    for pos in house.positions() {
        if let Some(digit) = grid.get(pos)
            && possible.contains(digit)
        {
            occurrences[usize::from(digit.value() - 1)] += 1;
        }
    }
}

/// Returns the legal digits for the empty cell at `pos`, ordered by the
/// occurrence heuristic.
///
/// The occurrence count of a candidate is the number of times it appears
/// in the other two rows and the other two columns of the cell's box
/// (full lines excluded). Candidates are emitted from the highest count
/// down; ties and the zero-count tail are in ascending digit order. Every
/// member of [`legal_candidates`] appears exactly once, so an empty result
/// means the cell has no legal digit at all.
#[must_use]
pub fn ranked_candidates(grid: &Grid, pos: Position) -> RankedCandidates {
    let possible = legal_candidates(grid, pos);
    let mut occurrences = [0_u8; 9];

    let row_start = Position::block_start(pos.y());
    for y in row_start..row_start + 3 {
        if y != pos.y() {
            tally_house(grid, House::Row { y }, possible, &mut occurrences);
        }
    }
    let column_start = Position::block_start(pos.x());
    for x in column_start..column_start + 3 {
        if x != pos.x() {
            tally_house(grid, House::Column { x }, possible, &mut occurrences);
        }
    }

    let mut ranked = RankedCandidates::default();
    let mut level = occurrences.iter().copied().max().unwrap_or(0);
    loop {
        for digit in possible {
            if occurrences[usize::from(digit.value() - 1)] == level {
                ranked.push(digit);
            }
        }
        if level == 0 {
            break;
        }
        level -= 1;
    }
    ranked
}

/// An ordered list of candidate digits for a single cell.
///
/// Produced by [`ranked_candidates`]. Holds at most nine digits inline,
/// so building one never allocates; the backtracking search creates one
/// per branch point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCandidates {
    values: ArrayVec<[u8; 9]>,
}

impl RankedCandidates {
    fn push(&mut self, digit: Digit) {
        self.values.push(digit.value());
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the cell has no legal digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the candidates, best first.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.values.iter().map(|&value| Digit::from_value(value))
    }
}

impl IntoIterator for RankedCandidates {
    type Item = Digit;
    type IntoIter = std::iter::Map<tinyvec::ArrayVecIterator<[u8; 9]>, fn(u8) -> Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter().map(Digit::from_value)
    }
}
