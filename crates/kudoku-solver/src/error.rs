/// Errors reported by the solving entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The puzzle has no solution: either the given cells already
    /// contradict each other, or the search exhausted every branch.
    #[display("the puzzle has no solution")]
    NoSolution,
}
