use hexpath_core::Coord;

use crate::distance::euclidean;

/// Pluggable cost strategy for the search.
///
/// `step_cost` prices a move across a single edge; `estimate` is the
/// heuristic distance to the goal. The default [`Euclidean`] model uses the
/// same distance for both, which is what the engine's compatibility tests
/// assume.
pub trait CostModel {
    /// Cost of moving from `from` to the adjacent cell `to`. Must be > 0
    /// for distinct cells.
    fn step_cost(&self, from: Coord, to: Coord) -> f32;

    /// Heuristic estimate of remaining distance from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> f32;
}

/// Euclidean distance used for both the step cost and the heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl CostModel for Euclidean {
    #[inline]
    fn step_cost(&self, from: Coord, to: Coord) -> f32 {
        euclidean(from, to)
    }

    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> f32 {
        euclidean(from, to)
    }
}
