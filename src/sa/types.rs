//! Core traits for Simulated Annealing.

use crate::error::Result;
use rand::Rng;

/// A candidate solution carrying its own objective value.
///
/// `Clone` is the copy operation the engine uses to snapshot the best
/// solution; it must produce a fully independent value.
///
/// The solution is direction-agnostic: whether a lower or a higher
/// objective is preferred is decided by the run's
/// [`Direction`](super::Direction).
pub trait Solution: Clone {
    /// The objective value of the represented state.
    fn objective(&self) -> f64;

    /// Overwrites the objective value.
    fn set_objective(&mut self, objective: f64);
}

/// Produces one candidate neighbor from a current solution.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_anneal::error::Result;
/// use u_anneal::sa::{NeighborGenerator, Solution};
///
/// #[derive(Clone)]
/// struct Point {
///     x: f64,
///     objective: f64,
/// }
///
/// impl Solution for Point {
///     fn objective(&self) -> f64 {
///         self.objective
///     }
///     fn set_objective(&mut self, objective: f64) {
///         self.objective = objective;
///     }
/// }
///
/// struct Jitter;
///
/// impl NeighborGenerator for Jitter {
///     type Solution = Point;
///
///     fn gen_next_sol<R: Rng>(&self, current: &Point, rng: &mut R) -> Result<Point> {
///         let x = current.x + rng.random_range(-1.0..1.0);
///         Ok(Point { x, objective: x * x })
///     }
/// }
/// ```
pub trait NeighborGenerator {
    /// The solution type this generator works on.
    type Solution: Solution;

    /// Returns a new neighbor of `current`.
    ///
    /// The returned objective must equal the true cost of the returned
    /// state, whether it was computed incrementally or from scratch.
    /// Structurally impossible requests (e.g. too few elements to form a
    /// move) are reported as errors rather than degenerate candidates.
    fn gen_next_sol<R: Rng>(
        &self,
        current: &Self::Solution,
        rng: &mut R,
    ) -> Result<Self::Solution>;
}
