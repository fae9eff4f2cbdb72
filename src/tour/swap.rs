//! Pairwise-swap neighborhood with O(1) incremental cost.
//!
//! # Algorithm
//!
//! Given a depot-bounded sequence `0, s₀, s₁, ..., sₙ₋₁, 0` and positions
//! `i < j`, exchanging `sᵢ` and `sⱼ` only changes the edges touching those
//! two positions:
//!
//! - **Non-adjacent** (`j > i + 1`): four edges leave
//!   (`pred(i)→sᵢ`, `sᵢ→succ(i)`, `pred(j)→sⱼ`, `sⱼ→succ(j)`) and four
//!   enter (`pred(i)→sⱼ`, `sⱼ→succ(i)`, `pred(j)→sᵢ`, `sᵢ→succ(j)`).
//! - **Adjacent** (`j = i + 1`): the edge `sᵢ→sⱼ` is shared, so only three
//!   edges leave (`pred(i)→sᵢ`, `sᵢ→sⱼ`, `sⱼ→succ(j)`) and three enter
//!   (`pred(i)→sⱼ`, `sⱼ→sᵢ`, `sᵢ→succ(j)`).
//!
//! The depot is the predecessor of position 0 and the successor of the last
//! position. Both formulas are directional and hold for asymmetric matrices.

use super::matrix::{DistanceMatrix, DEPOT};
use super::solution::Tour;
use crate::error::{AnnealError, Result};
use crate::sa::NeighborGenerator;
use rand::Rng;

/// Random pairwise-swap neighbor generator for [`Tour`]s.
///
/// Memoryless: every call draws a fresh pair, with no tabu list or
/// duplicate filtering.
///
/// Tours passed to the generator must be built against the same matrix
/// it holds; ids beyond its size are only caught in debug builds.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_anneal::sa::{NeighborGenerator, Solution};
/// use u_anneal::tour::{DistanceMatrix, SwapNeighborGenerator, Tour};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let dm = DistanceMatrix::random_symmetric(8, 100..=200, &mut rng);
/// let tour = Tour::identity(7, &dm).unwrap();
/// let generator = SwapNeighborGenerator::new(dm.clone());
///
/// let next = generator.gen_next_sol(&tour, &mut rng).unwrap();
/// assert_eq!(next.objective(), dm.tour_cost(next.sequence()));
/// ```
#[derive(Debug, Clone)]
pub struct SwapNeighborGenerator {
    distances: DistanceMatrix,
}

impl SwapNeighborGenerator {
    pub fn new(distances: DistanceMatrix) -> Self {
        Self { distances }
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Cost change of exchanging positions `a` and `b` in `sequence`.
    ///
    /// The order of `a` and `b` does not matter. Returns `0.0` when
    /// `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap_delta(&self, sequence: &[usize], a: usize, b: usize) -> f64 {
        let (at, bt) = (a.min(b), a.max(b));
        if at == bt {
            return 0.0;
        }
        let d = |from: usize, to: usize| self.distances.get(from, to);

        let node_a = sequence[at];
        let node_b = sequence[bt];
        let a_pred = pred(sequence, at);
        let b_succ = succ(sequence, bt);

        if at + 1 != bt {
            let a_succ = succ(sequence, at);
            let b_pred = pred(sequence, bt);
            let removed = d(a_pred, node_a) + d(node_a, a_succ) + d(b_pred, node_b) + d(node_b, b_succ);
            let added = d(a_pred, node_b) + d(node_b, a_succ) + d(b_pred, node_a) + d(node_a, b_succ);
            return added - removed;
        }

        let removed = d(a_pred, node_a) + d(node_a, node_b) + d(node_b, b_succ);
        let added = d(a_pred, node_b) + d(node_b, node_a) + d(node_a, b_succ);
        added - removed
    }

    /// Builds the neighbor obtained by exchanging positions `a` and `b`.
    ///
    /// `current` is left untouched.
    pub fn apply_swap(&self, current: &Tour, a: usize, b: usize) -> Result<Tour> {
        let len = current.len();
        if a == b || a >= len || b >= len {
            return Err(AnnealError::InvalidArgument(format!(
                "swap positions ({a}, {b}) must be distinct and below {len}"
            )));
        }
        let delta = self.swap_delta(current.sequence(), a, b);
        let mut next = current.clone();
        next.swap_positions(a, b, delta);
        Ok(next)
    }
}

impl NeighborGenerator for SwapNeighborGenerator {
    type Solution = Tour;

    fn gen_next_sol<R: Rng>(&self, current: &Tour, rng: &mut R) -> Result<Tour> {
        let len = current.len();
        if len < 2 {
            return Err(AnnealError::SequenceTooShort { len });
        }
        let picked = rand::seq::index::sample(rng, len, 2);
        self.apply_swap(current, picked.index(0), picked.index(1))
    }
}

fn pred(sequence: &[usize], idx: usize) -> usize {
    if idx == 0 {
        DEPOT
    } else {
        sequence[idx - 1]
    }
}

fn succ(sequence: &[usize], idx: usize) -> usize {
    if idx + 1 == sequence.len() {
        DEPOT
    } else {
        sequence[idx + 1]
    }
}
