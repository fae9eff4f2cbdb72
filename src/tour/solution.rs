//! Depot-bounded visiting sequence.

use super::matrix::{DistanceMatrix, DEPOT};
use crate::error::{AnnealError, Result};
use crate::sa::Solution;

/// An ordered visiting sequence with its total length.
///
/// The depot is implied before the first and after the last entry and is
/// never stored, so id 0 cannot appear in `sequence`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    sequence: Vec<usize>,
    objective: f64,
}

impl Tour {
    /// Builds a tour and computes its objective by full recomputation.
    ///
    /// Fails if any id is the depot or lies outside the matrix.
    pub fn new(sequence: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        if let Some(&bad) = sequence
            .iter()
            .find(|&&id| id == DEPOT || id >= distances.size())
        {
            return Err(AnnealError::InvalidArgument(format!(
                "location id {bad} is not a visitable location in a matrix of size {}",
                distances.size()
            )));
        }
        let objective = distances.tour_cost(&sequence);
        Ok(Self {
            sequence,
            objective,
        })
    }

    /// The tour `1, 2, ..., n`.
    pub fn identity(n: usize, distances: &DistanceMatrix) -> Result<Self> {
        Self::new((1..=n).collect(), distances)
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Exchanges positions `a` and `b` and shifts the objective by `delta`.
    pub(crate) fn swap_positions(&mut self, a: usize, b: usize, delta: f64) {
        self.sequence.swap(a, b);
        self.objective += delta;
    }
}

impl Solution for Tour {
    fn objective(&self) -> f64 {
        self.objective
    }

    fn set_objective(&mut self, objective: f64) {
        self.objective = objective;
    }
}
