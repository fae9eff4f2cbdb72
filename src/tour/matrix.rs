//! Dense distance matrix with the depot at index 0.

use crate::error::{AnnealError, Result};
use rand::Rng;
use std::ops::RangeInclusive;

/// Location id of the depot. Bounds every tour but is never stored in one.
pub const DEPOT: usize = 0;

/// A dense n×n distance matrix stored in row-major order.
///
/// Index 0 is the depot; indices `1..size` are visitable locations.
/// Distances may be asymmetric.
///
/// # Examples
///
/// ```
/// use u_anneal::tour::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 4.0, 6.0],
///     vec![4.0, 0.0, 3.0],
///     vec![6.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// // depot -> 1 -> 2 -> depot
/// assert_eq!(dm.tour_cost(&[1, 2]), 13.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// The input must be non-empty and square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(AnnealError::InvalidArgument(
                "distance matrix needs at least the depot row".into(),
            ));
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(AnnealError::InvalidArgument(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Generates a symmetric matrix with a zero diagonal and integer-valued
    /// distances drawn uniformly from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn random_symmetric<R: Rng>(size: usize, range: RangeInclusive<u32>, rng: &mut R) -> Self {
        let mut dm = Self::new(size);
        for i in 0..size {
            for j in (i + 1)..size {
                let d = f64::from(rng.random_range(range.clone()));
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds. An out-of-bounds `to` panics in
    /// debug builds only.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(to < self.size, "location {to} outside matrix of size {}", self.size);
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        debug_assert!(to < self.size, "location {to} outside matrix of size {}", self.size);
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns a copy with every distance negated.
    ///
    /// Minimizing on `self` and maximizing on the negation are equivalent.
    pub fn negated(&self) -> Self {
        Self {
            data: self.data.iter().map(|d| -d).collect(),
            size: self.size,
        }
    }

    /// Full cost of visiting `sequence` starting and ending at the depot.
    ///
    /// An empty sequence costs nothing.
    pub fn tour_cost(&self, sequence: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (sequence.first(), sequence.last()) else {
            return 0.0;
        };
        let inner: f64 = sequence.windows(2).map(|w| self.get(w[0], w[1])).sum();
        self.get(DEPOT, first) + inner + self.get(last, DEPOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 5.0], vec![6.0, 0.0]]).expect("square");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 6.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert!(DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).is_err());
        assert!(DistanceMatrix::from_rows(&[]).is_err());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_random_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let dm = DistanceMatrix::random_symmetric(12, 100..=200, &mut rng);
        assert!(dm.is_symmetric(0.0));
        for i in 0..12 {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..12 {
                if i != j {
                    let d = dm.get(i, j);
                    assert!((100.0..=200.0).contains(&d));
                    assert_eq!(d.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_random_symmetric_empty_range_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        let _ = DistanceMatrix::random_symmetric(3, 200..=100, &mut rng);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside matrix")]
    fn test_get_rejects_column_past_row_end() {
        let dm = DistanceMatrix::new(4);
        // In range of the flat buffer, but not a valid column.
        let _ = dm.get(1, 5);
    }

    #[test]
    fn test_negated() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 3.0], vec![4.0, 0.0]]).expect("square");
        let neg = dm.negated();
        assert_eq!(neg.get(0, 1), -3.0);
        assert_eq!(neg.get(1, 0), -4.0);
        assert_eq!(neg.tour_cost(&[1]), -dm.tour_cost(&[1]));
    }

    #[test]
    fn test_tour_cost() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 8.0, 12.0],
            vec![10.0, 0.0, 5.0, 7.0],
            vec![8.0, 5.0, 0.0, 5.0],
            vec![10.0, 7.0, 5.0, 0.0],
        ])
        .expect("square");
        assert_eq!(dm.tour_cost(&[1, 2, 3]), 30.0);
        assert_eq!(dm.tour_cost(&[2, 1, 3]), 30.0);
        assert_eq!(dm.tour_cost(&[3]), 22.0);
        assert!(!dm.is_symmetric(1e-10));
        assert_eq!(dm.tour_cost(&[]), 0.0);
    }
}
