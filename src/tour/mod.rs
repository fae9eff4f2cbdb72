//! Depot-bounded sequence optimization.
//!
//! Plugs a traveling-salesman-style tour into the generic SA engine:
//! a dense [`DistanceMatrix`] with the depot at index 0, the [`Tour`]
//! solution and the [`SwapNeighborGenerator`], which evaluates each
//! pairwise swap in constant time.
//!
//! # Reference
//!
//! Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod matrix;
mod solution;
mod swap;

pub use matrix::{DistanceMatrix, DEPOT};
pub use solution::Tour;
pub use swap::SwapNeighborGenerator;
