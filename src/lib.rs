//! Problem-agnostic simulated annealing.
//!
//! - **Simulated Annealing (SA)**: a generic cooling loop driven by two
//!   capabilities, a [`Solution`](sa::Solution) that carries its own
//!   objective and a [`NeighborGenerator`](sa::NeighborGenerator) that
//!   proposes one candidate at a time. Direction (minimize or maximize),
//!   cooling schedule and randomness are supplied by the caller.
//! - **Tour**: a depot-bounded visiting sequence with a pairwise-swap
//!   neighborhood whose cost delta is computed in O(1).
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_anneal::sa::{SaConfig, SaRunner, Solution};
//! use u_anneal::tour::{DistanceMatrix, SwapNeighborGenerator, Tour};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let dm = DistanceMatrix::random_symmetric(21, 100..=200, &mut rng);
//! let start = Tour::identity(20, &dm).unwrap();
//! let generator = SwapNeighborGenerator::new(dm);
//!
//! let config = SaConfig::default()
//!     .with_start_temperature(start.objective() * 1.5)
//!     .with_stop_temperature(1.0)
//!     .with_cooling_factor(0.99);
//!
//! let result = SaRunner::run_with_rng(start.clone(), &generator, &config, &mut rng, |best| {
//!     println!("new best: {}", best.objective());
//! })
//! .unwrap();
//! assert!(result.best_objective <= start.objective());
//! ```

pub mod error;
pub mod sa;
pub mod tour;

pub use error::{AnnealError, Result};
