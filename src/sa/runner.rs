//! SA execution loop.

use super::config::SaConfig;
use super::types::{NeighborGenerator, Solution};
use crate::error::{AnnealError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Objective of the best solution.
    pub best_objective: f64,

    /// Total number of iterations (generator calls).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves strictly better than the incumbent.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// The initial objective followed by every new best objective, in the
    /// order they were found.
    pub best_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, seeding the RNG from `config.seed`.
    ///
    /// Without a seed the RNG is seeded from a random value, so the run is
    /// not reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::sa::{SaConfig, SaRunner};
    /// use u_anneal::tour::{DistanceMatrix, SwapNeighborGenerator, Tour};
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0.0, 10.0, 8.0, 12.0],
    ///     vec![10.0, 0.0, 5.0, 7.0],
    ///     vec![8.0, 5.0, 0.0, 5.0],
    ///     vec![10.0, 7.0, 5.0, 0.0],
    /// ])
    /// .unwrap();
    /// let start = Tour::new(vec![1, 2, 3], &dm).unwrap();
    /// let generator = SwapNeighborGenerator::new(dm);
    ///
    /// let config = SaConfig::default()
    ///     .with_start_temperature(100.0)
    ///     .with_stop_temperature(1.0)
    ///     .with_cooling_factor(0.9)
    ///     .with_seed(42);
    /// let result = SaRunner::run(start, &generator, &config).unwrap();
    /// assert!(result.best_objective <= 30.0);
    /// assert_eq!(result.iterations, 44);
    /// ```
    pub fn run<G: NeighborGenerator>(
        initial: G::Solution,
        generator: &G,
        config: &SaConfig,
    ) -> Result<SaResult<G::Solution>> {
        Self::run_with_cancel(initial, generator, config, None)
    }

    /// Runs SA with an optional cancellation token, checked once per
    /// temperature step.
    pub fn run_with_cancel<G: NeighborGenerator>(
        initial: G::Solution,
        generator: &G,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<G::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        execute(
            initial,
            generator,
            config,
            &mut rng,
            cancel.as_deref(),
            |_| {},
        )
    }

    /// Runs SA with a caller-owned RNG and a new-best observer.
    ///
    /// `config.seed` is ignored. `on_new_best` is invoked synchronously
    /// every time the best solution improves, with the new best.
    pub fn run_with_rng<G, R, F>(
        initial: G::Solution,
        generator: &G,
        config: &SaConfig,
        rng: &mut R,
        on_new_best: F,
    ) -> Result<SaResult<G::Solution>>
    where
        G: NeighborGenerator,
        R: Rng,
        F: FnMut(&G::Solution),
    {
        execute(initial, generator, config, rng, None, on_new_best)
    }
}

fn execute<G, R, F>(
    initial: G::Solution,
    generator: &G,
    config: &SaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
    mut on_new_best: F,
) -> Result<SaResult<G::Solution>>
where
    G: NeighborGenerator,
    R: Rng,
    F: FnMut(&G::Solution),
{
    config.validate()?;

    let initial_objective = initial.objective();
    if !initial_objective.is_finite() {
        return Err(AnnealError::InvalidArgument(format!(
            "initial objective must be finite, got {initial_objective}"
        )));
    }

    let direction = config.direction;
    let mut best = initial.clone();
    let mut incumbent = initial;

    let mut temperature = config.start_temperature;
    let mut total_iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;
    let mut best_history = vec![initial_objective];

    while temperature > config.stop_temperature {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }

        for _ in 0..config.iterations_per_temperature {
            if budget_exhausted(config, total_iterations) {
                break;
            }

            let candidate = generator.gen_next_sol(&incumbent, rng)?;
            let candidate_objective = candidate.objective();
            if !candidate_objective.is_finite() {
                return Err(AnnealError::InvalidNeighbor(candidate_objective));
            }
            let incumbent_objective = incumbent.objective();
            total_iterations += 1;

            if direction.is_better(candidate_objective, incumbent_objective) {
                improving_moves += 1;
                accepted_moves += 1;
                incumbent = candidate;

                if direction.is_better(candidate_objective, best.objective()) {
                    best = incumbent.clone();
                    best_history.push(candidate_objective);
                    debug!(
                        iteration = total_iterations,
                        temperature,
                        objective = candidate_objective,
                        "new best solution"
                    );
                    on_new_best(&best);
                }
            } else {
                // The uniform draw is consumed only on this branch.
                let probability =
                    acceptance_probability(candidate_objective, incumbent_objective, temperature);
                if rng.random::<f64>() <= probability {
                    incumbent = candidate;
                    accepted_moves += 1;
                }
            }
        }

        if budget_exhausted(config, total_iterations) {
            break;
        }

        temperature = config.cooling.next(temperature);
        trace!(temperature, iterations = total_iterations, "temperature step");
    }

    let best_objective = best.objective();
    info!(
        iterations = total_iterations,
        accepted_moves,
        improving_moves,
        final_temperature = temperature,
        best_objective,
        cancelled,
        "annealing finished"
    );

    Ok(SaResult {
        best,
        best_objective,
        iterations: total_iterations,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        cancelled,
        best_history,
    })
}

fn budget_exhausted(config: &SaConfig, total_iterations: usize) -> bool {
    config.max_iterations > 0 && total_iterations >= config.max_iterations
}

/// Metropolis criterion on the absolute objective difference, so the same
/// formula serves both directions.
fn acceptance_probability(candidate: f64, incumbent: f64, temperature: f64) -> f64 {
    let delta = (candidate - incumbent).abs();
    (-delta / temperature).exp()
}
