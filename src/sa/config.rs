//! SA configuration, optimization direction and cooling schedules.

use crate::error::{AnnealError, Result};

/// Whether lower or higher objectives are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower objective is better.
    #[default]
    Minimize,
    /// Higher objective is better.
    Maximize,
}

impl Direction {
    /// Returns `true` if objective `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        }
    }
}

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter, strictly positive.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Computes the temperature following `temperature`.
    pub fn next(self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => alpha * temperature,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

/// Configuration for a Simulated Annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{CoolingSchedule, Direction, SaConfig};
///
/// let config = SaConfig::default()
///     .with_start_temperature(100.0)
///     .with_stop_temperature(1.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 })
///     .with_direction(Direction::Minimize)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub start_temperature: f64,

    /// The loop runs while the temperature is strictly above this value.
    ///
    /// A value at or above `start_temperature` is valid and yields a run
    /// with zero iterations.
    pub stop_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Optimization direction.
    pub direction: Direction,

    /// Number of neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed used by [`SaRunner::run`](super::SaRunner::run).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            start_temperature: 100.0,
            stop_temperature: 1.0,
            cooling: CoolingSchedule::default(),
            direction: Direction::default(),
            iterations_per_temperature: 1,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_stop_temperature(mut self, t: f64) -> Self {
        self.stop_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Shorthand for geometric cooling with the given factor.
    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling = CoolingSchedule::Geometric { alpha };
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.start_temperature.is_finite() || self.start_temperature <= 0.0 {
            return Err(invalid(format!(
                "start_temperature must be positive and finite, got {}",
                self.start_temperature
            )));
        }
        if !self.stop_temperature.is_finite() || self.stop_temperature <= 0.0 {
            return Err(invalid(format!(
                "stop_temperature must be positive and finite, got {}",
                self.stop_temperature
            )));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(invalid(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(invalid(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
                // Below this, `1 + beta * t` rounds to 1 and the temperature stalls.
                if beta * self.stop_temperature <= f64::EPSILON {
                    return Err(invalid(format!(
                        "lundy-mees beta {beta} is too small to cool below stop_temperature {}",
                        self.stop_temperature
                    )));
                }
            }
        }
        if self.iterations_per_temperature == 0 {
            return Err(invalid("iterations_per_temperature must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> AnnealError {
    AnnealError::InvalidArgument(msg.into())
}
