//! Error type shared by the annealing engine and the tour plug-in.

use thiserror::Error;

/// Errors raised by configuration checks and neighbor generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// Malformed parameters: temperatures, cooling factors, matrices, tours.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A swap neighborhood needs two distinct positions.
    #[error("sequence of length {len} is too short to pick two distinct positions")]
    SequenceTooShort { len: usize },

    /// A generator produced a candidate whose objective is NaN or infinite.
    #[error("neighbor generator returned a non-finite objective: {0}")]
    InvalidNeighbor(f64),
}

pub type Result<T> = std::result::Result<T, AnnealError>;
