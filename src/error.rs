//! Error types for clause modules and module graphs.

use thiserror::Error;

/// # Overview
///
/// Errors raised when building modules and graphs, or when a vector does not
/// fit the shape a clause was built for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input width must not be zero")]
    MissingInputs,

    #[error("output width must not be zero")]
    MissingOutputs,

    #[error("state width is required")]
    MissingStates,

    #[error("state width must be positive, got {0}")]
    InvalidStates(i16),

    #[error("no random source: a seed is required without the std feature")]
    MissingRandom,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("vector carries no true label")]
    MissingLabel,

    #[error("true label range {start}..{end} exceeds label vector of length {len}")]
    LabelRange { start: usize, end: usize, len: usize },

    #[error("automaton position {position} outside [-{states}, {states}]")]
    PositionOutOfRange { position: i16, states: i16 },

    #[error("graph has no layers")]
    EmptyGraph,

    #[error("layer {0} has no modules")]
    EmptyLayer(usize)
}

/// # Overview
///
/// Result type for clause and graph operations.
pub type Result<T> = core::result::Result<T, Error>;
