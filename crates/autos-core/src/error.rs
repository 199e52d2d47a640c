//! Error types for automaton generation.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors that can occur while generating or rendering automata.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// An element was requested from an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptySequence,

    /// Transitions need at least one state other than the default target.
    #[error("too few states for a transition: {num_states} (must be >= 2)")]
    TooFewStates { num_states: usize },

    /// Rules need room for at least one bracketed literal.
    #[error("invalid neighbor bound: {max_neighbors} (must be within [2, 10])")]
    InvalidNeighborBound { max_neighbors: usize },

    /// The generator configuration is inconsistent.
    #[error("invalid generator config: {message}")]
    InvalidConfig { message: String },

    /// JSON rendering error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing a document.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
