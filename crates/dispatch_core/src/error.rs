use thiserror::Error;

/// Errors surfaced by ranking, configuration and registry parsing.
///
/// Per-candidate data problems are never reported here; they become the
/// unreachable distance sentinel on the affected [`crate::RankedDriver`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The incident location is missing or geometrically invalid.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid ranking parameters: {0}")]
    InvalidParams(String),

    #[error("malformed registry payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
