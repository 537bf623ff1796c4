use thiserror::Error;

/// Error taxonomy shared by the upstream client and the engines.
///
/// Expected-empty outcomes (a filter matching nothing) are `Ok` values, not
/// errors; `NotFound` is reserved for lookups whose subject does not exist at
/// all. Ratio and density computations raise `InvalidComputation` instead of
/// letting a zero denominator propagate as `NaN` or infinity.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested country or region has no matching records.
    #[error("no matching countries")]
    NotFound,
    /// Upstream fetch failed for transport or server reasons. Not retried
    /// beyond the client's short backoff ladder.
    #[error("country API unavailable: {reason}")]
    Unavailable { reason: String },
    /// Division by zero or a missing numeric field during a ratio computation.
    #[error("invalid computation: {0}")]
    InvalidComputation(String),
    /// Malformed or empty required parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
