//! Error type shared by every fallible operation in the crate.

use std::time::Duration;

use thiserror::Error as ThisError;

/// Failures reported by route optimization.
///
/// The optimizer never returns a partial ordering: a call either yields a
/// complete [`Tour`](crate::models::Tour) or one of these variants.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The caller supplied malformed input (too few locations, a non-square
    /// matrix, a missing or negative travel time, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Every closed tour passes through at least one unreachable leg.
    #[error("no route visits every location and returns to the origin")]
    NoRouteFound,
    /// The search did not finish inside a caller-imposed time budget.
    #[error("route search exceeded its time limit of {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
