//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, the entry engine, and input providers so
//! clients can bubble them up with consistent context.

use bowling_core::{EngineError, FrameError};
use thiserror::Error;

use crate::repository::GameKey;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{key} does not exist")]
    GameNotFound { key: GameKey },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("correction rejected: {0}")]
    InvalidCorrection(#[from] FrameError),

    #[error("input provider failed")]
    Input(#[source] std::io::Error),
}

impl RuntimeError {
    /// Returns true for errors caused by the user's input rather than the
    /// environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::GameNotFound { .. } | Self::InvalidCorrection(_))
    }
}
