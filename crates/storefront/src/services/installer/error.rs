//! Installer error types.

use thiserror::Error;

use super::console::ConsoleError;
use crate::db::RepositoryError;

/// Errors that can occur while running the setup wizard.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Talking to the operator failed.
    #[error("console error: {0}")]
    Console(#[from] ConsoleError),

    /// A prompt was answered invalidly too many times.
    #[error("no valid value supplied for {prompt:?} after {attempts} attempts")]
    MaxAttempts {
        /// The prompt that was exhausted.
        prompt: String,
        /// How many answers were rejected.
        attempts: u32,
    },

    /// Repository/database error. Persistence failures are fatal; the
    /// wizard never retries them.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Internal invariant failure.
    #[error("internal error: {0}")]
    Internal(String),
}
