use thiserror::Error;

use goaltrack_auth::error::AuthError;
use goaltrack_core::error::ValidationError;
use goaltrack_store::error::StoreError;

/// The user-facing failure taxonomy. Validation happens before any mutating
/// call; nothing is retried; the first error aborts the flow.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("username already taken: {username}")]
    Conflict { username: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}
