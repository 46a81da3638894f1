use thiserror::Error;

/// Input and record-consistency failures. Every variant is caught before a
/// mutating call reaches the identity provider or the record store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must be at least 3 characters")]
    UsernameTooShort,

    #[error("username may only contain letters, numbers, and underscores")]
    UsernameInvalidCharacter,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(i64),

    #[error("one-time goals have no progress value to set")]
    NotAProgressGoal,

    #[error("progress goals cannot be completed directly")]
    NotAOneTimeGoal,

    #[error("inconsistent goal record: {0}")]
    InconsistentRecord(String),
}
