//! Validation of user-supplied fields.
//!
//! Pure string functions. The app layer runs these before any call to the
//! identity provider or the record store.

use crate::error::ValidationError;

pub const USERNAME_MIN_LEN: usize = 3;

/// Case-fold a username for storage and lookup. Usernames are ASCII-only
/// (see [`username`]), so ASCII lowercasing is the whole story.
pub fn fold_username(username: &str) -> String {
    username.to_ascii_lowercase()
}

/// Validate a raw username and return its canonical (case-folded) form.
pub fn username(raw: &str) -> Result<String, ValidationError> {
    if raw.chars().count() < USERNAME_MIN_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::UsernameInvalidCharacter);
    }
    Ok(fold_username(raw))
}

/// Reject empty or whitespace-only goal titles.
pub fn title(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}
