//! Record key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of records in the goaltrack bucket.

use uuid::Uuid;

use crate::validate;

pub fn profile(id: Uuid) -> String {
    format!("profiles/{id}.json")
}

/// Username → profile id index object. The key is case-folded, which is what
/// makes both lookup and the uniqueness claim case-insensitive.
pub fn username_index(username: &str) -> String {
    format!("usernames/{}.json", validate::fold_username(username))
}

pub fn goal(user_id: Uuid, goal_id: Uuid) -> String {
    format!("goals/{user_id}/{goal_id}.json")
}

/// All of one user's goal records live under this prefix; it is the
/// ownership boundary for goal reads and mutations.
pub fn goals_prefix(user_id: Uuid) -> String {
    format!("goals/{user_id}/")
}
